use crate::{Error, Result};

/// Slot value in `positions` for vertices that are not in the heap. Slot 0 of
/// the heap array is never used, so it doubles as the sentinel.
const ABSENT: usize = 0;

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    key: i64,
    vertex: usize,
}

/// Array-backed binary min-heap over vertex ids `1..=capacity` with
/// decrease-key.
///
/// The heap owns its vertex -> slot map, which gives O(1) membership tests
/// and lets `decrease_key` find an entry without searching. Keys are supplied
/// by the caller on `insert` and `decrease_key`.
///
/// Equal keys are ordered by heap layout alone: a fixed sequence of
/// operations always produces the same extraction order.
#[derive(Debug)]
pub struct IndexedMinHeap {
    /// 1-indexed heap array; `slots[0]` is a placeholder
    slots: Vec<HeapEntry>,
    /// vertex -> slot in `slots`, or `ABSENT`
    positions: Vec<usize>,
    capacity: usize,
}

impl IndexedMinHeap {
    /// Creates an empty heap able to hold vertices `1..=capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(HeapEntry { key: 0, vertex: 0 });

        IndexedMinHeap {
            slots,
            positions: vec![ABSENT; capacity + 1],
            capacity,
        }
    }

    /// Returns the number of vertices currently in the heap
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if `vertex` is currently in the heap
    pub fn contains(&self, vertex: usize) -> bool {
        self.position(vertex).is_some()
    }

    /// Current slot of `vertex` in the heap array (1-based)
    pub fn position(&self, vertex: usize) -> Option<usize> {
        match self.positions.get(vertex) {
            Some(&slot) if slot != ABSENT => Some(slot),
            _ => None,
        }
    }

    /// Key of `vertex` if it is in the heap
    pub fn key(&self, vertex: usize) -> Option<i64> {
        self.position(vertex).map(|slot| self.slots[slot].key)
    }

    /// Returns the minimum vertex and its key without removing it
    pub fn peek(&self) -> Option<(usize, i64)> {
        self.slots.get(1).map(|entry| (entry.vertex, entry.key))
    }

    /// Adds `vertex` with the given key.
    ///
    /// Each vertex may be present at most once, and never more than
    /// `capacity` vertices can be held at the same time.
    pub fn insert(&mut self, vertex: usize, key: i64) -> Result<()> {
        if self.len() >= self.capacity {
            return Err(Error::HeapCapacityExceeded {
                capacity: self.capacity,
            });
        }
        if vertex == 0 || vertex > self.capacity {
            return Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: self.capacity,
            });
        }
        if self.contains(vertex) {
            return Err(Error::AlreadyQueued(vertex));
        }

        self.slots.push(HeapEntry { key, vertex });
        let slot = self.len();
        self.positions[vertex] = slot;
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the vertex with the smallest key, or `None` if the heap is empty
    pub fn extract_min(&mut self) -> Option<(usize, i64)> {
        if self.is_empty() {
            return None;
        }

        let last = self.len();
        self.slots.swap(1, last);
        let min = self.slots.pop()?;
        self.positions[min.vertex] = ABSENT;

        if !self.is_empty() {
            self.positions[self.slots[1].vertex] = 1;
            self.sift_down(1);
        }

        Some((min.vertex, min.key))
    }

    /// Lowers the key of a vertex already in the heap and restores heap order.
    ///
    /// Keys only ever decrease here, so only an upward pass is needed.
    pub fn decrease_key(&mut self, vertex: usize, key: i64) -> Result<()> {
        let slot = self.position(vertex).ok_or(Error::NotQueued(vertex))?;
        debug_assert!(
            key <= self.slots[slot].key,
            "decrease_key raised the key of vertex {}",
            vertex
        );

        self.slots[slot].key = key;
        self.sift_up(slot);
        Ok(())
    }

    /// Empties the heap, keeping its capacity
    pub fn clear(&mut self) {
        for entry in self.slots.drain(1..) {
            self.positions[entry.vertex] = ABSENT;
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        let entry = self.slots[slot];
        while slot > 1 && entry.key < self.slots[slot / 2].key {
            let parent = self.slots[slot / 2];
            self.place(slot, parent);
            slot /= 2;
        }
        self.place(slot, entry);
    }

    fn sift_down(&mut self, mut slot: usize) {
        let entry = self.slots[slot];
        let len = self.len();

        while 2 * slot <= len {
            let mut child = 2 * slot;
            if child < len && self.slots[child + 1].key < self.slots[child].key {
                child += 1;
            }
            if self.slots[child].key < entry.key {
                let smaller = self.slots[child];
                self.place(slot, smaller);
                slot = child;
            } else {
                break;
            }
        }
        self.place(slot, entry);
    }

    fn place(&mut self, slot: usize, entry: HeapEntry) {
        self.slots[slot] = entry;
        self.positions[entry.vertex] = slot;
    }
}

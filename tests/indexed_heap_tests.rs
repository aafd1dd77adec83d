use road_spt::data_structures::IndexedMinHeap;
use road_spt::Error;

#[test]
fn test_extracts_in_key_order() {
    let mut heap = IndexedMinHeap::with_capacity(6);
    for (vertex, key) in [(1, 50), (2, 10), (3, 40), (4, 20), (5, 30), (6, 0)] {
        heap.insert(vertex, key).unwrap();
    }
    assert_eq!(heap.len(), 6);

    let mut order = Vec::new();
    while let Some((vertex, key)) = heap.extract_min() {
        assert!(!heap.contains(vertex));
        order.push((vertex, key));
    }

    assert_eq!(order, vec![(6, 0), (2, 10), (4, 20), (5, 30), (3, 40), (1, 50)]);
    assert!(heap.is_empty());
}

#[test]
fn test_decrease_key_moves_vertex_to_root() {
    let mut heap = IndexedMinHeap::with_capacity(4);
    heap.insert(1, 5).unwrap();
    heap.insert(2, 8).unwrap();
    heap.insert(3, 9).unwrap();
    heap.insert(4, 12).unwrap();

    heap.decrease_key(4, 1).unwrap();
    assert_eq!(heap.position(4), Some(1));
    assert_eq!(heap.key(4), Some(1));
    assert_eq!(heap.peek(), Some((4, 1)));

    assert_eq!(heap.extract_min(), Some((4, 1)));
    assert_eq!(heap.extract_min(), Some((1, 5)));
}

#[test]
fn test_membership_and_positions() {
    let mut heap = IndexedMinHeap::with_capacity(3);
    assert!(!heap.contains(2));
    assert_eq!(heap.position(2), None);

    heap.insert(2, 7).unwrap();
    assert!(heap.contains(2));
    assert_eq!(heap.position(2), Some(1));

    // Out-of-range ids are simply absent
    assert!(!heap.contains(0));
    assert!(!heap.contains(99));
}

#[test]
fn test_empty_heap_yields_none() {
    let mut heap = IndexedMinHeap::with_capacity(2);
    assert_eq!(heap.extract_min(), None);
    assert_eq!(heap.peek(), None);

    heap.insert(1, 3).unwrap();
    assert_eq!(heap.extract_min(), Some((1, 3)));
    assert_eq!(heap.extract_min(), None);
}

#[test]
fn test_capacity_exceeded_is_an_error() {
    let mut heap = IndexedMinHeap::with_capacity(2);
    assert_eq!(heap.capacity(), 2);
    heap.insert(1, 1).unwrap();
    heap.insert(2, 2).unwrap();
    assert_eq!(heap.len(), heap.capacity());

    match heap.insert(3, 3) {
        Err(Error::HeapCapacityExceeded { capacity }) => assert_eq!(capacity, 2),
        other => panic!("expected HeapCapacityExceeded, got {:?}", other),
    }
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_insertion_discipline_errors() {
    let mut heap = IndexedMinHeap::with_capacity(3);
    heap.insert(1, 4).unwrap();

    assert!(matches!(heap.insert(1, 2), Err(Error::AlreadyQueued(1))));
    assert!(matches!(heap.insert(0, 2), Err(Error::VertexOutOfRange { vertex: 0, .. })));
    assert!(matches!(heap.decrease_key(3, 0), Err(Error::NotQueued(3))));

    // A removed vertex can no longer have its key decreased
    heap.extract_min().unwrap();
    assert!(matches!(heap.decrease_key(1, 0), Err(Error::NotQueued(1))));
}

#[test]
fn test_equal_keys_extract_deterministically() {
    let run = || {
        let mut heap = IndexedMinHeap::with_capacity(5);
        for vertex in [3, 1, 5, 2, 4] {
            heap.insert(vertex, 7).unwrap();
        }
        let mut order = Vec::new();
        while let Some((vertex, _)) = heap.extract_min() {
            order.push(vertex);
        }
        order
    };

    let first = run();
    assert_eq!(first.len(), 5);
    assert_eq!(first[0], 3);
    assert_eq!(run(), first);
}

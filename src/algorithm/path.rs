use crate::{Error, Result};

/// Walks predecessor links from `end` back to `start` and returns the path in
/// start-to-end order.
///
/// `predecessors` is indexed by vertex id with slot 0 unused, so it holds
/// `V + 1` entries. A chain that needs more than `V` vertices, or that stops
/// before reaching `start`, is reported as corrupt.
pub fn reconstruct_path(
    predecessors: &[Option<usize>],
    start: usize,
    end: usize,
) -> Result<Vec<usize>> {
    let vertex_count = predecessors.len().saturating_sub(1);
    let corrupt = || Error::CorruptPredecessorChain { start, end };

    let mut path = vec![end];
    let mut current = end;

    while current != start {
        if path.len() >= vertex_count {
            return Err(corrupt());
        }
        current = predecessors
            .get(current)
            .copied()
            .flatten()
            .ok_or_else(corrupt)?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_chain_is_reported() {
        // 3 -> 2 -> 3 never reaches 1
        let predecessors = [None, None, Some(3), Some(2)];
        assert!(matches!(
            reconstruct_path(&predecessors, 1, 3),
            Err(Error::CorruptPredecessorChain { start: 1, end: 3 })
        ));
    }

    #[test]
    fn test_broken_chain_is_reported() {
        let predecessors = [None, None, None, Some(2)];
        assert!(matches!(
            reconstruct_path(&predecessors, 1, 3),
            Err(Error::CorruptPredecessorChain { .. })
        ));
    }

    #[test]
    fn test_chain_through_every_vertex() {
        let predecessors = [None, None, Some(1), Some(2)];
        assert_eq!(reconstruct_path(&predecessors, 1, 3).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_vertex_path() {
        let predecessors = [None, None];
        assert_eq!(reconstruct_path(&predecessors, 1, 1).unwrap(), vec![1]);
    }
}

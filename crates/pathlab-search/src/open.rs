use pathlab_core::Pos;

/// Open-set entry for the best-first searches, ordered by `key` with an
/// insertion sequence number as the tie-breaker.
///
/// `Ord` is reversed so `BinaryHeap` (a max-heap) pops the smallest key
/// first; among equal keys the earliest-pushed entry wins, giving FIFO
/// tie-breaking. Stale entries left behind by re-pushes are discarded at
/// extraction via the settled check.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) key: u32,
    pub(crate) seq: u32,
    pub(crate) pos: Pos,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn pops_smallest_key_fifo_on_ties() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { key: 5, seq: 0, pos: Pos::new(0, 0) });
        heap.push(OpenEntry { key: 3, seq: 1, pos: Pos::new(0, 1) });
        heap.push(OpenEntry { key: 3, seq: 2, pos: Pos::new(0, 2) });
        heap.push(OpenEntry { key: 4, seq: 3, pos: Pos::new(0, 3) });
        let order: Vec<Pos> = std::iter::from_fn(|| heap.pop().map(|e| e.pos)).collect();
        assert_eq!(
            order,
            vec![
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(0, 3),
                Pos::new(0, 0),
            ]
        );
    }
}

//! Traversal-order computation for open and close sequences.
//!
//! Given a direction, an inclusive sub-range of the slot store, and the
//! reverse flag, the sequencer yields slot indices one at a time in the order
//! they must transition. "Reverse" flips which physical end of the store is
//! the visual front, so it both mirrors the indices (`count - 1 - i`) and
//! flips the stepping direction, while the sequence still unwinds toward the
//! other boundary of the requested range.
//!
//! | direction | reverse = false          | reverse = true                          |
//! |-----------|--------------------------|-----------------------------------------|
//! | open      | `start..=end` ascending  | `count-1-start..=count-1-end` descending |
//! | close     | `end..=start` descending | `count-1-end..=count-1-start` ascending  |

/// Direction of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Reveals slots (rotation 90 -> 0).
    Open,
    /// Hides slots (rotation 0 -> 90).
    Close,
}

/// Steps a cursor across one sequence's traversal order.
///
/// Callers construct a sequencer only for non-empty, pre-clamped ranges
/// (`start <= end < count`); empty sequences are completed trivially without
/// one.
#[derive(Debug, Clone)]
pub struct Sequencer {
    kind: SequenceKind,
    cursor: isize,
    last: isize,
    step: isize,
}

impl Sequencer {
    /// Computes the traversal order for `kind` over `start..=end`.
    pub fn new(kind: SequenceKind, start: usize, end: usize, reverse: bool, count: usize) -> Self {
        debug_assert!(start <= end && end < count);
        let (start, end, count) = (start as isize, end as isize, count as isize);
        let (cursor, last, step) = match (kind, reverse) {
            (SequenceKind::Open, false) => (start, end, 1),
            (SequenceKind::Open, true) => (count - 1 - start, count - 1 - end, -1),
            (SequenceKind::Close, false) => (end, start, -1),
            (SequenceKind::Close, true) => (count - 1 - end, count - 1 - start, 1),
        };
        Self {
            kind,
            cursor,
            last,
            step,
        }
    }

    /// The direction this sequence runs in.
    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    /// The first slot index to transition.
    pub fn first(&self) -> usize {
        self.cursor as usize
    }

    /// Advances the cursor by one step.
    ///
    /// Returns the next slot index to transition, or `None` once the range is
    /// exhausted and the sequence is complete.
    pub fn advance(&mut self) -> Option<usize> {
        self.cursor += self.step;
        let within = if self.step > 0 {
            self.cursor <= self.last
        } else {
            self.cursor >= self.last
        };
        within.then_some(self.cursor as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects the full visiting order of a sequencer.
    fn visit_order(seq: &mut Sequencer) -> Vec<usize> {
        let mut order = vec![seq.first()];
        while let Some(next) = seq.advance() {
            order.push(next);
        }
        order
    }

    #[test]
    fn open_forward_ascends_through_range() {
        let mut seq = Sequencer::new(SequenceKind::Open, 1, 3, false, 5);
        assert_eq!(visit_order(&mut seq), vec![1, 2, 3]);
    }

    #[test]
    fn open_reverse_descends_through_mirrored_range() {
        let mut seq = Sequencer::new(SequenceKind::Open, 1, 3, true, 5);
        assert_eq!(visit_order(&mut seq), vec![3, 2, 1]);
    }

    #[test]
    fn close_forward_descends_through_range() {
        let mut seq = Sequencer::new(SequenceKind::Close, 1, 3, false, 5);
        assert_eq!(visit_order(&mut seq), vec![3, 2, 1]);
    }

    #[test]
    fn close_reverse_ascends_through_mirrored_range() {
        let mut seq = Sequencer::new(SequenceKind::Close, 1, 3, true, 5);
        assert_eq!(visit_order(&mut seq), vec![1, 2, 3]);
    }

    #[test]
    fn asymmetric_range_mirrors_correctly_when_reversed() {
        // count = 6, range 0..=2; mirrored indices are 5, 4, 3
        let mut seq = Sequencer::new(SequenceKind::Open, 0, 2, true, 6);
        assert_eq!(visit_order(&mut seq), vec![5, 4, 3]);

        let mut seq = Sequencer::new(SequenceKind::Close, 0, 2, true, 6);
        assert_eq!(visit_order(&mut seq), vec![3, 4, 5]);
    }

    #[test]
    fn single_slot_range_visits_once() {
        for kind in [SequenceKind::Open, SequenceKind::Close] {
            for reverse in [false, true] {
                let mut seq = Sequencer::new(kind, 2, 2, reverse, 5);
                assert_eq!(visit_order(&mut seq), vec![2], "{:?} reverse={}", kind, reverse);
            }
        }
    }

    #[test]
    fn full_range_covers_every_slot() {
        let mut seq = Sequencer::new(SequenceKind::Open, 0, 4, false, 5);
        assert_eq!(visit_order(&mut seq), vec![0, 1, 2, 3, 4]);

        let mut seq = Sequencer::new(SequenceKind::Close, 0, 4, false, 5);
        assert_eq!(visit_order(&mut seq), vec![4, 3, 2, 1, 0]);

        let mut seq = Sequencer::new(SequenceKind::Open, 0, 4, true, 5);
        assert_eq!(visit_order(&mut seq), vec![4, 3, 2, 1, 0]);

        let mut seq = Sequencer::new(SequenceKind::Close, 0, 4, true, 5);
        assert_eq!(visit_order(&mut seq), vec![0, 1, 2, 3, 4]);
    }
}

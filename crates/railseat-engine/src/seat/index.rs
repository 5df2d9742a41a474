//! Seat index: an arena of seats arranged as an unbalanced binary search tree.
//!
//! The tree shape is determined purely by insertion order. The first seat
//! inserted is the root; each later seat descends left when its number is
//! smaller than the node's and right otherwise. No rebalancing happens, so
//! level-order output reflects insertion order exactly.

use std::collections::{HashMap, VecDeque};

use railseat_core::error::AppError;
use railseat_core::types::{SeatNumber, Section};

use super::{Seat, SeatId};

#[derive(Debug, Clone)]
struct Node {
    seat: Seat,
    left: Option<SeatId>,
    right: Option<SeatId>,
}

/// Ordered collection of seats keyed by seat number.
#[derive(Debug, Clone, Default)]
pub struct SeatIndex {
    nodes: Vec<Node>,
    root: Option<SeatId>,
    by_number: HashMap<SeatNumber, SeatId>,
}

impl SeatIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new unbooked seat.
    ///
    /// Duplicate seat numbers are rejected and leave the index untouched.
    pub fn insert(
        &mut self,
        number: SeatNumber,
        section: Section,
        rac_capacity: usize,
    ) -> Result<SeatId, AppError> {
        if self.by_number.contains_key(&number) {
            return Err(AppError::duplicate_seat(number));
        }

        let id = SeatId(self.nodes.len());

        if let Some(root) = self.root {
            let mut cursor = root;
            loop {
                let node = &mut self.nodes[cursor.0];
                let slot = if number < node.seat.number() {
                    &mut node.left
                } else {
                    &mut node.right
                };
                match *slot {
                    Some(next) => cursor = next,
                    None => {
                        *slot = Some(id);
                        break;
                    }
                }
            }
        } else {
            self.root = Some(id);
        }

        self.nodes.push(Node {
            seat: Seat::new(number, section, rac_capacity),
            left: None,
            right: None,
        });
        self.by_number.insert(number, id);

        Ok(id)
    }

    /// Number of seats.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index holds no seats.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Seat by arena slot.
    pub fn get(&self, id: SeatId) -> Option<&Seat> {
        self.nodes.get(id.0).map(|n| &n.seat)
    }

    pub(crate) fn get_mut(&mut self, id: SeatId) -> Option<&mut Seat> {
        self.nodes.get_mut(id.0).map(|n| &mut n.seat)
    }

    /// Arena slot of the seat with the given number.
    pub fn find(&self, number: SeatNumber) -> Option<SeatId> {
        self.by_number.get(&number).copied()
    }

    /// Seats in creation order.
    pub fn seats(&self) -> impl Iterator<Item = (SeatId, &Seat)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (SeatId(i), &n.seat))
    }

    /// Seat numbers in ascending order.
    pub fn in_order(&self) -> InOrder<'_> {
        let mut iter = InOrder {
            index: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Seat numbers breadth-first from the root (the first seat inserted).
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder {
            index: self,
            queue: self.root.into_iter().collect(),
        }
    }
}

/// Lazy in-order traversal; see [`SeatIndex::in_order`].
#[derive(Debug)]
pub struct InOrder<'a> {
    index: &'a SeatIndex,
    stack: Vec<SeatId>,
}

impl InOrder<'_> {
    fn push_left_spine(&mut self, mut next: Option<SeatId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.index.nodes[id.0].left;
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = SeatNumber;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.index.nodes[id.0];
        let (right, number) = (node.right, node.seat.number());
        self.push_left_spine(right);
        Some(number)
    }
}

/// Lazy level-order traversal; see [`SeatIndex::level_order`].
#[derive(Debug)]
pub struct LevelOrder<'a> {
    index: &'a SeatIndex,
    queue: VecDeque<SeatId>,
}

impl Iterator for LevelOrder<'_> {
    type Item = SeatNumber;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = &self.index.nodes[id.0];
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(node.seat.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railseat_core::error::ErrorKind;

    fn build(numbers: &[i64]) -> SeatIndex {
        let mut index = SeatIndex::new();
        for &n in numbers {
            index.insert(SeatNumber(n), Section::Front, 2).unwrap();
        }
        index
    }

    fn numbers(iter: impl Iterator<Item = SeatNumber>) -> Vec<i64> {
        iter.map(SeatNumber::get).collect()
    }

    #[test]
    fn test_in_order_is_sorted() {
        let index = build(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(
            numbers(index.in_order()),
            vec![20, 30, 40, 50, 60, 70, 80]
        );
    }

    #[test]
    fn test_level_order_follows_insertion_shape() {
        let index = build(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(
            numbers(index.level_order()),
            vec![50, 30, 70, 20, 40, 60, 80]
        );

        // Ascending insertion degenerates into a right-leaning chain.
        let chain = build(&[1, 2, 3, 4]);
        assert_eq!(numbers(chain.level_order()), vec![1, 2, 3, 4]);
        assert_eq!(numbers(chain.in_order()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_traversals_are_restartable() {
        let index = build(&[3, 1, 2]);
        let first: Vec<_> = index.in_order().collect();
        let second: Vec<_> = index.in_order().collect();
        assert_eq!(first, second);
        assert_eq!(numbers(index.level_order()), vec![3, 1, 2]);
        assert_eq!(numbers(index.level_order()), vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_index() {
        let index = SeatIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.in_order().count(), 0);
        assert_eq!(index.level_order().count(), 0);
    }

    #[test]
    fn test_duplicate_rejected_without_change() {
        let mut index = build(&[5, 3]);
        let err = index.insert(SeatNumber(3), Section::Rear, 2).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateSeat);
        assert_eq!(index.len(), 2);
        assert_eq!(numbers(index.in_order()), vec![3, 5]);
        let id = index.find(SeatNumber(3)).unwrap();
        assert_eq!(index.get(id).unwrap().section(), Section::Front);
    }

    #[test]
    fn test_seats_in_creation_order() {
        let index = build(&[9, 2, 7]);
        let order: Vec<_> = index.seats().map(|(_, s)| s.number().get()).collect();
        assert_eq!(order, vec![9, 2, 7]);
        assert_eq!(index.find(SeatNumber(7)).map(SeatId::index), Some(2));
    }
}

use super::direction::Direction;
use super::tile::Tile;
use std::collections::VecDeque;

/// Snake state.  Snate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Tile,

    /// The positions of the segments of the snake's body, ordered from the
    /// one nearest the head to the tip of the tail
    pub(super) body: VecDeque<Tile>,

    /// The direction in which the snake is moving, or `None` if it has not
    /// started moving yet
    pub(super) velocity: Option<Direction>,
}

impl Snake {
    /// Create a new motionless snake with its head at `head` and no body
    pub(super) fn new(head: Tile) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
            velocity: None,
        }
    }

    pub(super) fn head(&self) -> Tile {
        self.head
    }

    pub(super) fn body(&self) -> &VecDeque<Tile> {
        &self.body
    }

    /// Start moving in `direction`, unless that would reverse the snake's
    /// current direction.
    pub(super) fn turn(&mut self, direction: Direction) {
        if !self.velocity.is_some_and(|v| v.reverse() == direction) {
            self.velocity = Some(direction);
        }
    }

    /// Add a new segment to the end of the body at `tile`
    pub(super) fn grow(&mut self, tile: Tile) {
        self.body.push_back(tile);
    }

    /// Move the snake one step at its current velocity.  Each body segment
    /// takes the place of the one in front of it, the first segment takes the
    /// head's old place, and the segment at the end of the tail is dropped.
    pub(super) fn advance(&mut self) {
        if self.body.pop_back().is_some() {
            self.body.push_front(self.head);
        }
        self.head = self.head.step(self.velocity);
    }

    /// Test whether the head occupies the same tile as any body segment
    pub(super) fn bites_itself(&self) -> bool {
        self.body.contains(&self.head)
    }
}

use super::direction::Direction;
use crate::consts;
use rand::Rng;

/// A cell of the board, addressed by column (`x`) and row (`y`) with the
/// origin at the top-left corner.
///
/// Coordinates are signed because the snake's head can end up one tile past
/// a wall on the tick in which it crashes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(super) struct Tile {
    pub(super) x: i32,
    pub(super) y: i32,
}

impl Tile {
    pub(super) const fn new(x: i32, y: i32) -> Tile {
        Tile { x, y }
    }

    /// Choose a tile uniformly at random from the whole board.  Occupied tiles
    /// are not excluded.
    pub(super) fn random<R: Rng>(rng: &mut R) -> Tile {
        Tile {
            x: rng.random_range(0..consts::GRID_WIDTH),
            y: rng.random_range(0..consts::GRID_HEIGHT),
        }
    }

    /// Return the tile reached by moving one step at the given velocity.  A
    /// velocity of `None` means the snake is standing still.
    pub(super) fn step(self, velocity: Option<Direction>) -> Tile {
        let Some(d) = velocity else {
            return self;
        };
        let (dx, dy) = d.delta();
        Tile {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Test whether the tile lies on the board, i.e., whether its top-left
    /// pixel is within `[0, BOARD_SIZE_PX - TILE_SIZE_PX]` on both axes
    pub(super) fn on_board(self) -> bool {
        let max = consts::BOARD_SIZE_PX - consts::TILE_SIZE_PX;
        let px = self.x.saturating_mul(consts::TILE_SIZE_PX);
        let py = self.y.saturating_mul(consts::TILE_SIZE_PX);
        (0..=max).contains(&px) && (0..=max).contains(&py)
    }

    /// Iterate over every tile on the board in row-major order
    pub(super) fn all() -> impl Iterator<Item = Tile> {
        (0..consts::GRID_HEIGHT)
            .flat_map(|y| (0..consts::GRID_WIDTH).map(move |x| Tile { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    #[rstest]
    #[case(Tile::new(0, 0), true)]
    #[case(Tile::new(19, 19), true)]
    #[case(Tile::new(2, 10), true)]
    #[case(Tile::new(-1, 10), false)]
    #[case(Tile::new(20, 10), false)]
    #[case(Tile::new(5, -1), false)]
    #[case(Tile::new(5, 20), false)]
    #[case(Tile::new(i32::MAX, 0), false)]
    fn test_on_board(#[case] tile: Tile, #[case] on: bool) {
        assert_eq!(tile.on_board(), on);
    }

    #[rstest]
    #[case(None, Tile::new(2, 10))]
    #[case(Some(Direction::North), Tile::new(2, 9))]
    #[case(Some(Direction::South), Tile::new(2, 11))]
    #[case(Some(Direction::East), Tile::new(3, 10))]
    #[case(Some(Direction::West), Tile::new(1, 10))]
    fn test_step(#[case] velocity: Option<Direction>, #[case] after: Tile) {
        assert_eq!(Tile::new(2, 10).step(velocity), after);
    }

    #[test]
    fn random_tiles_on_board() {
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..1000 {
            let tile = Tile::random(&mut rng);
            assert!(tile.on_board(), "{tile:?} is off the board");
            assert!((0..20).contains(&tile.x));
            assert!((0..20).contains(&tile.y));
        }
    }

    #[test]
    fn all_tiles() {
        let tiles = Tile::all().collect::<Vec<_>>();
        assert_eq!(tiles.len(), 400);
        assert_eq!(tiles.first(), Some(&Tile::new(0, 0)));
        assert_eq!(tiles.get(1), Some(&Tile::new(1, 0)));
        assert_eq!(tiles.last(), Some(&Tile::new(19, 19)));
        assert!(tiles.iter().all(|t| t.on_board()));
    }
}

//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Width & height of the square play area, measured in pixels of the logical
/// 500×600 window the game was laid out for
pub(crate) const BOARD_SIZE_PX: i32 = 500;

/// Width & height of a single tile, in logical pixels
pub(crate) const TILE_SIZE_PX: i32 = 25;

/// Number of tile columns on the board
pub(crate) const GRID_WIDTH: i32 = BOARD_SIZE_PX / TILE_SIZE_PX;

/// Number of tile rows on the board
pub(crate) const GRID_HEIGHT: i32 = BOARD_SIZE_PX / TILE_SIZE_PX;

/// Number of terminal columns used to draw one tile.  Terminal cells are
/// about twice as tall as they are wide, so this keeps tiles roughly square.
pub(crate) const TILE_COLUMNS: u16 = 2;

/// Height of the bordered board: one row per tile plus the top & bottom
/// borders
pub(crate) const BOARD_HEIGHT: u16 = 22;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: the bordered board, the score labels, and a message row.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 42,
    height: BOARD_HEIGHT + 2,
};

/// Tile on which the snake's head starts each game
pub(crate) const SNAKE_START: (i32, i32) = (2, 10);

/// Score at the start of a game, before any fruit has been eaten
pub(crate) const INITIAL_SCORE: u32 = 1;

/// Glyphs for an empty tile; these form the grid over the play area
pub(crate) const GRID_SYMBOL: &str = "· ";

/// Glyphs for the snake's head and body
pub(crate) const SNAKE_SYMBOL: &str = "██";

/// Glyphs for the fruit
pub(crate) const FRUIT_SYMBOL: &str = "● ";

/// Glyphs for the snake's head after it has run into itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the grid drawn over the play area
pub(crate) const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the fruit
pub(crate) const FRUIT_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the score & high score labels below the board
pub(crate) const LABEL_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

mod direction;
mod snake;
mod tile;
use self::direction::Direction;
use self::snake::Snake;
use self::tile::Tile;
use crate::command::Command;
use crate::consts;
use crate::highscore::{HighScoreFile, SaveError};
use crate::util::get_display_area;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    score: u32,
    /// The high score as it stood when this round started
    high_score: u32,
    /// Set once this round's score has been saved as the new high score
    new_high_score: bool,
    snake: Snake,
    fruit: Tile,
    state: GameState,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(high_score: u32, mut rng: R) -> Game<R> {
        let fruit = Tile::random(&mut rng);
        Game {
            rng,
            score: consts::INITIAL_SCORE,
            high_score,
            new_high_score: false,
            snake: Snake::new(start_tile()),
            fruit,
            state: GameState::Running,
        }
    }

    /// Advance the game by one step.  Returns `true` if the snake crashed on
    /// this step, ending the game.
    pub(crate) fn tick(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        if self.snake.head() == self.fruit {
            self.snake.grow(self.fruit);
            self.place_fruit();
            self.score += 1;
        }
        self.snake.advance();
        if self.snake.bites_itself() || !self.snake.head().on_board() {
            self.state = GameState::Over;
        }
        !self.running()
    }

    pub(crate) fn handle_command(&mut self, cmd: Command) {
        match self.state {
            GameState::Running => {
                let direction = match cmd {
                    Command::Up => Direction::North,
                    Command::Down => Direction::South,
                    Command::Left => Direction::West,
                    Command::Right => Direction::East,
                    _ => return,
                };
                self.snake.turn(direction);
            }
            GameState::Over => {
                if cmd == Command::R {
                    self.restart();
                }
            }
        }
    }

    /// Reset everything to the start of a new round.  If the finished round
    /// set a new high score, that becomes the high score to beat.
    fn restart(&mut self) {
        if self.new_high_score {
            self.high_score = self.score;
        }
        self.score = consts::INITIAL_SCORE;
        self.new_high_score = false;
        self.snake = Snake::new(start_tile());
        self.state = GameState::Running;
        self.place_fruit();
    }

    fn place_fruit(&mut self) {
        self.fruit = Tile::random(&mut self.rng);
    }
}

impl<R> Game<R> {
    pub(crate) fn running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Wrap up a finished game: if the score beats the high score, write it
    /// to `file`.
    pub(crate) fn finish(&mut self, file: &HighScoreFile) -> Result<(), SaveError> {
        if self.score > self.high_score {
            file.save(self.score)?;
            self.new_high_score = true;
        }
        Ok(())
    }
}

fn start_tile() -> Tile {
    let (x, y) = consts::SNAKE_START;
    Tile::new(x, y)
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [block_area, labels_area, msg_area] = Layout::vertical([
            Constraint::Length(consts::BOARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);

        Block::bordered().render(block_area, buf);
        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for tile in Tile::all() {
            board.draw_tile(tile, consts::GRID_SYMBOL, consts::GRID_STYLE);
        }
        board.draw_tile(self.fruit, consts::FRUIT_SYMBOL, consts::FRUIT_STYLE);
        for &tile in self.snake.body() {
            board.draw_tile(tile, consts::SNAKE_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.running() {
            board.draw_tile(self.snake.head(), consts::SNAKE_SYMBOL, consts::SNAKE_STYLE);
        } else {
            board.draw_tile(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        }

        let [high_score_area, score_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(labels_area);
        Line::styled(format!(" High Score: {}", self.high_score), consts::LABEL_STYLE)
            .render(high_score_area, buf);
        Line::styled(format!("Score: {} ", self.score), consts::LABEL_STYLE)
            .right_aligned()
            .render(score_area, buf);

        if !self.running() {
            let headline = if self.new_high_score {
                " NEW HIGH SCORE!"
            } else {
                " GAME OVER!"
            };
            Line::from_iter([
                Span::raw(headline),
                Span::raw(" — Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg_area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` over the terminal cells making up `tile`.  Tiles off the
    /// board are not drawn.
    fn draw_tile(&mut self, tile: Tile, symbol: &str, style: Style) {
        if !tile.on_board() {
            return;
        }
        let (Ok(col), Ok(row)) = (u16::try_from(tile.x), u16::try_from(tile.y)) else {
            return;
        };
        let Some(x) = col
            .checked_mul(consts::TILE_COLUMNS)
            .and_then(|c| self.area.x.checked_add(c))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        for (x, ch) in (x..).zip(symbol.chars()) {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(style);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Over,
}

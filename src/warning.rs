use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up reporting an error that the game recovered from, such as a high
/// score that could not be saved
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const MAX_LINES: u16 = 20;
    const TEXT_WIDTH: u16 = 36;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter => Some(WarningOutcome::Dismissed),
            Command::Quit => Some(WarningOutcome::Quit),
            _ => None,
        }
    }

    fn from_error_messages(msgs: Vec<String>) -> Self {
        let mut msgs = msgs.into_iter();
        let Some(first) = msgs.next() else {
            return Warning {
                lines: vec![String::from("Something went wrong.")],
            };
        };
        let causes = msgs.collect::<Vec<_>>();
        let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH)).break_words(true);
        let mut lines = textwrap::wrap(&first, opts)
            .into_iter()
            .map(Cow::into_owned)
            .collect::<Vec<_>>();
        match causes.as_slice() {
            [] => (),
            [cause] => {
                lines.push(String::new());
                lines.push(String::from("Caused by:"));
                let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
                    .break_words(true)
                    .initial_indent("    ")
                    .subsequent_indent("    ");
                lines.extend(textwrap::wrap(cause, opts).into_iter().map(Cow::into_owned));
            }
            causes => {
                lines.push(String::new());
                lines.push(String::from("Caused by:"));
                for (i, m) in causes.iter().enumerate() {
                    let init_indent = format!("{i:>5}: ");
                    let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
                        .break_words(true)
                        .initial_indent(&init_indent)
                        .subsequent_indent("       ");
                    lines.extend(textwrap::wrap(m, opts).into_iter().map(Cow::into_owned));
                }
            }
        }
        Warning { lines }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl<E: std::error::Error> From<E> for Warning {
    fn from(e: E) -> Warning {
        let mut msgs = vec![e.to_string()];
        let mut source = e.source();
        while let Some(src) = source {
            msgs.push(src.to_string());
            source = src.source();
        }
        Warning::from_error_messages(msgs)
    }
}

impl Widget for &Warning {
    // `area` is here the area in which the game is displayed, not the area for
    // just the widget proper.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .min(Warning::MAX_LINES);
        let block_area = center_rect(
            area,
            Size {
                width: Warning::WIDTH,
                height: text_height.saturating_add(4),
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        let mut text = Text::from_iter(self.lines.iter().map(String::as_str));
        if text_height < u16::try_from(text.lines.len()).unwrap_or(u16::MAX) {
            // Mark the cut with an ellipsis on the last row that fits
            text.lines.truncate(usize::from(text_height - 1));
            text.lines.push(Line::from("…"));
        }
        text.render(text_area, buf);
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscore::HighScoreFile;
    use ratatui::{
        buffer::Buffer,
        layout::{Position, Rect},
    };

    #[test]
    fn error_chain() {
        let tmpdir = tempfile::tempdir().expect("failed to create temporary directory");
        // A directory cannot be read as a file
        let e = HighScoreFile::new(tmpdir.path().to_path_buf())
            .load()
            .expect_err("load should fail");
        let warning = Warning::from(e);
        assert_eq!(
            warning.lines.first().map(String::as_str),
            Some("Failed to read high score from disk")
        );
        assert_eq!(warning.lines.get(1).map(String::as_str), Some(""));
        assert_eq!(warning.lines.get(2).map(String::as_str), Some("Caused by:"));
        assert!(warning.lines.len() > 3);
        assert!(warning.lines.iter().skip(3).all(|ln| ln.starts_with("  ")));
    }

    #[test]
    fn handle_commands() {
        let warning = Warning::from_error_messages(vec![String::from("Disk on fire")]);
        assert_eq!(
            warning.handle_command(Command::Enter),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Quit),
            Some(WarningOutcome::Quit)
        );
        assert_eq!(warning.handle_command(Command::Up), None);
        assert_eq!(warning.handle_command(Command::Q), None);
    }

    #[test]
    fn render_no_cause() {
        let warning = Warning::from_error_messages(vec![String::from("Terminal broke")]);
        let area = Rect::new(0, 0, 42, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            " ┌────────────── WARNING ───────────────┐ ",
            " │ Terminal broke                       │ ",
            " │                                      │ ",
            " │                 [OK]                 │ ",
            " └──────────────────────────────────────┘ ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_one_cause() {
        let warning = Warning::from_error_messages(vec![
            String::from("Failed to save high score to disk"),
            String::from("failed to write high score file"),
        ]);
        let area = Rect::new(0, 0, 42, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            " ┌────────────── WARNING ───────────────┐ ",
            " │ Failed to save high score to disk    │ ",
            " │                                      │ ",
            " │ Caused by:                           │ ",
            " │     failed to write high score file  │ ",
            " │                                      │ ",
            " │                 [OK]                 │ ",
            " └──────────────────────────────────────┘ ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_two_causes() {
        let warning = Warning::from_error_messages(vec![
            String::from("Failed to draw snake"),
            String::from("terminal broke"),
            String::from("not a tty"),
        ]);
        let area = Rect::new(0, 0, 42, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            " ┌────────────── WARNING ───────────────┐ ",
            " │ Failed to draw snake                 │ ",
            " │                                      │ ",
            " │ Caused by:                           │ ",
            " │     0: terminal broke                │ ",
            " │     1: not a tty                     │ ",
            " │                                      │ ",
            " │                 [OK]                 │ ",
            " └──────────────────────────────────────┘ ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }
    #[test]
    fn render_truncated() {
        let warning = Warning {
            lines: (0..25).map(|i| format!("Error #{i}")).collect(),
        };
        let area = Rect::new(0, 0, 42, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        assert_eq!(buffer[Position::new(1, 0)].symbol(), "┌");
        assert_eq!(buffer[Position::new(1, 23)].symbol(), "└");
        assert_eq!(buffer[Position::new(3, 1)].symbol(), "E");
        assert_eq!(buffer[Position::new(10, 19)].symbol(), "1");
        assert_eq!(buffer[Position::new(11, 19)].symbol(), "8");
        assert_eq!(buffer[Position::new(3, 20)].symbol(), "…");
        assert_eq!(buffer[Position::new(4, 20)].symbol(), " ");
        assert_eq!(buffer[Position::new(19, 22)].symbol(), "[");
    }

    #[test]
    fn render_max_lines_untruncated() {
        let warning = Warning {
            lines: (0..20).map(|i| format!("Error #{i}")).collect(),
        };
        let area = Rect::new(0, 0, 42, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        assert_eq!(buffer[Position::new(3, 20)].symbol(), "E");
        assert_eq!(buffer[Position::new(10, 20)].symbol(), "1");
        assert_eq!(buffer[Position::new(11, 20)].symbol(), "9");
    }
}

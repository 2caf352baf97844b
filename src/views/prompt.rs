use crate::shell::Prompter;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, error};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListState, Paragraph},
    Frame,
};
use std::io;
use tui_textarea::{Input, Key, TextArea};

const MIN_DIALOG_WIDTH: u16 = 40;

/// Modal dialogs drawn over the window. Each prompt takes over the terminal
/// until the user confirms with Enter or cancels with Esc.
///
/// The first terminal error is kept and every later prompt reports a
/// cancellation; callers collect the error with [`TerminalPrompter::finish`].
pub(crate) struct TerminalPrompter<'a, B: Backend> {
    term: &'a mut Terminal<B>,
    title: &'a str,
    hints: Vec<(&'static str, String)>,
    failure: Option<io::Error>,
}

impl<'a, B: Backend> TerminalPrompter<'a, B> {
    pub(crate) fn new(term: &'a mut Terminal<B>, title: &'a str) -> Self {
        TerminalPrompter {
            term,
            title,
            hints: Vec::new(),
            failure: None,
        }
    }

    /// Placeholder text shown in the input box of the prompt asking `message`.
    pub(crate) fn with_hint(mut self, message: &'static str, hint: String) -> Self {
        self.hints.push((message, hint));
        self
    }

    pub(crate) fn finish(self) -> io::Result<()> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail<T>(&mut self, e: io::Error) -> Option<T> {
        error!("Prompt aborted by terminal error: {e}");
        self.failure.get_or_insert(e);
        None
    }
}

/// Why a dialog stopped waiting.
#[derive(Debug, PartialEq, Eq)]
enum Wake {
    Key(KeyEvent),
    Redraw,
}

/// Events a dialog reacts to: key presses, and resizes that need a redraw.
fn wake(event: Event) -> Option<Wake> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Wake::Key(key)),
        Event::Resize(..) => Some(Wake::Redraw),
        _ => None,
    }
}

fn read_key() -> io::Result<Wake> {
    loop {
        if let Some(wake) = wake(event::read()?) {
            return Ok(wake);
        }
    }
}

impl<B: Backend> Prompter for TerminalPrompter<'_, B> {
    fn choose(&mut self, message: &str, options: &[&str], default: usize) -> Option<usize> {
        if self.failure.is_some() || options.is_empty() {
            return None;
        }
        let title = self.title;
        let mut state = ListState::default().with_selected(Some(default.min(options.len() - 1)));
        loop {
            let drawn = self.term.draw(|frame| {
                let body = draw_dialog(frame, title, message, options.len() as u16);
                let list = List::new(options.iter().copied())
                    .highlight_symbol("> ")
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD));
                frame.render_stateful_widget(list, body, &mut state);
            })
            .map(drop);
            if let Err(e) = drawn {
                return self.fail(e);
            }
            let key = match read_key() {
                Ok(Wake::Key(key)) => key,
                Ok(Wake::Redraw) => continue,
                Err(e) => return self.fail(e),
            };
            let current = state.selected().unwrap_or(0);
            match key.code {
                KeyCode::Up => state.select(Some(current.saturating_sub(1))),
                KeyCode::Down => state.select(Some((current + 1).min(options.len() - 1))),
                KeyCode::Enter => {
                    debug!("Chose {:?} for {message:?}", options.get(current));
                    return Some(current);
                }
                KeyCode::Esc => return None,
                _ => {}
            }
        }
    }

    fn input(&mut self, message: &str) -> Option<String> {
        if self.failure.is_some() {
            return None;
        }
        let title = self.title;
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_style(Style::default().fg(Color::White));
        if let Some((_, hint)) = self.hints.iter().find(|(m, _)| *m == message) {
            textarea.set_placeholder_text(hint.as_str());
        }
        loop {
            let drawn = self.term.draw(|frame| {
                let body = draw_dialog(frame, title, message, 1);
                frame.render_widget(&textarea, body);
            })
            .map(drop);
            if let Err(e) = drawn {
                return self.fail(e);
            }
            let key = match read_key() {
                Ok(Wake::Key(key)) => key,
                Ok(Wake::Redraw) => continue,
                Err(e) => return self.fail(e),
            };
            match Input::from(key) {
                Input { key: Key::Esc, .. } => return None,
                Input {
                    key: Key::Enter, ..
                }
                | Input {
                    key: Key::Char('m'),
                    ctrl: true,
                    ..
                } => return Some(textarea.lines().join("")),
                input => {
                    textarea.input(input);
                }
            }
        }
    }

    fn notify(&mut self, message: &str) {
        if self.failure.is_some() {
            return;
        }
        let title = self.title;
        loop {
            let drawn = self.term.draw(|frame| {
                let body = draw_dialog(frame, title, message, 1);
                frame.render_widget(Paragraph::new("[ OK ]").alignment(Alignment::Center), body);
            })
            .map(drop);
            if let Err(e) = drawn {
                self.fail::<()>(e);
                return;
            }
            match read_key() {
                Ok(Wake::Key(key))
                    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) =>
                {
                    return
                }
                Ok(_) => {}
                Err(e) => {
                    self.fail::<()>(e);
                    return;
                }
            }
        }
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Draws the window frame with a dialog box holding `message` and returns
/// the area left for the dialog's `body_height` lines of content.
fn draw_dialog(frame: &mut Frame, title: &str, message: &str, body_height: u16) -> Rect {
    let area = frame.area();
    frame.render_widget(Block::default().title(title).borders(Borders::ALL), area);

    let width = (message.chars().count() as u16).saturating_add(4).max(MIN_DIALOG_WIDTH);
    let popup = centered(area, width, body_height + 4);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(Paragraph::new(message), chunks[0]);
    chunks[2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;

    #[test]
    fn centered_is_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 40, 6), Rect::new(20, 9, 40, 6));
        assert_eq!(centered(area, 100, 30), area);
    }

    #[test]
    fn dialog_shows_title_and_message() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut body = Rect::default();
        terminal
            .draw(|frame| body = draw_dialog(frame, "To-Do List Application", "Title:", 1))
            .unwrap();
        let buf = terminal.backend().buffer();
        let text: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("To-Do List Application"));
        assert!(text.contains("Title:"));
        assert_eq!(body.height, 1);
        assert_eq!(body.width, MIN_DIALOG_WIDTH - 2);
    }

    #[test]
    fn resize_wakes_dialog_for_redraw() {
        assert_eq!(wake(Event::Resize(100, 30)), Some(Wake::Redraw));
    }

    #[test]
    fn only_key_presses_are_keys() {
        let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(wake(Event::Key(press)), Some(Wake::Key(press)));
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(wake(Event::Key(release)), None);
        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(wake(moved), None);
        assert_eq!(wake(Event::FocusLost), None);
    }
}

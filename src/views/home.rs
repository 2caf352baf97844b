use crate::{
    command_widget::{ButtonPanel, PANEL_HEIGHT},
    commands::{parse_home_command, HomeCommand},
    config::Config,
    error::Result,
    shell::{Projection, Prompter, Shell, DUE_DATE_PROMPT},
    views::prompt::TerminalPrompter,
};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, warn};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListState},
    Frame,
};
use tui_textarea::{Input, Key, TextArea};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AppState {
    Home,
    Exit,
}

/// Where the home screen put its parts on the last draw.
#[derive(Debug, Default, Clone, Copy)]
struct HomeLayout {
    list: Rect,
    buttons: Rect,
}

fn command_editor<'a>(placeholder: impl Into<String>) -> TextArea<'a> {
    let mut editor = TextArea::default();
    editor.set_cursor_line_style(Style::default());
    editor.set_placeholder_text(placeholder);
    editor.set_style(Style::default().fg(Color::White));
    editor.set_block(Block::default().title("command").borders(Borders::ALL));
    editor
}

fn draw_home(
    frame: &mut Frame,
    shell: &Shell,
    config: &Config,
    editor: &TextArea,
    list_state: &mut ListState,
) -> HomeLayout {
    let window = Block::default()
        .title(format!("{} ({})", config.window_title, shell.user().name()))
        .borders(Borders::ALL);
    let inner = window.inner(frame.area());
    frame.render_widget(window, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Length(3),
        ])
        .split(inner);

    let view = shell.view();
    let heading = match shell.projection() {
        Projection::All => format!("all tasks ({})", view.len()),
        Projection::Incomplete => format!("incomplete tasks ({})", view.len()),
    };
    let mut block = Block::default().title(heading).borders(Borders::ALL);
    if let Some(task) = shell.selected_task().filter(|t| !t.description.is_empty()) {
        block = block.title_bottom(task.description.as_str());
    }
    let list_area = block.inner(chunks[0]);
    let list = List::new(view.lines())
        .block(block)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    list_state.select(view.selected());
    frame.render_stateful_widget(list, chunks[0], list_state);

    frame.render_widget(ButtonPanel, chunks[1]);
    frame.render_widget(editor, chunks[2]);

    HomeLayout {
        list: list_area,
        buttons: chunks[1],
    }
}

/// Runs `cmd` against the shell, asking `prompter` for any dialogs. Returns
/// the next state and a message for the command line.
fn dispatch(
    shell: &mut Shell,
    prompter: &mut dyn Prompter,
    cmd: HomeCommand,
) -> (AppState, Option<String>) {
    debug!("Dispatching {cmd:?}");
    let message = match cmd {
        HomeCommand::Add => {
            let before = shell.user().len();
            shell.add_task(prompter);
            (shell.user().len() == before).then(|| "Add cancelled".to_string())
        }
        HomeCommand::Complete => {
            shell.mark_selected_complete(prompter);
            None
        }
        HomeCommand::ShowIncomplete => {
            shell.show_incomplete();
            None
        }
        HomeCommand::ShowAll => {
            shell.show_all();
            None
        }
        HomeCommand::Select(row) => {
            shell.view_mut().select(Some(row));
            shell
                .view()
                .selected()
                .is_none()
                .then(|| format!("No row {}", row + 1))
        }
        HomeCommand::Quit => return (AppState::Exit, None),
    };
    (AppState::Home, message)
}

/// The command a left click at (`column`, `row`) stands for. `offset` is how
/// far the task list is scrolled.
fn click_command(layout: HomeLayout, offset: usize, column: u16, row: u16) -> Option<HomeCommand> {
    if let Some(button) = ButtonPanel::hit(layout.buttons, column, row) {
        Some(button.command())
    } else if contains(layout.list, column, row) {
        Some(HomeCommand::Select(offset + (row - layout.list.y) as usize))
    } else {
        None
    }
}

pub(crate) fn render_home<B>(term: &mut Terminal<B>, shell: &mut Shell, config: &Config) -> Result<AppState>
where
    B: Backend,
{
    let mut editor = command_editor("Enter a command...");
    let mut list_state = ListState::default();
    let mut layout = HomeLayout::default();
    loop {
        term.draw(|frame| layout = draw_home(frame, shell, config, &editor, &mut list_state))?;

        let cmd = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match Input::from(key) {
                Input { key: Key::Esc, .. }
                | Input {
                    key: Key::Char('q'),
                    ctrl: true,
                    ..
                } => break,
                Input { key: Key::Up, .. } => {
                    shell.view_mut().select_previous();
                    None
                }
                Input { key: Key::Down, .. } => {
                    shell.view_mut().select_next();
                    None
                }
                Input {
                    key: Key::Enter, ..
                }
                | Input {
                    key: Key::Char('m'),
                    ctrl: true,
                    ..
                } => {
                    let line = editor.lines().join("");
                    match parse_home_command(&line) {
                        Ok(cmd) => {
                            editor = command_editor("Enter a command...");
                            cmd
                        }
                        Err(e) => {
                            warn!("{e}");
                            editor = command_editor(e.to_string());
                            None
                        }
                    }
                }
                input => {
                    editor.input(input);
                    None
                }
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => click_command(layout, list_state.offset(), column, row),
            _ => None,
        };

        if let Some(cmd) = cmd {
            let mut prompter = TerminalPrompter::new(term, &config.window_title)
                .with_hint(DUE_DATE_PROMPT, config.due_date_hint());
            let (next, message) = dispatch(shell, &mut prompter, cmd);
            prompter.finish()?;
            if let AppState::Exit = next {
                return Ok(next);
            }
            if let Some(message) = message {
                editor = command_editor(message);
            }
        }
    }
    Ok(AppState::Exit)
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.right() && y >= area.y && y < area.bottom()
}

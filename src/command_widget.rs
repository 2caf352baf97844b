use crate::commands::HomeCommand;
use ratatui::{
    prelude::{Alignment, Buffer, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Height of the button panel: two rows of bordered buttons.
pub(crate) const PANEL_HEIGHT: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Button {
    Add,
    MarkComplete,
    ShowIncomplete,
    ShowAll,
}

impl Button {
    /// Grid order, left to right then top to bottom.
    const ALL: [Button; 4] = [
        Button::Add,
        Button::MarkComplete,
        Button::ShowIncomplete,
        Button::ShowAll,
    ];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Button::Add => "Add Task",
            Button::MarkComplete => "Mark as Complete",
            Button::ShowIncomplete => "Show Incomplete",
            Button::ShowAll => "Show All Tasks",
        }
    }

    fn shortcut(&self) -> &'static str {
        match self {
            Button::Add => "add",
            Button::MarkComplete => "done",
            Button::ShowIncomplete => "i",
            Button::ShowAll => "ls",
        }
    }

    pub(crate) fn command(&self) -> HomeCommand {
        match self {
            Button::Add => HomeCommand::Add,
            Button::MarkComplete => HomeCommand::Complete,
            Button::ShowIncomplete => HomeCommand::ShowIncomplete,
            Button::ShowAll => HomeCommand::ShowAll,
        }
    }
}

/// The 2x2 grid of buttons under the task list.
pub(crate) struct ButtonPanel;

impl ButtonPanel {
    fn cells(area: Rect) -> Vec<(Button, Rect)> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(PANEL_HEIGHT / 2); 2])
            .split(area);
        rows.iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50); 2])
                    .split(*row)
                    .to_vec()
            })
            .zip(Button::ALL)
            .map(|(rect, button)| (button, rect))
            .collect()
    }

    /// The button drawn at terminal cell (`x`, `y`) when the panel occupies `area`.
    pub(crate) fn hit(area: Rect, x: u16, y: u16) -> Option<Button> {
        Self::cells(area)
            .into_iter()
            .find(|(_, r)| x >= r.x && x < r.right() && y >= r.y && y < r.bottom())
            .map(|(b, _)| b)
    }
}

impl Widget for ButtonPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (button, rect) in Self::cells(area) {
            Paragraph::new(button.label())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(":{}", button.shortcut()))
                        .title_style(Style::default().fg(Color::DarkGray)),
                )
                .render(rect, buf);
        }
    }
}

// ABOUTME: Session list component that draws the picker rows with a highlighted cursor
//
// Every frame is a full redraw. Lines are truncated at the screen width and
// padded with the row background; rows below the last screen line are not drawn.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Clear, Widget},
    Frame,
};

use crate::app::AppState;
use crate::models::{Row, RowModel};

const ROW_FG: Color = Color::Gray;
const ROW_BG: Color = Color::Black;

/// Style for a row; the selected row swaps foreground and background
pub fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(ROW_BG).bg(ROW_FG)
    } else {
        Style::default().fg(ROW_FG).bg(ROW_BG)
    }
}

/// Text drawn for a row: its 0-based index in parentheses, then the label
pub fn format_row(index: usize, row: &Row) -> String {
    format!("({index}) {}", row.label)
}

pub struct SessionList<'a> {
    rows: &'a RowModel,
    selected: Option<usize>,
}

impl<'a> SessionList<'a> {
    pub const fn new(rows: &'a RowModel, selected: Option<usize>) -> Self {
        Self { rows, selected }
    }
}

impl Widget for SessionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self.rows.rows().iter().enumerate().take(usize::from(area.height));

        for (index, row) in visible {
            // index < area.height, so this cannot truncate
            let y = area.y + index as u16;
            let style = row_style(self.selected == Some(index));
            let line = Rect::new(area.x, y, area.width, 1);

            buf.set_style(line, style);
            buf.set_stringn(area.x, y, format_row(index, row), usize::from(area.width), style);
        }
    }
}

#[derive(Debug, Default)]
pub struct SessionListComponent;

impl SessionListComponent {
    pub const fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        frame.render_widget(Clear, area);
        frame.render_widget(SessionList::new(&state.rows, state.navigator.selected()), area);
    }
}

// TUI widget modules for each form control.

pub mod game_date;
pub mod help_bar;
pub mod player_input;
pub mod result;
pub mod season_select;
pub mod status_bar;
pub mod submit_button;
pub mod suggestions;

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

/// Bordered block for a form control, highlighted when it has focus.
pub fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Flatten a rendered test buffer into one string, row by row.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

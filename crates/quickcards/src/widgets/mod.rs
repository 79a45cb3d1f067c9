//! TUI widget modules

pub mod estimate;
pub mod form;
pub mod header;
pub mod help_popup;
pub mod popup;
pub mod sessions;
pub mod shortcuts;

pub use estimate::*;
pub use form::*;
pub use header::*;
pub use help_popup::*;
pub use popup::*;
pub use sessions::*;
pub use shortcuts::*;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

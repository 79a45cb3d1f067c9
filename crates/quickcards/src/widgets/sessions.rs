use quickcards_estimator::render::render_session_line;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, List, ListItem},
    Frame,
};

use crate::AppState;

pub struct SessionsWidget;

impl SessionsWidget {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = state
            .estimate
            .sessions()
            .iter()
            .map(|session| {
                ListItem::new(render_session_line(session)).style(Style::default().fg(Color::White))
            })
            .collect();

        let list = List::new(items).block(Block::bordered().title("Your Study Sessions"));

        frame.render_widget(list, area);
    }
}

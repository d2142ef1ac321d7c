use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};

mod detail_view;
mod filter_modal;
mod list_view;
pub(super) mod utils;

const TITLE: &str = " Project Catalog";

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::List => list_view::render_list_view(frame, app, body),
        View::Detail => detail_view::render_detail_view(frame, app, body),
    }

    render_footer(frame, root[2], app);

    // Filter modal renders on top of the list
    if app.filter_modal.is_some() {
        filter_modal::render_filter_modal(frame, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let throbber_area = Rect {
        width: area.width.min(1),
        ..area
    };
    let label_area = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(1),
        ..area
    };

    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);

    let count = format!("  {} projects", app.projects.len());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(TITLE, Style::default().fg(Color::Yellow)),
            Span::styled(count, Style::default().fg(Color::DarkGray)),
        ])),
        label_area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Cyan),
        )),
        None => utils::key_hints(footer_hints(app)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

type Hints = &'static [(&'static str, &'static str)];

const SEARCH_HINTS: Hints = &[("Enter", "Search"), ("Ctrl+x", "Clear"), ("Esc", "Cancel")];
const MODAL_HINTS: Hints = &[
    ("Tab", "Section"),
    ("j/k", "Move"),
    ("Space", "Toggle"),
    ("c", "Clear"),
    ("Enter", "Apply"),
    ("Esc", "Discard"),
];
const LIST_HINTS: Hints = &[
    ("j/k", "Move"),
    ("Enter", "Open"),
    ("f", "Filters"),
    ("/", "Search"),
    ("s", "Sort"),
    ("←/→", "Pick filter"),
    ("d", "Remove filter"),
    ("x", "Clear filters"),
    ("r", "Reload"),
    ("q", "Quit"),
];
const DETAIL_HINTS: Hints = &[("j/k", "Scroll"), ("a", "Apply"), ("Esc", "Back"), ("q", "Quit")];

fn footer_hints(app: &App) -> Hints {
    if app.search_input.is_some() {
        SEARCH_HINTS
    } else if app.filter_modal.is_some() {
        MODAL_HINTS
    } else {
        match app.current_view {
            View::List => LIST_HINTS,
            View::Detail => DETAIL_HINTS,
        }
    }
}

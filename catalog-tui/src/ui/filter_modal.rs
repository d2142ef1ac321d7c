use super::*;
use crate::app::{FilterModal, ModalSection, SortOrder};
use crate::types::FilterOptions;

pub fn render_filter_modal(frame: &mut Frame, app: &App) {
    let Some(modal) = &app.filter_modal else {
        return;
    };

    let area = utils::centered_rect(70, 24, frame.area());
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            " Filter projects ",
            Style::default().fg(Color::Yellow),
        ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(inner);

    render_sections(frame, modal, chunks[0]);
    render_options(frame, modal, &app.filter_options, chunks[1]);
}

fn render_sections(frame: &mut Frame, modal: &FilterModal, area: Rect) {
    let items: Vec<ListItem> = ModalSection::ALL
        .iter()
        .map(|section| {
            let count = match section {
                ModalSection::Filter(kind) => {
                    let n = modal.draft.ids(*kind).len();
                    if n > 0 {
                        format!(" ({})", n)
                    } else {
                        String::new()
                    }
                }
                ModalSection::Sort => String::new(),
            };
            ListItem::new(format!(" {}{}", section.label(), count))
        })
        .collect();

    let selected = ModalSection::ALL
        .iter()
        .position(|section| *section == modal.section);

    let list = List::new(items)
        .block(Block::default().borders(Borders::RIGHT))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_options(frame: &mut Frame, modal: &FilterModal, options: &FilterOptions, area: Rect) {
    let items: Vec<ListItem> = match modal.section {
        ModalSection::Filter(kind) => {
            let selected = modal.draft.ids(kind);
            kind.options(options)
                .iter()
                .map(|entity| {
                    let mark = if selected.contains(&entity.id) { "[x]" } else { "[ ]" };
                    ListItem::new(format!(" {} {}", mark, entity.name))
                })
                .collect()
        }
        ModalSection::Sort => [SortOrder::Newest, SortOrder::Oldest]
            .iter()
            .map(|order| {
                let mark = if modal.draft.sort_by == *order { "(•)" } else { "( )" };
                ListItem::new(format!(" {} {}", mark, order.label()))
            })
            .collect(),
    };

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(" No options available")
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let list = List::new(items).highlight_style(Style::default().fg(Color::Yellow));
    let mut state = ListState::default();
    state.select(Some(modal.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

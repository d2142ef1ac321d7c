use super::*;
use crate::types::{format_amount, Project};

const EMPTY_MESSAGE: &str = "No projects match these filters.";

pub fn render_list_view(frame: &mut Frame, app: &App, body: Rect) {
    let active = app.applied_filters.active_labels(&app.filter_options);
    let active_height = if active.is_empty() {
        0
    } else {
        active.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Search + sort
            Constraint::Length(active_height), // Active filters
            Constraint::Min(0),                // Project list
        ])
        .split(body);

    render_search_bar(frame, app, chunks[0]);
    if !active.is_empty() {
        render_active_filters(frame, &active, app.focused_chip, chunks[1]);
    }
    render_projects(frame, app, chunks[2]);
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (text, border) = match &app.search_input {
        Some(input) => {
            let (before, after) = input.split_at_cursor();
            (
                format!("{}█{}", before, after),
                Style::default().fg(Color::White),
            )
        }
        None if app.applied_filters.search.is_empty() => (
            "Press / to search".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        None => (
            app.applied_filters.search.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let title = format!(" Search · {} ", app.applied_filters.sort_by.label());
    let search_box = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, area);
}

fn render_active_filters(
    frame: &mut Frame,
    active: &[(crate::app::FilterKind, Vec<String>)],
    focused: Option<usize>,
    area: Rect,
) {
    let mut chip_index = 0;
    let lines: Vec<Line> = active
        .iter()
        .map(|(kind, names)| {
            let mut spans = vec![Span::styled(
                format!("{:<14}", format!("{}:", kind.label())),
                Style::default().fg(Color::DarkGray),
            )];
            for (i, name) in names.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" or ", Style::default().fg(Color::DarkGray)));
                }
                let style = if focused == Some(chip_index) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                spans.push(Span::styled(format!("{} ×", name), style));
                chip_index += 1;
            }
            Line::from(spans)
        })
        .collect();

    let block = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Applied filters (←/→ pick, d remove, x clear all) ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(block, area);
}

fn render_projects(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(" Projects ({}) ", app.projects.len()));

    if app.projects.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .projects
        .iter()
        .map(|project| ListItem::new(project_card(project, app.is_applied(project.id))))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn project_card(project: &Project, applied: bool) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        format!(" {}", project.title),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if applied {
        title.push(Span::styled(
            "  ✓ applied",
            Style::default().fg(Color::Green),
        ));
    }

    let mut meta = vec![
        Span::styled(
            format!("   {}", project.organization.name),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(" · {}", project.category.name),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!(" · {}", project.organization.industry.name),
            Style::default().fg(Color::Gray),
        ),
    ];
    if let Some(budget) = project.budget.label() {
        meta.push(Span::styled(
            format!(" · {}", budget),
            Style::default().fg(Color::Magenta),
        ));
    }

    let mut details = vec![Span::styled(
        format!("   {}", project.unique_skill_names().join(", ")),
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(bonus) = project.referral_bonus() {
        details.push(Span::styled(
            format!("  Referral bonus: {} €", format_amount(bonus)),
            Style::default().fg(Color::Green),
        ));
    }

    vec![
        Line::from(title),
        Line::from(meta),
        Line::from(details),
        Line::from(""),
    ]
}

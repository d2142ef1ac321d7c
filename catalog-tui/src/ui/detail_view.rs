use super::*;
use crate::types::{format_amount, Project};

use super::utils::format_date;

pub fn render_detail_view(frame: &mut Frame, app: &App, body: Rect) {
    let Some(project) = &app.detail else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(body);

    render_summary(frame, project, app.is_applied(project.id), chunks[0]);

    let content = Paragraph::new(detail_lines(project))
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(content, chunks[1]);
}

fn render_summary(frame: &mut Frame, project: &Project, applied: bool, area: Rect) {
    let first_position = project
        .positions
        .first()
        .map(|p| p.title.as_str())
        .unwrap_or("-");

    let (apply_label, apply_style) = if applied {
        ("✓ Applied", Style::default().fg(Color::Green))
    } else {
        ("Apply (a)", Style::default().fg(Color::Yellow))
    };

    let mut facts = vec![
        Span::styled("Start: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format_date(project.start_date)),
        Span::styled("  Hours: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}", project.total_hours)),
    ];
    if let Some(budget) = project.budget.label() {
        facts.push(Span::styled("  Budget: ", Style::default().fg(Color::DarkGray)));
        facts.push(Span::raw(budget));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                project.category.name.clone(),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!(" · {}", first_position),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("   "),
            Span::styled(apply_label, apply_style),
        ]),
        Line::from(facts),
        Line::from(vec![
            Span::styled("Organization: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!(
                "{} ({})",
                project.organization.name, project.organization.industry.name
            )),
            Span::styled("  Leader: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!(
                "{} {}",
                project.project_leader.name, project.project_leader.last_name
            )),
        ]),
    ];

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", project.title))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(summary, area);
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn detail_lines(project: &Project) -> Vec<Line<'static>> {
    let mut lines = vec![section_title("Description")];
    lines.push(Line::from(project.description.clone()));

    if !project.goals.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_title("Goals"));
        for goal in &project.goals {
            lines.push(Line::from(format!("• {}", goal)));
        }
    }

    if !project.positions.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_title("Positions"));
        for position in &project.positions {
            let skills = position
                .skills
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(Line::from(vec![
                Span::styled(
                    format!("• {}", position.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", skills), Style::default().fg(Color::DarkGray)),
            ]));
            if let Some(bonus) = position.referral_bonus {
                lines.push(Line::from(Span::styled(
                    format!("  Referral bonus: {} €", format_amount(bonus)),
                    Style::default().fg(Color::Green),
                )));
            }
        }
    }

    if !project.faqs.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_title("FAQ"));
        for faq in &project.faqs {
            lines.push(Line::from(Span::styled(
                faq.question.clone(),
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(faq.answer.clone()));
        }
    }

    lines
}

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Field};
use crate::calculator::PaymentSummary;
use crate::format::{format_currency, format_months, format_percent};
use crate::theme::Theme;

pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme.palette();

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        f.size(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Loan Calculator",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ·  {}", app.loan_type.label()), Style::default().fg(theme.muted)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    render_form(f, app, &theme, chunks[1]);

    let results = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(chunks[2]);

    match &app.summary {
        Some(summary) => {
            render_summary(f, summary, &app.currency_symbol, &theme, results[0]);
            render_chart(f, summary, &theme, results[1]);
        }
        None => {
            let placeholder = Paragraph::new("Enter a principal, annual rate and term to see your payment.")
                .style(Style::default().fg(theme.muted))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Payment Summary"));
            f.render_widget(placeholder, chunks[2]);
        }
    }

    let help = Paragraph::new(
        "Tab/↑/↓: move | 0-9 .: type | Ctrl-U: clear | [/]: loan type | t: theme | q: quit",
    )
    .style(Style::default().fg(theme.muted))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[3]);
}

fn render_form(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|&field| {
            let value = app.inputs.get(field);
            let text = match field {
                Field::Principal => format!("Principal: {}{}", app.currency_symbol, value),
                Field::Rate => format!("Annual Interest Rate: {}%", value),
                Field::Years => format!(
                    "Term: {} years   (typical: {})",
                    value,
                    app.loan_type.typical_terms()
                ),
            };

            if field == app.focus {
                Line::from(format!("▶ {}", text))
                    .style(Style::default().fg(theme.input).add_modifier(Modifier::BOLD))
            } else {
                Line::from(format!("  {}", text)).style(Style::default().fg(theme.muted))
            }
        })
        .collect();

    let form = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Loan Details"));
    f.render_widget(form, area);
}

fn render_summary(f: &mut Frame, summary: &PaymentSummary, symbol: &str, theme: &Theme, area: Rect) {
    let label = Style::default().add_modifier(Modifier::BOLD);

    let text = vec![
        Line::from(vec![
            Span::styled("Monthly Payment: ", label),
            Span::styled(
                format_currency(summary.monthly_payment, symbol),
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total Payment: ", label),
            Span::raw(format_currency(summary.total_payment, symbol)),
        ]),
        Line::from(vec![
            Span::styled("Principal: ", label),
            Span::styled(
                format_currency(summary.principal_amount, symbol),
                Style::default().fg(theme.principal),
            ),
            Span::raw(format!(" ({})", format_percent(summary.principal_percentage))),
        ]),
        Line::from(vec![
            Span::styled("Total Interest: ", label),
            Span::styled(
                format_currency(summary.total_interest, symbol),
                Style::default().fg(theme.interest),
            ),
            Span::raw(format!(" ({})", format_percent(summary.interest_percentage))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Payments: ", label),
            Span::raw(format_months(summary.months())),
        ]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Payment Summary"))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}

fn render_chart(f: &mut Frame, summary: &PaymentSummary, theme: &Theme, area: Rect) {
    let bar_width = (area.width.saturating_sub(5) / 2).clamp(3, 20);

    let bars = [
        Bar::default()
            .label(Line::from("Principal"))
            .value(summary.principal_amount.max(0.0).round() as u64)
            .text_value(format_percent(summary.principal_percentage))
            .style(Style::default().fg(theme.principal)),
        Bar::default()
            .label(Line::from("Interest"))
            .value(summary.total_interest.max(0.0).round() as u64)
            .text_value(format_percent(summary.interest_percentage))
            .style(Style::default().fg(theme.interest)),
    ];

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Principal vs Interest"))
        .bar_width(bar_width)
        .bar_gap(1)
        .value_style(Style::default().fg(theme.background).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(theme.text))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

//! 地址表格

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use cep_lookup_core::utils::relative_time::format_relative_pt_br;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染地址表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().table;
    let c = colors();
    let focused = app.focus.is_table();

    let block = Block::default()
        .title(format!(" {} ({}) ", texts.title, app.addresses.len()))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(c.border_style(focused));

    if app.addresses.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled(format!("  {}", texts.empty), Style::default().fg(c.muted)),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let cols = &texts.columns;
    let header = Row::new(vec![
        cols.street,
        cols.neighborhood,
        cols.city,
        cols.region,
        cols.postal_code,
        cols.consulted,
    ])
    .style(Style::default().fg(c.highlight).add_modifier(Modifier::BOLD));

    let now = Utc::now();
    let rows = app.addresses.records.iter().map(|record| {
        Row::new(vec![
            Cell::from(record.street.as_str()),
            Cell::from(record.neighborhood.as_str()),
            Cell::from(record.locality.as_str()),
            Cell::from(record.region.as_str()),
            Cell::from(record.postal_code.as_str()),
            Cell::from(format_relative_pt_br(record.consulted_at, now))
                .style(Style::default().fg(c.muted)),
        ])
    });

    let widths = [
        Constraint::Percentage(26),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
        Constraint::Length(4),
        Constraint::Length(11),
        Constraint::Min(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(if focused {
            c.selected()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        })
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.addresses.selected));

    frame.render_stateful_widget(table, area, &mut state);
}

//! 查询表单

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, FormField};
use crate::view::theme::colors;

/// Pads `label` with spaces to `width` terminal columns.
fn pad(label: &str, width: usize) -> String {
    let fill = width.saturating_sub(label.width());
    format!("{label}{}", " ".repeat(fill))
}

/// 渲染查询表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().form;
    let c = colors();
    let form = &app.form;
    let focused = app.focus.is_form();

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(c.border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_width = texts.country.width().max(texts.postal_code.width()) + 2;
    let active = |field: FormField| focused && form.field == field;
    let label_style = |field: FormField| {
        if active(field) {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        }
    };

    // 国家选择
    let country_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(pad(texts.country, label_width), label_style(FormField::Country)),
        Span::styled("◀ ", Style::default().fg(c.muted)),
        Span::styled(
            form.country.display_name(),
            if active(FormField::Country) {
                c.selected()
            } else {
                Style::default().fg(c.fg)
            },
        ),
        Span::styled(" ▶", Style::default().fg(c.muted)),
    ]);

    // 邮编输入
    let input = if form.postal_code.is_empty() {
        Span::styled(texts.placeholder, Style::default().fg(c.muted))
    } else {
        Span::styled(form.postal_code.as_str(), Style::default().fg(c.fg))
    };
    let postal_code_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            pad(texts.postal_code, label_width),
            label_style(FormField::PostalCode),
        ),
        input,
    ]);

    // 查询按钮
    let button = if form.busy {
        Span::styled(
            format!("[ {} ]", texts.busy),
            Style::default().fg(c.warning),
        )
    } else if form.can_submit() {
        Span::styled(
            format!("[ {} ]", texts.submit),
            Style::default()
                .bg(c.highlight)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("[ {} ]", texts.submit),
            Style::default().fg(c.muted).add_modifier(Modifier::DIM),
        )
    };
    let button_line = Line::from(vec![Span::raw(" ".repeat(label_width + 1)), button]);

    let lines = vec![
        country_line,
        Line::from(""),
        postal_code_line,
        Line::from(""),
        button_line,
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    // 光标停在输入末尾
    if active(FormField::PostalCode) && !app.modal.is_open() {
        let offset = 1 + label_width + form.postal_code.width();
        let x = inner
            .x
            .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y + 2));
    }
}

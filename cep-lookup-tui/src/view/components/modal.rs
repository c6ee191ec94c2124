//! 弹窗

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染当前弹窗（若有）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::Alert { message } => render_alert(frame, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染失败提示
fn render_alert(frame: &mut Frame, message: &str) {
    let c = colors();
    let texts = &t().modal;
    let area = centered_rect(60, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.alert_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::styled(texts.alert_close, Style::default().fg(c.muted)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let texts = t();
    let help = &texts.help;
    let actions = &help.actions;

    let area = centered_rect(56, 22, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.help_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), c.hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(help.global),
        entry("Tab", actions.switch_panel),
        entry("Alt+l", actions.toggle_language),
        entry("Alt+t", actions.toggle_theme),
        entry("F1/Alt+h", actions.help),
        entry("Ctrl+c", actions.quit),
        Line::from(""),
        section(help.form),
        entry("↑↓", actions.switch_field),
        entry("←→", actions.change_country),
        entry("Enter", actions.submit),
        entry("Esc", actions.clear_input),
        Line::from(""),
        section(help.table),
        entry("↑↓/jk", actions.move_up_down),
        entry("g/G", actions.first_last),
        entry("Del/d", actions.delete),
        entry("q", actions.quit),
        Line::from(""),
        Line::styled(texts.modal.help_close, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

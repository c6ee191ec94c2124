//! 状态栏

use cep_lookup_core::ListMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::colors;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = &t().status_bar;
    let base = Style::default().bg(c.highlight).fg(c.selected_fg);

    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", base));
        }
        spans.push(Span::styled(*key, base.patch(c.hint_key())));
        spans.push(Span::styled(format!(" {desc}"), base));
    }

    // 有状态消息时覆盖快捷键提示
    let left = match &app.status_message {
        Some(msg) => Line::from(Span::styled(format!(" {msg}"), base)),
        None => Line::from([vec![Span::styled(" ", base)], spans].concat()),
    };

    let mode = match app.config.storage_mode {
        ListMode::Persisted => texts.persisted,
        ListMode::Sample => texts.sample,
    };
    let right = format!(
        "{} {} · {} · {} ",
        app.addresses.len(),
        texts.records,
        mode,
        t().common.language_name
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(32)])
        .split(area);

    frame.render_widget(Paragraph::new(left).style(base), columns[0]);
    frame.render_widget(
        Paragraph::new(right)
            .style(base)
            .alignment(Alignment::Right),
        columns[1],
    );
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;
    let mut list = vec![("Tab", hints.switch_panel)];

    match app.focus {
        FocusPanel::Form => {
            list.push(("Enter", hints.submit));
            list.push(("←→", hints.country));
        }
        FocusPanel::Table => {
            list.push(("↑↓", hints.move_up_down));
            list.push(("Del", hints.delete));
        }
    }

    list.push(("F1", hints.help));
    list.push(("Ctrl+c", hints.quit));
    list
}

//! 主布局

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::i18n::{self, t};
use crate::model::App;

use super::components;
use super::theme::{self, colors};

/// 表单区域高度：边框 2 + 国家 / 邮编 / 按钮各一行 + 间隔
const FORM_HEIGHT: u16 = 7;

/// 渲染一帧
pub fn render(app: &App, frame: &mut Frame) {
    i18n::set_language(app.config.language);
    theme::set_theme(app.config.theme);

    let c = colors();
    frame.render_widget(
        Block::default().style(Style::default().bg(c.bg).fg(c.fg)),
        frame.area(),
    );

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // 标题栏
            Constraint::Length(FORM_HEIGHT), // 查询表单
            Constraint::Min(3),              // 地址表格
            Constraint::Length(1),           // 状态栏
        ])
        .split(frame.area());

    render_title_bar(frame, main_layout[0]);
    components::form::render(app, frame, main_layout[1]);
    components::address_table::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {}", t().common.app_name)).style(
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, area);
}

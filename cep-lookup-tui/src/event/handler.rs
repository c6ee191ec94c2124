//! 事件处理

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage, TableMessage};
use crate::model::{App, FormField, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_F1.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    // 根据焦点位置处理按键
    if app.focus.is_form() {
        handle_form_keys(key, app)
    } else {
        handle_table_keys(key)
    }
}

/// 处理弹窗按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    let close = match modal {
        Modal::Alert { .. } => matches!(key.code, KeyCode::Esc | KeyCode::Enter),
        Modal::Help => {
            DefaultKeymap::BACK.matches(&key)
                || DefaultKeymap::HELP.matches(&key)
                || DefaultKeymap::HELP_F1.matches(&key)
                || DefaultKeymap::QUIT.matches(&key)
        }
    };

    if close {
        AppMessage::Modal(ModalMessage::Close)
    } else {
        AppMessage::Noop
    }
}

/// 处理表单按键
fn handle_form_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }

    if DefaultKeymap::NEXT_COUNTRY.matches(&key) {
        return AppMessage::Form(FormMessage::NextCountry);
    }
    if DefaultKeymap::PREV_COUNTRY.matches(&key) {
        return AppMessage::Form(FormMessage::PrevCountry);
    }

    match key.code {
        KeyCode::Up | KeyCode::Down => return AppMessage::Form(FormMessage::NextField),
        KeyCode::Esc => return AppMessage::Form(FormMessage::ClearInput),
        _ => {}
    }

    match app.form.field {
        FormField::Country => match key.code {
            KeyCode::Char(' ') if key.modifiers.is_empty() => {
                AppMessage::Form(FormMessage::NextCountry)
            }
            _ => AppMessage::Noop,
        },
        FormField::PostalCode => match key.code {
            KeyCode::Char(c) if is_text_input(key.modifiers) => {
                AppMessage::Form(FormMessage::Input(c))
            }
            KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
            _ => AppMessage::Noop,
        },
    }
}

fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}

/// 处理表格按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) || DefaultKeymap::DELETE.matches(&key) {
        return AppMessage::Table(TableMessage::DeleteSelected);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Table(TableMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Table(TableMessage::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Table(TableMessage::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => AppMessage::Table(TableMessage::SelectLast),
        KeyCode::Char('d') if key.modifiers.is_empty() => {
            AppMessage::Table(TableMessage::DeleteSelected)
        }
        _ => AppMessage::Noop,
    }
}

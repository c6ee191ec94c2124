//! 快捷键定义

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const ALT_QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const HELP_F1: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const TOGGLE_LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const TOGGLE_THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));

    // 表单
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const NEXT_COUNTRY: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const PREV_COUNTRY: KeyBinding = KeyBinding::key(KeyCode::Left);

    // 表格
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const DELETE: KeyBinding = KeyBinding::key(KeyCode::Delete);
}

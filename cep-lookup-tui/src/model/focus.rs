//! 焦点面板

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 上方查询表单
    #[default]
    Form,
    /// 下方地址表格
    Table,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Form => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::Form,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    pub fn is_table(self) -> bool {
        matches!(self, FocusPanel::Table)
    }
}

use super::{BackendMessage, FormMessage, ModalMessage, TableMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（表单 / 表格）
    ToggleFocus,

    /// 切换界面语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 表单相关消息
    Form(FormMessage),

    /// 表格相关消息
    Table(TableMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务结果
    Backend(BackendMessage),

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

impl AppMessage {
    /// 由用户按键产生的消息
    pub fn is_user_input(&self) -> bool {
        !matches!(self, Self::Backend(_) | Self::Noop)
    }
}

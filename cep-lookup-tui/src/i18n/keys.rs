//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 查询表单
    pub form: FormTexts,
    /// 地址表格
    pub table: TableTexts,
    /// 弹窗
    pub modal: ModalTexts,
    /// 状态栏
    pub status_bar: StatusBarTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub language_name: &'static str,
}

// ============================================================================
// 查询表单
// ============================================================================

pub struct FormTexts {
    pub title: &'static str,
    pub country: &'static str,
    pub postal_code: &'static str,
    pub placeholder: &'static str,
    pub submit: &'static str,
    pub busy: &'static str,
}

// ============================================================================
// 地址表格
// ============================================================================

pub struct TableTexts {
    pub title: &'static str,
    pub empty: &'static str,
    pub columns: ColumnTexts,
}

pub struct ColumnTexts {
    pub street: &'static str,
    pub neighborhood: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub consulted: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub alert_title: &'static str,
    pub alert_close: &'static str,
    pub help_title: &'static str,
    pub help_close: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub persisted: &'static str,
    pub sample: &'static str,
    pub records: &'static str,
    pub added: &'static str,
    pub removed: &'static str,
    pub load_failed: &'static str,
    pub settings_saved: &'static str,
    pub settings_not_saved: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub submit: &'static str,
    pub country: &'static str,
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub delete: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub global: &'static str,
    pub form: &'static str,
    pub table: &'static str,
    pub actions: HelpActionTexts,
}

pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub switch_field: &'static str,
    pub toggle_language: &'static str,
    pub toggle_theme: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub change_country: &'static str,
    pub submit: &'static str,
    pub clear_input: &'static str,
    pub move_up_down: &'static str,
    pub first_last: &'static str,
    pub delete: &'static str,
}

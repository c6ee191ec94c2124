//! 国际化 (i18n) 模块
//!
//! 界面文字按语言切换，默认巴西葡萄牙语 (pt-BR)。
//!
//! ## 使用方式
//!
//! ```ignore
//! use crate::i18n::t;
//!
//! let title = t().form.title; // "Consulta de CEP" or "Postal code lookup"
//! ```
//!
//! 失败提示 ([`alerts`]) 不随语言切换，始终使用固定的葡萄牙语文本。

use std::sync::atomic::{AtomicUsize, Ordering};

pub mod alerts;
mod en_us;
pub mod keys;
mod pt_br;

pub use cep_lookup_app::config::Language;
pub use keys::*;

/// 当前语言索引（0 = pt-BR）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &en_us::TRANSLATIONS,
        _ => &pt_br::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::PtBr => 0,
        Language::EnUs => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

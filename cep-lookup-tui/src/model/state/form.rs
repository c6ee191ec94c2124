//! 查询表单状态

use cep_lookup_core::LookupRequest;
use cep_lookup_core::types::Country;

/// 表单内的焦点字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Country,
    #[default]
    PostalCode,
}

impl FormField {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FormField::Country => FormField::PostalCode,
            FormField::PostalCode => FormField::Country,
        }
    }
}

/// 查询表单状态
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// 选中的国家
    pub country: Country,
    /// 邮编输入（原样提交）
    pub postal_code: String,
    /// 焦点字段
    pub field: FormField,
    /// 查询进行中
    pub busy: bool,
}

impl FormState {
    pub fn new(country: Country) -> Self {
        Self {
            country,
            ..Self::default()
        }
    }

    /// Submit is enabled only with a non-empty field and no lookup running.
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.postal_code.is_empty()
    }

    pub fn request(&self) -> LookupRequest {
        LookupRequest::new(self.postal_code.clone(), self.country)
    }

    pub fn push_char(&mut self, c: char) {
        self.postal_code.push(c);
    }

    pub fn pop_char(&mut self) {
        self.postal_code.pop();
    }

    pub fn clear_input(&mut self) {
        self.postal_code.clear();
    }

    pub fn next_country(&mut self) {
        self.country = self.country.next();
    }

    pub fn prev_country(&mut self) {
        self.country = self.country.prev();
    }
}

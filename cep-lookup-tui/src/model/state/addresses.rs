//! 地址表格状态

use cep_lookup_core::AddressRecord;

/// 地址表格状态
///
/// `records` mirrors the list owned by `AddressListService`; it is replaced
/// after every change the backend reports.
#[derive(Debug, Default)]
pub struct AddressesState {
    /// 地址列表（最新在前）
    pub records: Vec<AddressRecord>,
    /// 当前选中的索引
    pub selected: usize,
}

impl AddressesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.records.is_empty() && self.selected < self.records.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.records.is_empty() {
            self.selected = self.records.len() - 1;
        }
    }

    /// 获取当前选中的地址
    pub fn selected_record(&self) -> Option<&AddressRecord> {
        self.records.get(self.selected)
    }

    /// Replaces the list, keeping the selection index in range.
    pub fn set_records(&mut self, records: Vec<AddressRecord>) {
        self.records = records;
        if self.selected >= self.records.len() {
            self.selected = self.records.len().saturating_sub(1);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

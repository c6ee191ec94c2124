/// 地址表格消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 删除选中的地址
    DeleteSelected,
}

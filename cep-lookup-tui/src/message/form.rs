/// 查询表单消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 清空输入
    ClearInput,
    /// 下一个国家
    NextCountry,
    /// 上一个国家
    PrevCountry,
    /// 切换表单内字段
    NextField,
    /// 提交查询
    Submit,
}

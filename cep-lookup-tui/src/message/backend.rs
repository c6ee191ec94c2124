use cep_lookup_core::{AddressRecord, FailureKind};

/// 后台任务完成后发回主循环的消息
///
/// Every variant carries the list as it stands after the operation, so the
/// table is refreshed even when the operation partly failed.
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 查询结束
    LookupFinished {
        outcome: Result<AddressRecord, FailureKind>,
        records: Vec<AddressRecord>,
    },
    /// 删除结束
    DeleteFinished {
        outcome: Result<bool, FailureKind>,
        records: Vec<AddressRecord>,
    },
    /// 配置保存结束
    SettingsSaved { ok: bool },
}

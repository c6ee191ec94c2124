use cep_lookup_app::config::AppConfig;
use cep_lookup_core::LookupRequest;

/// Update 层请求 Backend 执行的副作用
#[derive(Debug, Clone)]
pub enum Command {
    /// 查询邮编
    Lookup(LookupRequest),
    /// 删除地址
    Delete { id: String },
    /// 保存配置
    SaveSettings(AppConfig),
}

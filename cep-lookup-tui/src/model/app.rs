//! 应用主状态

use cep_lookup_app::config::AppConfig;
use cep_lookup_core::AddressRecord;

use super::{AddressesState, FocusPanel, FormState, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 当前配置（语言、主题在运行中可切换）
    pub config: AppConfig,

    // === 面板状态 ===
    /// 查询表单
    pub form: FormState,
    /// 地址表格
    pub addresses: AddressesState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 用启动时加载的配置与地址列表创建应用实例
    pub fn new(config: AppConfig, records: Vec<AddressRecord>) -> Self {
        let mut addresses = AddressesState::new();
        addresses.set_records(records);

        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            status_message: None,
            form: FormState::new(config.default_country),
            addresses,
            modal: ModalState::new(),
            config,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default(), Vec::new())
    }
}

use crate::core::Config;
use crate::db::Store;

/// 服务器状态 - 持有配置与存储服务
///
/// ServerState 是整个后端的核心数据结构。存储服务内部为 Arc 共享，
/// Clone 成本极低，可以安全地注入到每个请求处理器。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 内存存储服务
    pub store: Store,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, store: Store) -> Self {
        Self { config, store }
    }

    /// 根据配置构造存储服务并写入种子数据
    pub async fn initialize(config: &Config) -> Self {
        let store = Store::new();

        if config.seed_sample_data {
            store.seed_sample_data().await;
        }

        Self {
            config: config.clone(),
            store,
        }
    }
}

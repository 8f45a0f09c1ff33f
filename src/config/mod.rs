// ==========================================
// AirVonment 空气质量决策支持 - 配置层
// ==========================================
// 职责: 驾驶舱配置加载与读取接口
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod config_reader;

// 重导出核心配置管理器
pub use config_manager::{
    resolve_config_path, ConfigError, ConfigManager, DashboardConfig, SimulatedLatency,
    CONFIG_PATH_ENV,
};
pub use config_reader::{DashboardConfigReader, LoadKind};

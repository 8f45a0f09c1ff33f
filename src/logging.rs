// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 日志级别环境变量未设置时的默认过滤器
pub const DEFAULT_FILTER: &str = "info";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=airvonment::engine=trace
///
/// # 示例
/// ```no_run
/// use airvonment::logging;
/// logging::init();
/// ```
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// 初始化日志系统,RUST_LOG 未设置时使用给定过滤器（来自配置文件 log_filter）
pub fn init_with_filter(fallback: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .try_init();
}

/// 初始化 JSON 格式日志（供日志采集）
pub fn init_json() {
    let _ = fmt()
        .json()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_target(true)
        .with_current_span(true)
        .try_init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

use chrono_tz::Tz;

use crate::orders::{StatusFilter, TransitionPolicy};
use crate::presentation::DisplayOptions;

/// 店面配置 - storefront settings
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后按天滚动写文件 |
/// | BUSINESS_TIMEZONE | Africa/Dakar | "今天"与日期格式化使用的时区 |
/// | CURRENCY_SUFFIX | FCFA | 金额后缀 |
/// | AUTH_DELAY_MS | 1500 | 模拟登录延迟(毫秒) |
/// | MOCK_AUTH_SUCCEEDS | true | 模拟登录结果 |
/// | STATUS_POLICY | permissive | 订单状态流转策略: permissive / forward_only |
/// | ORDER_HISTORY_PREVIEW | 2 | 订单历史中显示的商品行数 |
/// | DEMO_USER | vendeur@marche.sn | 演示登录用户名 |
/// | STATUS_FILTER | all | 订单列表的状态标签 |
/// | SEARCH | (空) | 订单列表的搜索内容 |
///
/// # 示例
///
/// ```ignore
/// BUSINESS_TIMEZONE=Europe/Paris STATUS_POLICY=forward_only cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// tracing 最大日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 业务时区
    pub timezone: Tz,
    /// 金额后缀
    pub currency_suffix: String,
    /// 模拟登录延迟 (毫秒)
    pub auth_delay_ms: u64,
    /// 模拟登录是否成功
    pub mock_auth_succeeds: bool,
    /// 订单状态流转策略
    pub status_policy: TransitionPolicy,
    /// 订单历史预览行数
    pub order_history_preview: usize,
    /// 演示登录用户名
    pub demo_user: String,
    /// 订单列表状态标签
    pub status_filter: StatusFilter,
    /// 订单列表搜索内容 (原样匹配)
    pub search: String,
}

/// 日志配置 - 必须先于其余配置读取, 否则解析警告没有订阅者
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// tracing 最大日志级别
    pub level: String,
    /// 日志目录
    pub dir: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            dir: std::env::var("LOG_DIR").ok().filter(|dir| !dir.is_empty()),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let log = LogConfig::from_env();
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: log.level,
            log_dir: log.dir,
            timezone: parse_or_default("BUSINESS_TIMEZONE", chrono_tz::Africa::Dakar),
            currency_suffix: std::env::var("CURRENCY_SUFFIX").unwrap_or_else(|_| "FCFA".into()),
            auth_delay_ms: parse_or_default("AUTH_DELAY_MS", 1500),
            mock_auth_succeeds: parse_or_default("MOCK_AUTH_SUCCEEDS", true),
            status_policy: parse_or_default("STATUS_POLICY", TransitionPolicy::Permissive),
            order_history_preview: parse_or_default("ORDER_HISTORY_PREVIEW", 2),
            demo_user: std::env::var("DEMO_USER").unwrap_or_else(|_| "vendeur@marche.sn".into()),
            status_filter: StatusFilter::parse(
                &std::env::var("STATUS_FILTER").unwrap_or_else(|_| StatusFilter::ALL_KEY.into()),
            ),
            search: std::env::var("SEARCH").unwrap_or_default(),
        }
    }

    /// 显示选项 (时区, 金额后缀, 预览行数)
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            timezone: self.timezone,
            currency_suffix: self.currency_suffix.clone(),
            preview_limit: self.order_history_preview,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Read `key` and parse it; unset keeps the default silently, garbage keeps it loudly.
fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Invalid value for {}: '{}' ({}), using default", key, raw, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use shared::models::OrderStatus;
    use std::sync::Arc;

    #[test]
    fn test_parse_or_default_unset_key() {
        let value: u64 = parse_or_default("STOREFRONT_TEST_UNSET_KEY", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_or_default_reads_timezone_and_policy() {
        // SAFETY: keys are unique to this test
        unsafe {
            std::env::set_var("STOREFRONT_TEST_TZ", "Africa/Dakar");
            std::env::set_var("STOREFRONT_TEST_POLICY", "forward_only");
        }
        let tz: Tz = parse_or_default("STOREFRONT_TEST_TZ", chrono_tz::UTC);
        assert_eq!(tz, chrono_tz::Africa::Dakar);
        let policy: TransitionPolicy =
            parse_or_default("STOREFRONT_TEST_POLICY", TransitionPolicy::Permissive);
        assert_eq!(policy, TransitionPolicy::ForwardOnly);
    }

    #[test]
    fn test_parse_or_default_garbage_falls_back() {
        // SAFETY: key is unique to this test
        unsafe {
            std::env::set_var("STOREFRONT_TEST_DELAY", "soon");
        }
        let delay: u64 = parse_or_default("STOREFRONT_TEST_DELAY", 1500);
        assert_eq!(delay, 1500);
    }

    #[test]
    fn test_from_env_reads_order_list_settings() {
        // SAFETY: only this test reads or writes these keys
        unsafe {
            std::env::set_var("DEMO_USER", "awa@marche.sn");
            std::env::set_var("STATUS_FILTER", "ready");
            std::env::set_var("SEARCH", " sow ");
        }
        let config = Config::from_env();
        assert_eq!(config.demo_user, "awa@marche.sn");
        assert_eq!(config.status_filter, StatusFilter::Status(OrderStatus::Ready));
        assert_eq!(config.search, " sow ");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_parse_or_default_garbage_is_logged() {
        // SAFETY: key is unique to this test
        unsafe {
            std::env::set_var("STOREFRONT_TEST_GARBAGE_POLICY", "garbage_policy");
        }
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let policy = tracing::subscriber::with_default(subscriber, || {
            parse_or_default("STOREFRONT_TEST_GARBAGE_POLICY", TransitionPolicy::Permissive)
        });

        assert_eq!(policy, TransitionPolicy::Permissive);
        let output = String::from_utf8(logs.0.lock().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("Invalid value for STOREFRONT_TEST_GARBAGE_POLICY"));
    }
}

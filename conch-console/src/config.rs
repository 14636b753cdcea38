//! 控制台配置

use conch_client::ClientConfig;

/// 控制台配置 - 所有配置项都可以通过环境变量覆盖
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | CONCH_SERVER_URL | http://localhost:3001 | 目录服务地址 |
/// | CONCH_SELLER_ID | (未设置) | 卖家 id，缺失时会话检查直接拒绝 |
/// | CONCH_TIMEOUT_SECS | 30 | 请求超时(秒) |
/// | CONCH_LOG_DIR | (未设置) | 日志目录，设置后按天滚动写文件 |
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// 目录服务地址
    pub server_url: String,
    /// 卖家 id
    pub seller_id: Option<String>,
    /// 请求超时(秒)
    pub timeout_secs: u64,
    /// 日志目录
    pub log_dir: Option<String>,
}

impl ConsoleConfig {
    /// 从环境变量加载配置，未设置的使用默认值
    pub fn from_env() -> Self {
        Self {
            server_url: std::env::var("CONCH_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:3001".into()),
            seller_id: std::env::var("CONCH_SELLER_ID").ok(),
            timeout_secs: std::env::var("CONCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_dir: std::env::var("CONCH_LOG_DIR").ok(),
        }
    }

    /// 构建目录服务客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.server_url.clone()).with_timeout(self.timeout_secs)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3001".to_string(),
            seller_id: None,
            timeout_secs: 30,
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_carries_url_and_timeout() {
        let config = ConsoleConfig {
            server_url: "http://127.0.0.1:4000".to_string(),
            timeout_secs: 5,
            ..Default::default()
        };

        let client_config = config.client_config();
        assert_eq!(client_config.base_url, "http://127.0.0.1:4000");
        assert_eq!(client_config.timeout, 5);
    }
}

//! 配置基础设施
//!
//! 依次尝试 `config.toml`、`./config/config.toml`，都不存在时使用默认配置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// 预计送达天数上限
pub const MAX_DELIVERY_DAYS: i64 = 365;

/// 店铺服务配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 店铺联系信息
    pub store: StoreConfig,
    /// 结算配置
    pub checkout: CheckoutConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志文件目录
    pub log_path: PathBuf,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 是否写入文件
    pub file_output: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 店铺联系信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub name: String,
    /// WhatsApp 号码，含国家码
    pub whatsapp_phone: String,
    pub support_phone: String,
    pub showroom_phone: String,
    pub support_email: String,
    pub contact_emails: Vec<String>,
    pub address: String,
}

/// 结算配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// 模拟下单处理耗时（毫秒）
    pub processing_delay_ms: u64,
    /// GST 税率（百分比）
    pub gst_rate_percent: u32,
    /// 超过该金额免运费
    pub free_shipping_threshold: u64,
    pub shipping_fee: u64,
    /// 预计送达天数
    pub delivery_days: i64,
    pub order_id_prefix: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("./logs"),
            file_prefix: "storefront".to_string(),
            console_output: true,
            file_output: true,
            level: "info".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "Jai Chitra Textile".to_string(),
            whatsapp_phone: "+91 98765 43210".to_string(),
            support_phone: "+91 98765 43210".to_string(),
            showroom_phone: "+91 94439 36367".to_string(),
            support_email: "info@jaichitratextile.com".to_string(),
            contact_emails: vec![
                "contact@jaichitratextiles.shop".to_string(),
                "jaichitratextiles99@gmail.com".to_string(),
            ],
            address: "123 Textile Street, Coimbatore".to_string(),
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 1000,
            gst_rate_percent: 18,
            free_shipping_threshold: 2000,
            shipping_fee: 200,
            delivery_days: 7,
            order_id_prefix: "JCT".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("无效的监听地址: {}", e)))
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }
        if self.logging.file_output && self.logging.file_prefix.is_empty() {
            return Err(ConfigError::Validation("日志文件前缀不能为空".to_string()));
        }

        if phone_digits(&self.store.whatsapp_phone).is_empty() {
            return Err(ConfigError::Validation("WhatsApp 号码不能为空".to_string()));
        }
        if !self.store.support_email.contains('@') {
            return Err(ConfigError::Validation(format!(
                "无效的邮箱地址: {}",
                self.store.support_email
            )));
        }

        if self.checkout.gst_rate_percent > 100 {
            return Err(ConfigError::Validation("GST 税率不能超过100%".to_string()));
        }
        if !(0..=MAX_DELIVERY_DAYS).contains(&self.checkout.delivery_days) {
            return Err(ConfigError::Validation(format!(
                "预计送达天数必须在 0 到 {} 之间",
                MAX_DELIVERY_DAYS
            )));
        }
        // 下单延迟必须短于请求超时，否则客户端收到 408 而订单仍会完成
        if self.checkout.processing_delay_ms >= self.http.timeout_seconds.saturating_mul(1000) {
            return Err(ConfigError::Validation(format!(
                "下单处理延迟 {}ms 必须小于请求超时 {}s",
                self.checkout.processing_delay_ms, self.http.timeout_seconds
            )));
        }
        if self.checkout.order_id_prefix.is_empty() {
            return Err(ConfigError::Validation("订单号前缀不能为空".to_string()));
        }

        Ok(())
    }
}

/// 只保留号码中的数字
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，并完成校验
pub fn load_config() -> Result<Config, ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    let config = match config_paths.iter().find(|path| Path::new(path).exists()) {
        Some(path) => {
            // 此时日志系统尚未初始化
            println!("从配置文件加载: {}", path);
            Config::load_from_file(path)?
        }
        None => {
            println!("未找到配置文件，使用默认配置");
            Config::default()
        }
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.checkout.processing_delay_ms, 1000);
        assert_eq!(config.checkout.gst_rate_percent, 18);
        assert_eq!(config.checkout.free_shipping_threshold, 2000);
        assert_eq!(config.checkout.shipping_fee, 200);
        assert_eq!(config.checkout.order_id_prefix, "JCT");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.http.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.store.whatsapp_phone = "+-".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_delivery_days_bounds() {
        let mut config = Config::default();
        config.checkout.delivery_days = MAX_DELIVERY_DAYS;
        assert!(config.validate().is_ok());

        config.checkout.delivery_days = 100_000_000;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.checkout.delivery_days = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_processing_delay_must_fit_timeout() {
        let mut config = Config::default();
        config.http.timeout_seconds = 2;
        config.checkout.processing_delay_ms = 1999;
        assert!(config.validate().is_ok());

        config.checkout.processing_delay_ms = 2000;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.http.port = 3001;
        config.checkout.processing_delay_ms = 0;
        config.save_to_file(&config_path).unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[http]\nport = 9090\n").unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.http.port, 9090);
        assert_eq!(loaded.http.bind_address, "0.0.0.0");
        assert_eq!(loaded.checkout, CheckoutConfig::default());
    }

    #[test]
    fn test_socket_addr() {
        let mut config = HttpConfig::default();
        config.bind_address = "127.0.0.1".to_string();
        config.port = 3001;
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3001");
    }

    #[test]
    fn test_phone_digits() {
        assert_eq!(phone_digits("+91 98765 43210"), "919876543210");
    }
}

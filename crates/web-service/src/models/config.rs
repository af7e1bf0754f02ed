use color_eyre::Result;
use std::sync::Arc;

/// 默认监听端口
const DEFAULT_PORT: u16 = 5000;

/// 程序配置
pub struct AppConfig {
    /// 监听端口
    ///
    /// 可通过环境变量 `PORT` 来调整，默认5000
    pub port: u16,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        dotenvy::dotenv().ok();

        let config = AppConfig {
            port: std::env::var("PORT").map_or(DEFAULT_PORT, |s| s.parse().unwrap_or(DEFAULT_PORT)),
        };

        Ok(Arc::new(config))
    }
}

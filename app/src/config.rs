use crate::error::{AreaError, Result};
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    pub site_root: String,
    pub maps_api_key: Option<String>,
    /// Dump the area report to the log on every validation request.
    pub log_area_report: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            site_root: "target/site".to_string(),
            maps_api_key: None,
            log_area_report: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let bind_address = dotenvy::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|_| AreaError::Config("Invalid BIND_ADDRESS".to_string()))?;

        let site_root = dotenvy::var("SITE_ROOT")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "target/site".to_string());

        let maps_api_key = dotenvy::var("GOOGLE_MAPS_API_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        let app_env = dotenvy::var("APP_ENV").unwrap_or_else(|_| "production".to_string());
        let log_area_report = match app_env.as_str() {
            "development" => true,
            "production" | "test" => false,
            other => {
                return Err(AreaError::Config(format!("Invalid APP_ENV: {other}")));
            }
        };

        Ok(AppConfig {
            bind_address,
            site_root,
            maps_api_key,
            log_area_report,
        })
    }
}

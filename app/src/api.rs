use crate::areas::LatLng;
use crate::statistics::AreaStatistics;
use crate::validation::ValidationResult;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use std::sync::Arc;

#[cfg(feature = "ssr")]
use crate::{api_impl, config::AppConfig};

/// Get the `AppConfig` from Leptos context
#[cfg(feature = "ssr")]
pub fn get_config_from_context() -> Result<Arc<AppConfig>, ServerFnError> {
    use leptos::prelude::use_context;
    use_context::<Arc<AppConfig>>()
        .ok_or_else(|| ServerFnError::new("AppConfig is not provided in context"))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSummaryDto {
    pub id: String,
    pub name: String,
    pub prefecture_count: usize,
    pub prefectures: Vec<String>,
    pub center: LatLng,
    pub zoom: u8,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaValidationResponse {
    pub success: bool,
    pub validation: ValidationResult,
    pub statistics: AreaStatistics,
    pub areas: Vec<AreaSummaryDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettingsDto {
    pub maps_api_key: Option<String>,
}

/// Validation result, statistics and area list for the areas page.
#[server(prefix = "/rpc", endpoint = "get_area_validation")]
pub async fn get_area_validation() -> Result<AreaValidationResponse, ServerFnError> {
    api_impl::build_validation_response().map_err(|e| ServerFnError::new(e.to_string()))
}

/// Client-side map settings taken from the server configuration.
#[server(prefix = "/rpc", endpoint = "get_map_settings")]
pub async fn get_map_settings() -> Result<MapSettingsDto, ServerFnError> {
    let config = get_config_from_context()?;
    Ok(api_impl::map_settings(config.maps_api_key.as_deref()))
}

//! Business logic extracted from server functions and HTTP handlers for
//! testability.
//!
//! The `#[server]` functions and the axum endpoint only wrap these builders,
//! so the payloads can be checked without a running server.

use crate::api::{ApiErrorResponse, AreaSummaryDto, AreaValidationResponse, MapSettingsDto};
use crate::areas::{AreaDefinition, get_all_areas};
use crate::error::Result;
use crate::statistics::compute_statistics;
use crate::validation::validate_areas;
use tracing::{info, warn};

/// Message returned to clients when validation could not be completed.
pub const VALIDATION_FAILURE_MESSAGE: &str = "エリア定義の検証中にエラーが発生しました";

// === DTO Conversions ===

/// Convert an area definition to its response projection.
pub fn area_to_summary(area: &AreaDefinition) -> AreaSummaryDto {
    AreaSummaryDto {
        id: area.id.clone(),
        name: area.name.clone(),
        prefecture_count: area.prefectures.len(),
        prefectures: area.prefectures.clone(),
        center: area.center,
        zoom: area.zoom,
        color: area.color.clone(),
    }
}

pub fn map_settings(maps_api_key: Option<&str>) -> MapSettingsDto {
    MapSettingsDto {
        maps_api_key: maps_api_key.filter(|k| !k.is_empty()).map(str::to_string),
    }
}

pub fn failure_response() -> ApiErrorResponse {
    ApiErrorResponse {
        success: false,
        error: VALIDATION_FAILURE_MESSAGE.to_string(),
    }
}

// === Validation Payload ===

/// Validate the built-in table and package it for clients.
pub fn build_validation_response() -> Result<AreaValidationResponse> {
    build_validation_response_for(get_all_areas())
}

pub fn build_validation_response_for(areas: &[AreaDefinition]) -> Result<AreaValidationResponse> {
    let validation = validate_areas(areas);
    let statistics = compute_statistics(areas);
    statistics.checked_average()?;

    if validation.is_valid {
        info!(
            warnings = validation.warnings.len(),
            "Area definitions validated"
        );
    } else {
        warn!(
            errors = validation.errors.len(),
            warnings = validation.warnings.len(),
            "Area definitions are invalid"
        );
    }

    Ok(AreaValidationResponse {
        success: true,
        validation,
        statistics,
        areas: areas.iter().map(area_to_summary).collect(),
    })
}

//! Integrity checks over the area table.
//!
//! Errors make the table invalid; warnings are advisory only.

use crate::areas::{AreaDefinition, get_all_areas};
use crate::prefectures::EXPECTED_PREFECTURES;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::RangeInclusive;

pub const EXPECTED_AREA_COUNT: usize = 8;

/// Rough bounding box for Japan.
pub const LATITUDE_RANGE: RangeInclusive<f64> = 20.0..=50.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = 120.0..=150.0;

pub const ZOOM_RANGE: RangeInclusive<u8> = 4..=10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate the built-in area table.
pub fn validate_area_definitions() -> ValidationResult {
    validate_areas(get_all_areas())
}

/// Validate an arbitrary area table.
pub fn validate_areas(areas: &[AreaDefinition]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if areas.len() != EXPECTED_AREA_COUNT {
        errors.push(format!(
            "エリア数が{EXPECTED_AREA_COUNT}個ではありません: {}個",
            areas.len()
        ));
    }

    for area in areas {
        check_area(area, &mut errors, &mut warnings);
    }

    let all_prefectures: Vec<&str> = areas
        .iter()
        .flat_map(|area| area.prefectures.iter().map(String::as_str))
        .collect();
    let unique_prefectures: HashSet<&str> = all_prefectures.iter().copied().collect();

    if all_prefectures.len() != unique_prefectures.len() {
        errors.push("都道府県に重複があります".to_string());
    }

    let missing = missing_prefectures(&unique_prefectures);
    if !missing.is_empty() {
        errors.push(format!("未設定の都道府県: {}", missing.join(", ")));
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn check_area(area: &AreaDefinition, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let label = area.label();

    if area.id.is_empty() || area.name.is_empty() || !area.center.is_finite() {
        errors.push(format!("{label}: 必須フィールドが不足しています"));
    }

    if area.prefectures.is_empty() {
        errors.push(format!("{label}: 都道府県が設定されていません"));
    }

    if !LATITUDE_RANGE.contains(&area.center.lat) || !LONGITUDE_RANGE.contains(&area.center.lng) {
        warnings.push(format!("{label}: 座標が日本国内の範囲外の可能性があります"));
    }

    if !ZOOM_RANGE.contains(&area.zoom) {
        warnings.push(format!(
            "{label}: ズームレベルが適切でない可能性があります: {}",
            area.zoom
        ));
    }
}

/// Reference prefectures absent from `present`, in reference order.
fn missing_prefectures(present: &HashSet<&str>) -> Vec<&'static str> {
    EXPECTED_PREFECTURES
        .iter()
        .copied()
        .filter(|pref| !present.contains(pref))
        .collect()
}

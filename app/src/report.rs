//! Development dump of the area table to the log.

use crate::areas::AreaDefinition;
use crate::statistics::compute_statistics;
use crate::validation::validate_areas;
use tracing::{info, warn};

pub fn log_area_report(areas: &[AreaDefinition]) {
    info!("=== エリア定義情報 ===");

    let validation = validate_areas(areas);
    info!(
        "検証結果: {}",
        if validation.is_valid {
            "✅ 正常"
        } else {
            "❌ エラーあり"
        }
    );
    for error in &validation.errors {
        warn!("エラー: {}", error);
    }
    for warning in &validation.warnings {
        warn!("警告: {}", warning);
    }

    let stats = compute_statistics(areas);
    info!(
        total_areas = stats.total_areas,
        total_prefectures = stats.total_prefectures,
        average = stats.average_prefectures_per_area,
        "統計情報"
    );

    info!("=== エリア詳細 ===");
    for area in areas {
        info!(
            "{}: {}都道府県 [{}] center=({}, {}) zoom={} color={}",
            area.name,
            area.prefectures.len(),
            area.prefectures.join(", "),
            area.center.lat,
            area.center.lng,
            area.zoom,
            area.color
        );
    }
}

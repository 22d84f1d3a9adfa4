//! Validator behaviour over the built-in table and reconfigured copies.

#![allow(clippy::unwrap_used)]

use app::areas::{AreaDefinition, LatLng, get_all_areas};
use app::validation::{ValidationResult, validate_area_definitions, validate_areas};

fn reference_areas() -> Vec<AreaDefinition> {
    get_all_areas().to_vec()
}

fn area_mut<'a>(areas: &'a mut [AreaDefinition], id: &str) -> &'a mut AreaDefinition {
    areas.iter_mut().find(|a| a.id == id).unwrap()
}

// === Reference dataset ===

#[test]
fn test_reference_dataset_is_valid() {
    let result = validate_area_definitions();
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_static_and_slice_validation_agree() {
    assert_eq!(validate_area_definitions(), validate_areas(get_all_areas()));
}

// === Valid reconfigurations ===

#[test]
fn test_moving_a_prefecture_between_areas_stays_valid() {
    let mut areas = reference_areas();
    area_mut(&mut areas, "kinki").prefectures.retain(|p| p != "三重県");
    area_mut(&mut areas, "chubu").prefectures.push("三重県".to_string());

    let result = validate_areas(&areas);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_reordering_areas_stays_valid() {
    let mut areas = reference_areas();
    areas.reverse();
    assert!(validate_areas(&areas).is_valid);
}

// === Coverage ===

#[test]
fn test_missing_prefecture_is_reported() {
    let mut areas = reference_areas();
    for area in &mut areas {
        area.prefectures.retain(|p| p != "香川県");
    }

    let result = validate_areas(&areas);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["未設定の都道府県: 香川県".to_string()]);
}

#[test]
fn test_missing_prefectures_follow_reference_order() {
    let mut areas = reference_areas();
    for area in &mut areas {
        area.prefectures
            .retain(|p| p != "沖縄県" && p != "北海道" && p != "東京都");
    }
    // hokkaido is now empty as well
    let result = validate_areas(&areas);
    assert!(!result.is_valid);
    assert!(
        result
            .errors
            .contains(&"未設定の都道府県: 北海道, 東京都, 沖縄県".to_string())
    );
    assert!(
        result
            .errors
            .contains(&"北海道: 都道府県が設定されていません".to_string())
    );
}

// === Duplicates ===

#[test]
fn test_duplicate_prefecture_is_reported() {
    let mut areas = reference_areas();
    area_mut(&mut areas, "kanto").prefectures.push("新潟県".to_string());

    let result = validate_areas(&areas);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["都道府県に重複があります".to_string()]);
}

#[test]
fn test_duplicate_error_is_emitted_once() {
    let mut areas = reference_areas();
    area_mut(&mut areas, "kanto").prefectures.push("新潟県".to_string());
    area_mut(&mut areas, "tohoku").prefectures.push("北海道".to_string());

    let result = validate_areas(&areas);
    let duplicates = result
        .errors
        .iter()
        .filter(|e| e.as_str() == "都道府県に重複があります")
        .count();
    assert_eq!(duplicates, 1);
}

// === Area count ===

#[test]
fn test_wrong_area_count_is_reported() {
    let mut areas = reference_areas();
    let kyushu = areas.pop().unwrap();
    area_mut(&mut areas, "shikoku")
        .prefectures
        .extend(kyushu.prefectures);

    let result = validate_areas(&areas);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["エリア数が8個ではありません: 7個".to_string()]);
}

#[test]
fn test_empty_table() {
    let result = validate_areas(&[]);
    assert!(!result.is_valid);
    assert_eq!(result.errors[0], "エリア数が8個ではありません: 0個");
    assert!(result.errors[1].starts_with("未設定の都道府県: 北海道, 青森県"));
    assert_eq!(result.errors.len(), 2);
}

// === Structure ===

#[test]
fn test_empty_name_is_reported_with_id() {
    let mut areas = reference_areas();
    area_mut(&mut areas, "chugoku").name.clear();

    let result = validate_areas(&areas);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec!["chugoku: 必須フィールドが不足しています".to_string()]
    );
}

#[test]
fn test_non_finite_center_is_a_missing_field() {
    let mut areas = reference_areas();
    area_mut(&mut areas, "tohoku").center = LatLng::new(f64::NAN, 141.0);

    let result = validate_areas(&areas);
    assert!(!result.is_valid);
    assert!(
        result
            .errors
            .contains(&"東北: 必須フィールドが不足しています".to_string())
    );
}

// === Warnings ===

#[test]
fn test_zoom_out_of_range_is_a_warning() {
    let mut areas = reference_areas();
    area_mut(&mut areas, "shikoku").zoom = 2;

    let result = validate_areas(&areas);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("四国"));
    assert!(result.warnings[0].contains('2'));
    assert_eq!(
        result.warnings[0],
        "四国: ズームレベルが適切でない可能性があります: 2"
    );
}

#[test]
fn test_zoom_bounds_are_inclusive() {
    let mut areas = reference_areas();
    area_mut(&mut areas, "kanto").zoom = 4;
    area_mut(&mut areas, "kinki").zoom = 10;
    assert!(validate_areas(&areas).warnings.is_empty());

    area_mut(&mut areas, "kinki").zoom = 11;
    assert_eq!(validate_areas(&areas).warnings.len(), 1);
}

#[test]
fn test_center_outside_japan_is_a_warning() {
    let mut areas = reference_areas();
    area_mut(&mut areas, "kanto").center = LatLng::new(10.0, 10.0);

    let result = validate_areas(&areas);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(
        result.warnings,
        vec!["関東: 座標が日本国内の範囲外の可能性があります".to_string()]
    );
}

#[test]
fn test_warnings_keep_area_order() {
    let mut areas = reference_areas();
    area_mut(&mut areas, "kyushu").zoom = 12;
    area_mut(&mut areas, "hokkaido").center = LatLng::new(60.0, 141.0);

    let result = validate_areas(&areas);
    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings[0].starts_with("北海道"));
    assert!(result.warnings[1].starts_with("九州・沖縄"));
}

// === Serialization ===

#[test]
fn test_validation_result_json_keys() {
    let result = ValidationResult {
        is_valid: false,
        errors: vec!["e".to_string()],
        warnings: vec![],
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["isValid"], false);
    assert_eq!(json["errors"][0], "e");
    assert!(json["warnings"].as_array().unwrap().is_empty());
}

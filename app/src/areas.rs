//! The eight-area grouping of Japan's prefectures.
//!
//! The table is built once on first access and is read-only afterwards.
//! Every `get_*` lookup runs over that table; the matching `find_*` form
//! takes an explicit slice so the same logic can run over any area list.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// エリア定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaDefinition {
    pub id: String,
    pub name: String,
    pub prefectures: Vec<String>,
    pub center: LatLng,
    pub zoom: u8,
    pub color: String,
}

impl AreaDefinition {
    pub fn new(
        id: &str,
        name: &str,
        prefectures: &[&str],
        center: LatLng,
        zoom: u8,
        color: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            prefectures: prefectures.iter().map(ToString::to_string).collect(),
            center,
            zoom,
            color: color.to_string(),
        }
    }

    pub fn contains_prefecture(&self, prefecture: &str) -> bool {
        self.prefectures.iter().any(|p| p == prefecture)
    }

    /// Name used in diagnostics; falls back to the id when the name is blank.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// 8エリア分類 (宣言順)
pub static AREA_DEFINITIONS: LazyLock<Vec<AreaDefinition>> = LazyLock::new(|| {
    vec![
        AreaDefinition::new(
            "hokkaido",
            "北海道",
            &["北海道"],
            LatLng::new(43.064359, 141.346814),
            6,
            "#FF6B6B",
        ),
        AreaDefinition::new(
            "tohoku",
            "東北",
            &["青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県"],
            LatLng::new(39.703619, 141.152684),
            6,
            "#4ECDC4",
        ),
        AreaDefinition::new(
            "kanto",
            "関東",
            &[
                "茨城県",
                "栃木県",
                "群馬県",
                "埼玉県",
                "千葉県",
                "東京都",
                "神奈川県",
            ],
            LatLng::new(35.676191, 139.650309),
            7,
            "#45B7D1",
        ),
        AreaDefinition::new(
            "chubu",
            "中部",
            &[
                "新潟県",
                "富山県",
                "石川県",
                "福井県",
                "山梨県",
                "長野県",
                "岐阜県",
                "静岡県",
                "愛知県",
            ],
            LatLng::new(36.204824, 138.252924),
            6,
            "#96CEB4",
        ),
        AreaDefinition::new(
            "kinki",
            "近畿",
            &[
                "三重県",
                "滋賀県",
                "京都府",
                "大阪府",
                "兵庫県",
                "奈良県",
                "和歌山県",
            ],
            LatLng::new(34.690083, 135.195511),
            7,
            "#FFEAA7",
        ),
        AreaDefinition::new(
            "chugoku",
            "中国",
            &["鳥取県", "島根県", "岡山県", "広島県", "山口県"],
            LatLng::new(34.661751, 133.934444),
            6,
            "#DDA0DD",
        ),
        AreaDefinition::new(
            "shikoku",
            "四国",
            &["徳島県", "香川県", "愛媛県", "高知県"],
            LatLng::new(33.841647, 133.750127),
            7,
            "#98D8C8",
        ),
        AreaDefinition::new(
            "kyushu",
            "九州・沖縄",
            &[
                "福岡県",
                "佐賀県",
                "長崎県",
                "熊本県",
                "大分県",
                "宮崎県",
                "鹿児島県",
                "沖縄県",
            ],
            LatLng::new(32.750286, 130.667364),
            6,
            "#F7DC6F",
        ),
    ]
});

// === Lookups over an explicit area list ===

pub fn find_area_by_prefecture<'a>(
    areas: &'a [AreaDefinition],
    prefecture: &str,
) -> Option<&'a AreaDefinition> {
    areas.iter().find(|area| area.contains_prefecture(prefecture))
}

pub fn find_area_by_id<'a>(areas: &'a [AreaDefinition], id: &str) -> Option<&'a AreaDefinition> {
    areas.iter().find(|area| area.id == id)
}

pub fn find_area_id_by_name<'a>(areas: &'a [AreaDefinition], name: &str) -> Option<&'a str> {
    areas
        .iter()
        .find(|area| area.name == name)
        .map(|area| area.id.as_str())
}

// === Lookups over the built-in table ===

/// All areas in declaration order.
pub fn get_all_areas() -> &'static [AreaDefinition] {
    &AREA_DEFINITIONS
}

/// 都道府県からエリアを取得する
pub fn get_area_by_prefecture(prefecture: &str) -> Option<&'static AreaDefinition> {
    find_area_by_prefecture(get_all_areas(), prefecture)
}

/// エリアIDからエリア定義を取得する
pub fn get_area_by_id(id: &str) -> Option<&'static AreaDefinition> {
    find_area_by_id(get_all_areas(), id)
}

/// エリア名からエリアIDを取得する
pub fn get_area_id_by_name(name: &str) -> Option<&'static str> {
    find_area_id_by_name(get_all_areas(), name)
}

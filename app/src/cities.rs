//! Prefectural capital markers shown on the map page.

use crate::areas::LatLng;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub prefecture: String,
    pub location: LatLng,
}

impl City {
    fn new(id: &str, name: &str, prefecture: &str, location: LatLng) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            prefecture: prefecture.to_string(),
            location,
        }
    }
}

pub static CITIES: LazyLock<Vec<City>> = LazyLock::new(|| {
    vec![
        City::new("sapporo", "札幌市", "北海道", LatLng::new(43.064171, 141.346939)),
        City::new("aomori", "青森市", "青森県", LatLng::new(40.824589, 140.740548)),
        City::new("morioka", "盛岡市", "岩手県", LatLng::new(39.703649, 141.152667)),
        City::new("sendai", "仙台市", "宮城県", LatLng::new(38.268215, 140.869356)),
        City::new("akita", "秋田市", "秋田県", LatLng::new(39.718637, 140.102381)),
        City::new("yamagata", "山形市", "山形県", LatLng::new(38.240436, 140.363633)),
        City::new("fukushima", "福島市", "福島県", LatLng::new(37.750299, 140.467521)),
        City::new("mito", "水戸市", "茨城県", LatLng::new(36.341813, 140.446793)),
        City::new("utsunomiya", "宇都宮市", "栃木県", LatLng::new(36.565725, 139.883565)),
        City::new("maebashi", "前橋市", "群馬県", LatLng::new(36.391208, 139.060156)),
        City::new("saitama", "さいたま市", "埼玉県", LatLng::new(35.857428, 139.648933)),
        City::new("chiba", "千葉市", "千葉県", LatLng::new(35.605058, 140.123308)),
        City::new("tokyo", "新宿区", "東京都", LatLng::new(35.689521, 139.691704)),
        City::new("yokohama", "横浜市", "神奈川県", LatLng::new(35.447753, 139.642514)),
        City::new("niigata", "新潟市", "新潟県", LatLng::new(37.902418, 139.023221)),
        City::new("toyama", "富山市", "富山県", LatLng::new(36.695290, 137.211338)),
        City::new("kanazawa", "金沢市", "石川県", LatLng::new(36.594682, 136.625573)),
        City::new("fukui", "福井市", "福井県", LatLng::new(36.065219, 136.221642)),
        City::new("kofu", "甲府市", "山梨県", LatLng::new(35.664158, 138.568449)),
        City::new("nagano", "長野市", "長野県", LatLng::new(36.651289, 138.181224)),
        City::new("gifu", "岐阜市", "岐阜県", LatLng::new(35.391227, 136.722291)),
        City::new("shizuoka", "静岡市", "静岡県", LatLng::new(34.976978, 138.383054)),
        City::new("nagoya", "名古屋市", "愛知県", LatLng::new(35.180188, 136.906565)),
        City::new("tsu", "津市", "三重県", LatLng::new(34.730283, 136.508591)),
        City::new("otsu", "大津市", "滋賀県", LatLng::new(35.004531, 135.868590)),
        City::new("kyoto", "京都市", "京都府", LatLng::new(35.021365, 135.755481)),
        City::new("osaka", "大阪市", "大阪府", LatLng::new(34.686297, 135.519661)),
        City::new("kobe", "神戸市", "兵庫県", LatLng::new(34.691279, 135.183025)),
        City::new("nara", "奈良市", "奈良県", LatLng::new(34.685333, 135.832744)),
        City::new("wakayama", "和歌山市", "和歌山県", LatLng::new(34.226034, 135.167506)),
        City::new("tottori", "鳥取市", "鳥取県", LatLng::new(35.503869, 134.237672)),
        City::new("matsue", "松江市", "島根県", LatLng::new(35.472297, 133.050499)),
        City::new("okayama", "岡山市", "岡山県", LatLng::new(34.661772, 133.934675)),
        City::new("hiroshima", "広島市", "広島県", LatLng::new(34.396560, 132.459622)),
        City::new("yamaguchi", "山口市", "山口県", LatLng::new(34.186121, 131.470500)),
        City::new("tokushima", "徳島市", "徳島県", LatLng::new(34.065770, 134.559303)),
        City::new("takamatsu", "高松市", "香川県", LatLng::new(34.340149, 134.043444)),
        City::new("matsuyama", "松山市", "愛媛県", LatLng::new(33.841660, 132.765362)),
        City::new("kochi", "高知市", "高知県", LatLng::new(33.559705, 133.531080)),
        City::new("fukuoka", "福岡市", "福岡県", LatLng::new(33.606785, 130.418314)),
        City::new("saga", "佐賀市", "佐賀県", LatLng::new(33.249367, 130.298822)),
        City::new("nagasaki", "長崎市", "長崎県", LatLng::new(32.744839, 129.873756)),
        City::new("kumamoto", "熊本市", "熊本県", LatLng::new(32.789828, 130.741667)),
        City::new("oita", "大分市", "大分県", LatLng::new(33.238194, 131.612591)),
        City::new("miyazaki", "宮崎市", "宮崎県", LatLng::new(31.911090, 131.423855)),
        City::new("kagoshima", "鹿児島市", "鹿児島県", LatLng::new(31.560148, 130.557981)),
        City::new("naha", "那覇市", "沖縄県", LatLng::new(26.212401, 127.680932)),
    ]
});

pub fn get_all_cities() -> &'static [City] {
    &CITIES
}

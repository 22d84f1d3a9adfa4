//! Business logic extracted from Leptos components for testability.
//!
//! Projection, clustering, selection and URL synchronisation rules live
//! here as plain functions; the components in `components::*` only wire
//! them to signals.

use crate::areas::{AreaDefinition, LatLng, get_area_by_prefecture};
use crate::cities::City;
use std::f64::consts::PI;
use std::time::Duration;

// === Map View ===

pub const DEFAULT_CENTER: LatLng = LatLng::new(38.0, 138.0);
pub const DEFAULT_ZOOM: u8 = 6;
pub const MIN_MAP_ZOOM: u8 = 3;
pub const MAX_MAP_ZOOM: u8 = 12;

/// Canvas size in CSS pixels; also the requested static-map size.
pub const MAP_WIDTH: f64 = 640.0;
pub const MAP_HEIGHT: f64 = 480.0;

const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.0;

pub const PAN_STEP_PX: f64 = 160.0;
pub const CLUSTER_RADIUS_PX: f64 = 36.0;

/// Delay before the view is written back to the query string.
pub const URL_SYNC_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn distance_to(&self, other: &ScreenPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapView {
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self {
            center: LatLng::new(
                center.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE),
                center.lng.clamp(-180.0, 180.0),
            ),
            zoom: zoom.clamp(MIN_MAP_ZOOM, MAX_MAP_ZOOM),
        }
    }

    /// Build a view from raw `lat` / `lng` / `zoom` query values.
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_query(lat: Option<&str>, lng: Option<&str>, zoom: Option<&str>) -> Self {
        let lat = parse_coordinate(lat, DEFAULT_CENTER.lat, MAX_LATITUDE);
        let lng = parse_coordinate(lng, DEFAULT_CENTER.lng, 180.0);
        let zoom = zoom
            .and_then(|z| z.trim().parse::<u8>().ok())
            .unwrap_or(DEFAULT_ZOOM);
        Self::new(LatLng::new(lat, lng), zoom)
    }

    pub fn to_query_string(&self) -> String {
        format!(
            "lat={:.6}&lng={:.6}&zoom={}",
            self.center.lat, self.center.lng, self.zoom
        )
    }

    pub fn zoomed(self, delta: i8) -> Self {
        let zoom = (i16::from(self.zoom) + i16::from(delta))
            .clamp(i16::from(MIN_MAP_ZOOM), i16::from(MAX_MAP_ZOOM));
        Self::new(self.center, zoom as u8)
    }

    /// Move the center by a screen-space offset.
    pub fn panned(self, dx: f64, dy: f64) -> Self {
        let (x, y) = world_point(self.center, self.zoom);
        Self::new(from_world_point(x + dx, y + dy, self.zoom), self.zoom)
    }

    pub fn centered_on(self, center: LatLng) -> Self {
        Self::new(center, self.zoom)
    }

    /// Position of `point` on the canvas.
    pub fn project(&self, point: LatLng) -> ScreenPoint {
        let (cx, cy) = world_point(self.center, self.zoom);
        let (px, py) = world_point(point, self.zoom);
        ScreenPoint {
            x: px - cx + MAP_WIDTH / 2.0,
            y: py - cy + MAP_HEIGHT / 2.0,
        }
    }
}

fn parse_coordinate(raw: Option<&str>, default: f64, limit: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && v.abs() <= limit)
        .unwrap_or(default)
}

/// Web-Mercator world pixel coordinates at `zoom`.
fn world_point(point: LatLng, zoom: u8) -> (f64, f64) {
    let scale = TILE_SIZE * f64::from(1u32 << zoom);
    let x = (point.lng + 180.0) / 360.0 * scale;
    let sin = point.lat.to_radians().sin().clamp(-0.9999, 0.9999);
    let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * scale;
    (x, y)
}

fn from_world_point(x: f64, y: f64, zoom: u8) -> LatLng {
    let scale = TILE_SIZE * f64::from(1u32 << zoom);
    let lng = x / scale * 360.0 - 180.0;
    let n = PI - 2.0 * PI * y / scale;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

// === URL Synchronisation ===

/// Flag guarding the deferred query-string write.
///
/// At most one write is pending at a time; triggers that arrive while one
/// is pending are dropped, the pending write picks up the latest view when
/// it fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlSyncGate {
    pending: bool,
}

impl UrlSyncGate {
    /// Returns `true` when the caller should schedule a write.
    pub fn try_begin(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn finish(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Whether the URL currently describing `current` should be rewritten for `view`.
pub fn needs_url_update(current: &MapView, view: &MapView) -> bool {
    current.to_query_string() != view.to_query_string()
}

pub fn map_path(view: &MapView) -> String {
    format!("/map?{}", view.to_query_string())
}

pub fn static_map_url(view: &MapView, api_key: &str) -> String {
    format!(
        "https://maps.googleapis.com/maps/api/staticmap?center={:.6},{:.6}&zoom={}&size={}x{}&key={}",
        view.center.lat,
        view.center.lng,
        view.zoom,
        MAP_WIDTH as u32,
        MAP_HEIGHT as u32,
        urlencoding::encode(api_key)
    )
}

// === Markers & Selection ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Area,
    City,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerKey {
    pub kind: MarkerKind,
    pub id: String,
}

impl MarkerKey {
    pub fn area(id: &str) -> Self {
        Self {
            kind: MarkerKind::Area,
            id: id.to_string(),
        }
    }

    pub fn city(id: &str) -> Self {
        Self {
            kind: MarkerKind::City,
            id: id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub key: MarkerKey,
    pub title: String,
    pub position: LatLng,
    pub color: String,
    pub glyph: String,
    /// Lines shown in the info window.
    pub details: Vec<String>,
}

const FALLBACK_MARKER_COLOR: &str = "#6B7280";

pub fn format_coordinates(point: LatLng) -> String {
    format!("{:.4}, {:.4}", point.lat, point.lng)
}

fn first_char(s: &str) -> String {
    s.chars().next().map(String::from).unwrap_or_default()
}

pub fn area_marker(area: &AreaDefinition) -> MapMarker {
    MapMarker {
        key: MarkerKey::area(&area.id),
        title: area.name.clone(),
        position: area.center,
        color: area.color.clone(),
        glyph: first_char(&area.name),
        details: vec![
            format!("都道府県: {}件", area.prefectures.len()),
            area.prefectures.join(", "),
            format!("座標: {}", format_coordinates(area.center)),
        ],
    }
}

pub fn city_marker(city: &City) -> MapMarker {
    let area = get_area_by_prefecture(&city.prefecture);
    MapMarker {
        key: MarkerKey::city(&city.id),
        title: city.name.clone(),
        position: city.location,
        color: area.map_or_else(|| FALLBACK_MARKER_COLOR.to_string(), |a| a.color.clone()),
        glyph: first_char(&city.name),
        details: vec![
            format!("都道府県: {}", city.prefecture),
            format!("エリア: {}", area.map_or("不明", |a| a.name.as_str())),
            format!("座標: {}", format_coordinates(city.location)),
        ],
    }
}

/// Clicking the selected marker clears the selection; any other marker selects it.
pub fn toggle_selection(current: Option<&MarkerKey>, clicked: &MarkerKey) -> Option<MarkerKey> {
    match current {
        Some(key) if key == clicked => None,
        _ => Some(clicked.clone()),
    }
}

pub fn find_marker<'a>(markers: &'a [MapMarker], key: &MarkerKey) -> Option<&'a MapMarker> {
    markers.iter().find(|m| &m.key == key)
}

// === Clustering ===

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCluster {
    /// Screen position of the first member.
    pub anchor: ScreenPoint,
    pub position: LatLng,
    /// Indices into the marker slice, in input order.
    pub members: Vec<usize>,
}

impl MarkerCluster {
    pub fn is_single(&self) -> bool {
        self.members.len() == 1
    }
}

/// Greedy screen-space clustering: each marker joins the first cluster whose
/// anchor lies within `radius` pixels, otherwise it starts a new one.
pub fn cluster_markers(markers: &[MapMarker], view: &MapView, radius: f64) -> Vec<MarkerCluster> {
    let mut clusters: Vec<MarkerCluster> = Vec::new();

    for (index, marker) in markers.iter().enumerate() {
        let point = view.project(marker.position);
        match clusters
            .iter_mut()
            .find(|c| c.anchor.distance_to(&point) <= radius)
        {
            Some(cluster) => cluster.members.push(index),
            None => clusters.push(MarkerCluster {
                anchor: point,
                position: marker.position,
                members: vec![index],
            }),
        }
    }

    clusters
}

/// View after clicking a cluster bubble.
pub fn expand_cluster(view: &MapView, cluster: &MarkerCluster) -> MapView {
    view.centered_on(cluster.position).zoomed(1)
}

pub fn cluster_bubble_radius(count: usize) -> f64 {
    (14.0 + 3.0 * (count as f64).sqrt()).min(30.0)
}

// === Display Helpers ===

/// Average shown on the statistics card; non-finite values never reach the UI.
pub fn format_average(average: f64) -> String {
    if average.is_finite() {
        format!("{average:.1}")
    } else {
        "—".to_string()
    }
}

pub fn validation_badge_class(is_valid: bool) -> &'static str {
    if is_valid {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-800"
    }
}

pub fn validation_status_text(is_valid: bool) -> &'static str {
    if is_valid {
        "✅ 正常"
    } else {
        "❌ エラーあり"
    }
}

/// First three prefectures, with an ellipsis when more follow.
pub fn prefecture_preview(prefectures: &[String]) -> String {
    let mut preview = prefectures
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if prefectures.len() > 3 {
        preview.push_str("...");
    }
    preview
}

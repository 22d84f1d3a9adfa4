use crate::areas::get_all_areas;
use crate::cities::get_all_cities;
use crate::components::map_canvas::MapCanvas;
use crate::components_impl::{
    CLUSTER_RADIUS_PX, MapMarker, MapView, MarkerKey, URL_SYNC_DELAY, UrlSyncGate, area_marker,
    city_marker, format_coordinates, map_path, needs_url_update,
};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

/// Body of the deferred URL write.
///
/// Returns the path to navigate to when the view has drifted from the URL,
/// and reopens the gate. Returns `None` without touching anything once the
/// page's reactive values have been disposed.
pub fn deferred_url_write(
    map_view: RwSignal<MapView>,
    url_view: Memo<MapView>,
    url_gate: StoredValue<UrlSyncGate>,
) -> Option<String> {
    let view = map_view.try_get_untracked()?;
    let from_url = url_view.try_get_untracked()?;
    url_gate.try_update_value(UrlSyncGate::finish)?;
    needs_url_update(&from_url, &view).then(|| map_path(&view))
}

#[component]
pub fn MapPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let url_view = Memo::new(move |_| {
        query.with(|q| {
            MapView::from_query(
                q.get("lat").as_deref(),
                q.get("lng").as_deref(),
                q.get("zoom").as_deref(),
            )
        })
    });

    let map_view = RwSignal::new(url_view.get_untracked());
    let selected = RwSignal::new(None::<MarkerKey>);
    let show_areas = RwSignal::new(true);
    let show_cities = RwSignal::new(true);
    let url_gate = StoredValue::new(UrlSyncGate::default());
    let pending_write = StoredValue::new(None::<TimeoutHandle>);

    // Leaving the page must not let a queued write navigate back to it.
    on_cleanup(move || {
        if let Some(handle) = pending_write.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    let markers = Signal::derive(move || {
        let mut markers: Vec<MapMarker> = Vec::new();
        if show_areas.get() {
            markers.extend(get_all_areas().iter().map(area_marker));
        }
        if show_cities.get() {
            markers.extend(get_all_cities().iter().map(city_marker));
        }
        markers
    });

    // Query string changed outside the page (history navigation, edited link).
    Effect::new(move |_| {
        let from_url = url_view.get();
        if needs_url_update(&from_url, &map_view.get_untracked()) {
            map_view.set(from_url);
        }
    });

    // Deferred write-back of the view; at most one pending write.
    Effect::new(move |prev: Option<()>| {
        map_view.track();
        if prev.is_none() {
            return;
        }
        if !url_gate.try_update_value(UrlSyncGate::try_begin).unwrap_or(false) {
            return;
        }

        let navigate = navigate.clone();
        let scheduled = set_timeout_with_handle(
            move || {
                pending_write.try_set_value(None);
                if let Some(path) = deferred_url_write(map_view, url_view, url_gate) {
                    navigate(
                        &path,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
            },
            URL_SYNC_DELAY,
        );
        match scheduled {
            Ok(handle) => pending_write.set_value(Some(handle)),
            Err(e) => {
                leptos::logging::warn!("URL更新の予約に失敗しました: {e:?}");
                url_gate.update_value(UrlSyncGate::finish);
            }
        }
    });

    view! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-bold">"地図"</h1>
                <div class="flex gap-4 text-sm">
                    <label class="flex items-center gap-1">
                        <input type="checkbox" bind:checked=show_areas/>
                        "エリア"
                    </label>
                    <label class="flex items-center gap-1">
                        <input type="checkbox" bind:checked=show_cities/>
                        "都市"
                    </label>
                </div>
            </div>
            <p class="text-sm text-gray-600">
                {move || {
                    let view = map_view.get();
                    format!("中心: {} / ズーム: {}", format_coordinates(view.center), view.zoom)
                }}
            </p>
            <MapCanvas
                markers=markers
                map_view=map_view
                selected=selected
                cluster_radius=CLUSTER_RADIUS_PX
            />
        </div>
    }
}

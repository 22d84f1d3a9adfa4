use crate::api::get_map_settings;
use crate::components_impl::{
    MAP_HEIGHT, MAP_WIDTH, MapMarker, MapView, MarkerCluster, MarkerKey, PAN_STEP_PX,
    cluster_bubble_radius, cluster_markers, expand_cluster, find_marker, static_map_url,
    toggle_selection,
};
use leptos::prelude::*;

/// SVG map with markers, cluster bubbles, an info window and pan/zoom controls.
///
/// `map_view` and `selected` are owned by the page so it can seed them and
/// react to their changes.
#[component]
pub fn MapCanvas(
    markers: Signal<Vec<MapMarker>>,
    map_view: RwSignal<MapView>,
    selected: RwSignal<Option<MarkerKey>>,
    #[prop(default = 0.0)] cluster_radius: f64,
) -> impl IntoView {
    let settings = LocalResource::new(|| async { get_map_settings().await });
    let api_key = move || {
        settings
            .get()
            .and_then(Result::ok)
            .and_then(|s| s.maps_api_key)
    };

    let clusters = Memo::new(move |_| {
        markers.with(|m| cluster_markers(m, &map_view.get(), cluster_radius))
    });

    view! {
        <div class="relative w-full overflow-hidden rounded border border-gray-200">
            <svg
                viewBox=format!("0 0 {MAP_WIDTH} {MAP_HEIGHT}")
                class="block w-full h-auto bg-sky-100"
            >
                <rect x="0" y="0" width=MAP_WIDTH.to_string() height=MAP_HEIGHT.to_string() fill="#E0F2FE"/>
                {move || {
                    api_key()
                        .map(|key| {
                            view! {
                                <image
                                    href=static_map_url(&map_view.get(), &key)
                                    x="0"
                                    y="0"
                                    width=MAP_WIDTH.to_string()
                                    height=MAP_HEIGHT.to_string()
                                />
                            }
                        })
                }}
                {move || {
                    clusters
                        .get()
                        .into_iter()
                        .map(|cluster| render_cluster(cluster, markers, map_view, selected))
                        .collect_view()
                }}
            </svg>

            <InfoWindow markers=markers map_view=map_view selected=selected/>

            <div class="absolute top-2 right-2 flex flex-col gap-1">
                <button class="bg-white rounded shadow px-2" title="ズームイン"
                    on:click=move |_| map_view.update(|v| *v = v.zoomed(1))>"+"</button>
                <button class="bg-white rounded shadow px-2" title="ズームアウト"
                    on:click=move |_| map_view.update(|v| *v = v.zoomed(-1))>"−"</button>
            </div>
            <div class="absolute bottom-2 right-2 grid grid-cols-3 gap-1 text-xs">
                <span/>
                <button class="bg-white rounded shadow px-2"
                    on:click=move |_| map_view.update(|v| *v = v.panned(0.0, -PAN_STEP_PX))>"↑"</button>
                <span/>
                <button class="bg-white rounded shadow px-2"
                    on:click=move |_| map_view.update(|v| *v = v.panned(-PAN_STEP_PX, 0.0))>"←"</button>
                <span/>
                <button class="bg-white rounded shadow px-2"
                    on:click=move |_| map_view.update(|v| *v = v.panned(PAN_STEP_PX, 0.0))>"→"</button>
                <span/>
                <button class="bg-white rounded shadow px-2"
                    on:click=move |_| map_view.update(|v| *v = v.panned(0.0, PAN_STEP_PX))>"↓"</button>
                <span/>
            </div>
        </div>
        <Show when=move || settings.get().is_some() && api_key().is_none()>
            <p class="mt-2 text-xs text-gray-500">
                "地図APIキーが設定されていないため、背景地図なしで表示しています"
            </p>
        </Show>
    }
}

fn render_cluster(
    cluster: MarkerCluster,
    markers: Signal<Vec<MapMarker>>,
    map_view: RwSignal<MapView>,
    selected: RwSignal<Option<MarkerKey>>,
) -> AnyView {
    let cx = format!("{:.1}", cluster.anchor.x);
    let cy = format!("{:.1}", cluster.anchor.y);

    if cluster.is_single() {
        let Some(marker) = markers.with_untracked(|m| m.get(cluster.members[0]).cloned()) else {
            return ().into_any();
        };
        let key = marker.key.clone();
        let highlight_key = marker.key.clone();
        let label_y = format!("{:.1}", cluster.anchor.y + 4.0);

        view! {
            <g
                class="cursor-pointer"
                on:click=move |_| selected.update(|s| *s = toggle_selection(s.as_ref(), &key))
            >
                <circle
                    cx=cx.clone()
                    cy=cy
                    r="14"
                    fill=marker.color
                    stroke="white"
                    stroke-width=move || {
                        if selected.with(|s| s.as_ref() == Some(&highlight_key)) { "4" } else { "2" }
                    }
                />
                <text
                    x=cx
                    y=label_y
                    text-anchor="middle"
                    fill="white"
                    font-size="10"
                    font-weight="bold"
                >
                    {marker.glyph}
                </text>
            </g>
        }
        .into_any()
    } else {
        let count = cluster.members.len();
        let radius = format!("{:.1}", cluster_bubble_radius(count));
        let label_y = format!("{:.1}", cluster.anchor.y + 4.0);

        view! {
            <g
                class="cursor-pointer"
                on:click=move |_| map_view.update(|v| *v = expand_cluster(v, &cluster))
            >
                <circle cx=cx.clone() cy=cy r=radius fill="#1F2937" fill-opacity="0.8" stroke="white" stroke-width="2"/>
                <text x=cx y=label_y text-anchor="middle" fill="white" font-size="12" font-weight="bold">
                    {count.to_string()}
                </text>
            </g>
        }
        .into_any()
    }
}

/// Overlay anchored at the selected marker.
#[component]
fn InfoWindow(
    markers: Signal<Vec<MapMarker>>,
    map_view: RwSignal<MapView>,
    selected: RwSignal<Option<MarkerKey>>,
) -> impl IntoView {
    move || {
        let key = selected.get()?;
        let marker = markers.with(|m| find_marker(m, &key).cloned())?;
        let point = map_view.get().project(marker.position);
        let style = format!(
            "left: {:.2}%; top: {:.2}%; transform: translate(-50%, calc(-100% - 18px)); max-width: 250px;",
            point.x / MAP_WIDTH * 100.0,
            point.y / MAP_HEIGHT * 100.0
        );

        Some(view! {
            <div class="absolute bg-white rounded shadow-lg p-2" style=style>
                <button
                    class="float-right ml-2 text-gray-500 hover:text-gray-800"
                    title="閉じる"
                    on:click=move |_| selected.set(None)
                >
                    "×"
                </button>
                <h3 class="text-base font-bold mb-2">{marker.title}</h3>
                {marker
                    .details
                    .into_iter()
                    .map(|line| view! { <p class="text-xs text-gray-600 mb-1">{line}</p> })
                    .collect_view()}
            </div>
        })
    }
}

use crate::api::{AreaValidationResponse, get_area_validation};
use crate::areas::get_all_areas;
use crate::components::map_canvas::MapCanvas;
use crate::components_impl::{
    DEFAULT_CENTER, MapMarker, MapView, MarkerKey, area_marker, format_average,
    prefecture_preview, validation_badge_class, validation_status_text,
};
use leptos::prelude::*;

const AREAS_PAGE_ZOOM: u8 = 5;

#[component]
pub fn AreasPage() -> impl IntoView {
    let validation_resource = Resource::new(|| (), |()| async { get_area_validation().await });
    let selected = RwSignal::new(None::<MarkerKey>);
    let map_view = RwSignal::new(MapView::new(DEFAULT_CENTER, AREAS_PAGE_ZOOM));
    let markers: Vec<MapMarker> = get_all_areas().iter().map(area_marker).collect();
    let markers = Signal::derive(move || markers.clone());

    view! {
        <div class="min-h-screen bg-gray-50 p-8">
            <div class="max-w-6xl mx-auto">
                <h1 class="text-3xl font-bold mb-8">"エリア定義テスト"</h1>

                <Suspense fallback=move || view! { <ValidationLoading/> }>
                    {move || {
                        validation_resource
                            .get()
                            .map(|result| match result {
                                Ok(data) => view! { <ValidationSummary data=data/> }.into_any(),
                                Err(e) => {
                                    leptos::logging::error!("検証データの取得に失敗しました: {e}");
                                    ().into_any()
                                }
                            })
                    }}
                </Suspense>

                <AreaCards selected=selected/>

                <div class="bg-white p-6 rounded-lg shadow">
                    <h2 class="text-2xl font-semibold mb-4">"エリア地図"</h2>
                    <MapCanvas markers=markers map_view=map_view selected=selected/>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ValidationLoading() -> impl IntoView {
    view! {
        <div class="text-center py-8">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600 mx-auto"></div>
            <p class="mt-4">"エリア定義を検証中..."</p>
        </div>
    }
}

#[component]
fn ValidationSummary(data: AreaValidationResponse) -> impl IntoView {
    let AreaValidationResponse {
        validation,
        statistics,
        ..
    } = data;
    let is_valid = validation.is_valid;
    let no_issues = validation.errors.is_empty() && validation.warnings.is_empty();

    view! {
        <div class="mb-8">
            <h2 class="text-2xl font-semibold mb-4">"検証結果"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="bg-white p-6 rounded-lg shadow">
                    <h3 class="text-lg font-semibold mb-3">"基本統計"</h3>
                    <div class="space-y-2">
                        <p><span class="font-medium">"エリア数: "</span>{statistics.total_areas.to_string()}</p>
                        <p><span class="font-medium">"都道府県数: "</span>{statistics.total_prefectures.to_string()}</p>
                        <p>
                            <span class="font-medium">"平均都道府県数: "</span>
                            {format_average(statistics.average_prefectures_per_area)}
                        </p>
                        <p>
                            <span class="font-medium">"検証結果:"</span>
                            <span class=format!("ml-2 px-2 py-1 rounded text-sm {}", validation_badge_class(is_valid))>
                                {validation_status_text(is_valid)}
                            </span>
                        </p>
                    </div>
                </div>

                <div class="bg-white p-6 rounded-lg shadow">
                    <h3 class="text-lg font-semibold mb-3">"エラー・警告"</h3>
                    <IssueList title="エラー:" tone="text-red-600" items=validation.errors/>
                    <IssueList title="警告:" tone="text-yellow-600" items=validation.warnings/>
                    <Show when=move || no_issues>
                        <p class="text-green-600">"✅ エラー・警告なし"</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn IssueList(title: &'static str, tone: &'static str, items: Vec<String>) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="mb-4">
            <h4 class=format!("font-medium mb-2 {tone}")>{title}</h4>
            <ul class=format!("list-disc list-inside space-y-1 text-sm {tone}")>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>
    }
    .into_any()
}

#[component]
fn AreaCards(selected: RwSignal<Option<MarkerKey>>) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h2 class="text-2xl font-semibold mb-4">"エリア詳細"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {get_all_areas()
                    .iter()
                    .map(|area| {
                        let key = MarkerKey::area(&area.id);
                        view! {
                            <div
                                class="bg-white p-4 rounded-lg shadow cursor-pointer hover:shadow-lg transition-shadow"
                                on:click=move |_| selected.set(Some(key.clone()))
                            >
                                <div class="flex items-center mb-2">
                                    <div
                                        class="w-4 h-4 rounded-full mr-2"
                                        style=format!("background-color: {}", area.color)
                                    ></div>
                                    <h3 class="font-semibold">{area.name.clone()}</h3>
                                </div>
                                <p class="text-sm text-gray-600 mb-2">
                                    {format!("{}都道府県", area.prefectures.len())}
                                </p>
                                <p class="text-xs text-gray-500">{prefecture_preview(&area.prefectures)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

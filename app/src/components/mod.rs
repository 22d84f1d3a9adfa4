use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

pub mod areas;
pub mod map;
pub mod map_canvas;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="日本エリアマップ"/>

        <Router>
            <nav class="bg-gray-800 text-white p-4">
                <div class="container mx-auto flex gap-4">
                    <A href="/" attr:class="hover:text-blue-400">"ホーム"</A>
                    <A href="/areas" attr:class="hover:text-blue-400">"エリア定義"</A>
                    <A href="/map" attr:class="hover:text-blue-400">"地図"</A>
                </div>
            </nav>

            <main class="container mx-auto p-4">
                <Routes fallback=|| "ページが見つかりません。">
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("areas") view=areas::AreasPage/>
                    <Route path=StaticSegment("map") view=map::MapPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="text-center py-10">
            <h1 class="text-4xl font-bold mb-4">"日本エリアマップ"</h1>
            <p class="text-gray-600 mb-8">"47都道府県を8つのエリアに分類して地図上に表示します"</p>
            <div class="flex justify-center gap-4">
                <A href="/areas" attr:class="bg-blue-600 text-white px-6 py-3 rounded hover:bg-blue-700">
                    "エリア定義を確認"
                </A>
                <A href="/map" attr:class="bg-gray-600 text-white px-6 py-3 rounded hover:bg-gray-700">
                    "地図を開く"
                </A>
            </div>
        </div>
    }
}

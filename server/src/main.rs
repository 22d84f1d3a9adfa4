#![recursion_limit = "512"]

use app::{components::App, config::AppConfig};
use axum::extract::FromRef;
use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use leptos::context::provide_context;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, handle_server_fns_with_context};
use server_lib::routes::area_api_router;
use std::sync::Arc;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct AppState {
    leptos_options: LeptosOptions,
    config: Arc<AppConfig>,
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(AppConfig::from_env()?);
    info!(
        maps_api_key = config.maps_api_key.is_some(),
        area_report = config.log_area_report,
        "Configuration loaded"
    );

    let leptos_options = LeptosOptions::builder()
        .output_name("frontend")
        .site_pkg_dir("pkg")
        .site_root(config.site_root.clone())
        .build();

    let state = AppState {
        leptos_options,
        config: config.clone(),
    };

    let routes = generate_route_list(App);

    let app = Router::new()
        .route(
            "/rpc/{*fn_name}",
            get(server_fn_handler).post(server_fn_handler),
        )
        .leptos_routes_with_context(
            &state,
            routes,
            {
                let config = state.config.clone();
                move || provide_context(config.clone())
            },
            {
                let options = state.leptos_options.clone();
                move || shell(options.clone())
            },
        )
        .fallback(file_and_error_handler)
        .nest_service(
            "/pkg",
            ServeDir::new(format!("{}/pkg", config.site_root)),
        )
        .with_state(state)
        .merge(area_api_router(config.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Listening on http://{}", config.bind_address);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos_meta::MetaTags;
    view! {
        <!DOCTYPE html>
        <html lang="ja">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/frontend.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

async fn server_fn_handler(State(state): State<AppState>, req: Request<Body>) -> impl IntoResponse {
    handle_server_fns_with_context(
        move || {
            provide_context(state.config.clone());
        },
        req,
    )
    .await
}

async fn file_and_error_handler(State(state): State<AppState>, req: Request<Body>) -> Response {
    let path = req.uri().path();

    if path.starts_with("/pkg") {
        return (
            axum::http::StatusCode::NOT_FOUND,
            Html("<h1>404 Not Found</h1>"),
        )
            .into_response();
    }

    let options = state.leptos_options.clone();
    let handler = leptos_axum::render_app_to_stream_with_context(
        move || {
            provide_context(state.config.clone());
        },
        move || shell(options.clone()),
    );
    handler(req).await.into_response()
}

#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down gracefully...");
}

use anyhow::Result;
use axum::{extract::ws::WebSocketUpgrade, response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::api;
use super::app::app;
use crate::config::ServerConfig;

fn shell(glue: &str) -> String {
    format!(
        r#"
            <!DOCTYPE html>
            <html>
                <head>
                    <title>Student AI Assistant</title>
                    <meta charset="utf-8">
                    <meta name="viewport"
                    content="width=device-width,
                    initial-scale=1,
                    minimum-scale=1,
                    maximum-scale=1,
                    user-scalable=no">
                </head>
                <body> <div id="main"></div> </body>
                {glue}
            </html>
            "#
    )
}

/// Live view page, its websocket, and the JSON chat endpoint.
pub fn router(config: &ServerConfig) -> Router {
    let view = dioxus_liveview::LiveViewPool::new();
    let page = Html(shell(&dioxus_liveview::interpreter_glue(&format!(
        "ws://{}/ws",
        config.reachable_addr
    ))));

    Router::new()
        .route("/", get(move || async move { page }))
        .route(
            "/ws",
            get(move |ws: WebSocketUpgrade| async move {
                ws.on_upgrade(move |socket| async move {
                    _ = view.launch(dioxus_liveview::axum_socket(socket), app).await;
                })
            }),
        )
        .merge(api::routes())
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(config: ServerConfig) -> Result<()> {
    let app = router(&config);

    info!("Listening on http://{}", config.listen_addr);

    axum::Server::bind(&config.listen_addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

use axum::{routing::get, Router};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

mod controllers;
mod db;
mod models;
mod routes;
mod state;
mod utils;
mod ws;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database = match db::connection::init_db().await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = state::AppState::new(database);

    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "client/dist".to_string());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/hello", get(hello))
        .merge(routes::poll_routes::poll_routes(app_state.clone()))
        .merge(routes::ws_routes::ws_routes(app_state))
        .fallback_service(ServeDir::new(&static_dir))
        .layer(cors);

    let server_addr = std::env::var("SERVER_ADDR")
        .unwrap_or_else(|_| {
            eprintln!("SERVER_ADDR environment variable not set, using default 0.0.0.0:8000");
            "0.0.0.0:8000".to_string()
        });

    let addr: SocketAddr = server_addr.parse()
        .unwrap_or_else(|_| {
            eprintln!("Failed to parse SERVER_ADDR: {}", server_addr);
            std::process::exit(1);
        });

    println!("http/ws server listening on {}", addr);
    println!("Serving static files from {}", static_dir);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn hello() -> &'static str {
    "Hello World!"
}

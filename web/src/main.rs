use std::{net::SocketAddr, sync::Arc};

use axum::{Router, handler::Handler, middleware};
use dotenv::dotenv;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod content;
mod demo;
mod error;
mod form;
mod i18n;
mod models;
mod render;
mod request_log;
mod schema;
mod store;
mod trust;
mod utils;

use config::{Env, ServerConfig};
use store::Store;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Clone)]
pub struct App {
    store: Store,
    config: Arc<ServerConfig>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing(Env::from_env());

    let config = ServerConfig::new_from_env();

    let store = match Store::connect(&config.database_url, config.db_pool_size).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                error = %e,
                database_url = %config.database_url,
                "Couldn't open the comment database"
            );
            std::process::exit(1)
        }
    };

    match store.count().await {
        Ok(count) => tracing::info!(count, "Comment database ready"),
        Err(e) => tracing::warn!(error = %e, "Couldn't count stored comments"),
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Couldn't bind the listening socket");
            std::process::exit(1)
        }
    };

    let shared_state = App {
        store: store.clone(),
        config: Arc::new(config),
    };

    tracing::info!("Bot Trapper Demo server running on {}", addr);
    if let Err(e) = axum::serve(listener, app(shared_state))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    // Only after in-flight requests are done, so no write gets cut off
    store.close();
    tracing::info!("Database connection closed.");
}

/// The complete site: the demo routes, static assets from `public_dir` and a
/// 404 page for everything else, including known paths hit with the wrong
/// method.
pub fn app(state: App) -> Router {
    let not_found = demo::pages::not_found.with_state(state.clone());
    let assets = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found);

    let mut router = demo::routes::route()
        .method_not_allowed_fallback(demo::pages::not_found)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http());

    if state.config.request_logging {
        router = router.layer(middleware::from_fn(request_log::log_request));
    }

    router.with_state(state)
}

fn init_tracing(env: Env) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bot_trapper=info,tower_http=info"));
    let registry = tracing_subscriber::registry().with(filter);

    match env {
        Env::Dev => registry.with(tracing_subscriber::fmt::layer()).init(),
        Env::Staging | Env::Production => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down server...");
}

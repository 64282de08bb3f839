//! HTTP API for stored Pokémon.
//!
//! ## Routes
//!
//! - `POST /pokemon/run-pipeline` — Runs the pipeline over `start_id..=end_id`
//! - `GET  /pokemon` — Paginated listing with an optional exact type filter
//! - `GET  /pokemon/{id}` — Lookup by stored identifier
//! - `GET  /pokemon/name/{name}` — Lookup by name
//! - `GET  /types` — Every stored type
//! - `GET  /health` — Liveness probe
//!
//! Every route also answers with a trailing slash.
mod api;
pub mod handlers;

pub use api::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::middleware::NormalizePath;
use actix_web::web;
use pdx_core::Settings;
use pdx_dto::Detail;
use pdx_pipeline::*;
use pdx_store::*;
use std::sync::Arc;

/// Registers every route together with the extractor error handlers.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|e, _| {
            let body = HttpResponse::BadRequest().json(Detail::new(e.to_string()));
            actix_web::error::InternalError::from_response(e, body).into()
        }))
        .app_data(web::QueryConfig::default().error_handler(|e, _| {
            let body = HttpResponse::BadRequest().json(Detail::new(e.to_string()));
            actix_web::error::InternalError::from_response(e, body).into()
        }))
        .route("/health", web::get().to(handlers::health))
        .route("/types", web::get().to(handlers::types))
        .service(
            web::scope("/pokemon")
                .route("", web::get().to(handlers::list))
                .route("/run-pipeline", web::post().to(handlers::run_pipeline))
                .route("/name/{name}", web::get().to(handlers::by_name))
                .route("/{id}", web::get().to(handlers::by_id)),
        );
}

/// Connects the store, creates missing tables, and serves until shutdown.
#[rustfmt::skip]
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let store: Arc<dyn Store> = Arc::new(Postgres::connect(settings.db_url.as_deref()).await?);
    store.migrate().await?;
    let source: Arc<dyn Source> = Arc::new(PokeApi::from_settings(&settings)?);
    let api = web::Data::new(API::new(store, source));
    let origin = settings.cors_origin.clone();
    log::info!("starting server on {}", settings.bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allowed_origin(&origin)
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
            )
            .app_data(api.clone())
            .configure(routes)
    })
    .bind(&settings.bind_addr)?
    .run()
    .await?;
    Ok(())
}

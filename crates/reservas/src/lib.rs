//! Serviço de Reservas: dono das reservas de salas.
//!
//! A turma de cada reserva pertence ao serviço de Gerenciamento e é validada
//! por HTTP no momento da escrita. A data da reserva só é aceita em formato
//! AAAA-MM-DD; qualquer outra coisa é rejeitada com 400 antes da chamada
//! remota.

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::AppState;

/// Migrações embutidas no binário; rodadas na inicialização e nos testes.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Monta o router completo do serviço.
pub fn app(app_state: AppState) -> Router {
    let reservas_routes = Router::new()
        .route(
            "/",
            post(handlers::reservas::create_reserva).get(handlers::reservas::get_all_reservas),
        )
        .route(
            "/{id}",
            get(handlers::reservas::get_reserva)
                .put(handlers::reservas::update_reserva)
                .delete(handlers::reservas::delete_reserva),
        );

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/reservas", reservas_routes)
        .with_state(app_state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", docs::ApiDoc::openapi()))
}

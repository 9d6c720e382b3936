//! Serviço de Atividades: dono de atividades avaliativas e notas.
//!
//! Professor, turma e aluno pertencem ao serviço de Gerenciamento; antes de
//! gravar uma referência a eles, este serviço consulta o endpoint de leitura
//! correspondente por HTTP. A checagem acontece uma vez, na escrita — não há
//! revalidação nem limpeza posterior se o Gerenciamento deletar a entidade.

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
    let atividades_routes = Router::new()
        .route(
            "/",
            post(handlers::atividades::create_atividade)
                .get(handlers::atividades::get_all_atividades),
        )
        .route(
            "/{id}",
            get(handlers::atividades::get_atividade)
                .put(handlers::atividades::update_atividade)
                .delete(handlers::atividades::delete_atividade),
        )
        .route("/{id}/notas", get(handlers::atividades::get_notas_da_atividade));

    let notas_routes = Router::new()
        .route(
            "/",
            post(handlers::notas::create_nota).get(handlers::notas::get_all_notas),
        )
        .route(
            "/{id}",
            get(handlers::notas::get_nota)
                .put(handlers::notas::update_nota)
                .delete(handlers::notas::delete_nota),
        );

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/atividades", atividades_routes)
        .nest("/notas", notas_routes)
        .with_state(app_state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", docs::ApiDoc::openapi()))
}

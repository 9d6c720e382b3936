//! Serviço de Gerenciamento: dono de professores, turmas e alunos.
//!
//! É o serviço folha do sistema — não valida nada em outros serviços, só as
//! próprias referências internas (turma → professor, aluno → turma). Os
//! serviços de Atividades e Reservas consultam os endpoints de leitura daqui
//! antes de gravar referências externas.

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
    let professores_routes = Router::new()
        .route(
            "/",
            post(handlers::professores::create_professor)
                .get(handlers::professores::get_all_professores),
        )
        .route(
            "/{id}",
            get(handlers::professores::get_professor)
                .put(handlers::professores::update_professor)
                .delete(handlers::professores::delete_professor),
        );

    let turmas_routes = Router::new()
        .route(
            "/",
            post(handlers::turmas::create_turma).get(handlers::turmas::get_all_turmas),
        )
        .route(
            "/{id}",
            get(handlers::turmas::get_turma)
                .put(handlers::turmas::update_turma)
                .delete(handlers::turmas::delete_turma),
        );

    let alunos_routes = Router::new()
        .route(
            "/",
            post(handlers::alunos::create_aluno).get(handlers::alunos::get_all_alunos),
        )
        .route(
            "/{id}",
            get(handlers::alunos::get_aluno)
                .put(handlers::alunos::update_aluno)
                .delete(handlers::alunos::delete_aluno),
        );

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/professores", professores_routes)
        .nest("/turmas", turmas_routes)
        .nest("/alunos", alunos_routes)
        .with_state(app_state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", docs::ApiDoc::openapi()))
}

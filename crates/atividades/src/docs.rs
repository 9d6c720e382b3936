// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Atividades ---
        handlers::atividades::create_atividade,
        handlers::atividades::get_all_atividades,
        handlers::atividades::get_atividade,
        handlers::atividades::get_notas_da_atividade,
        handlers::atividades::update_atividade,
        handlers::atividades::delete_atividade,

        // --- Notas ---
        handlers::notas::create_nota,
        handlers::notas::get_all_notas,
        handlers::notas::get_nota,
        handlers::notas::update_nota,
        handlers::notas::delete_nota,
    ),
    components(
        schemas(
            models::Atividade,
            models::Nota,
            models::UpdateAtividadePayload,
            models::UpdateNotaPayload,
            handlers::atividades::CreateAtividadePayload,
            handlers::notas::CreateNotaPayload,
        )
    ),
    tags(
        (name = "Atividades", description = "Atividades avaliativas vinculadas a turmas do Gerenciamento"),
        (name = "Notas", description = "Notas dos alunos por atividade")
    )
)]
pub struct ApiDoc;

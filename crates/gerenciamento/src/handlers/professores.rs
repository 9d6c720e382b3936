// src/handlers/professores.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::UpdateProfessorPayload,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProfessorPayload {
    #[validate(
        required(message = "O campo 'nome' é obrigatório."),
        length(min = 1, message = "O nome não pode ser vazio.")
    )]
    #[schema(example = "Carlos Pereira")]
    pub nome: Option<String>,

    pub idade: Option<i64>,

    #[schema(example = "Matemática")]
    pub materia: Option<String>,

    pub observacoes: Option<String>,
}

#[utoipa::path(post, path = "/professores", tag = "Professores",
    request_body = CreateProfessorPayload,
    responses(
        (status = 201, description = "Professor criado", body = crate::models::Professor),
        (status = 400, description = "Campos obrigatórios ausentes ou inválidos")
    )
)]
pub async fn create_professor(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProfessorPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let professor = app_state
        .cadastro_service
        .create_professor(
            payload.nome.as_deref().unwrap(),
            payload.idade,
            payload.materia.as_deref(),
            payload.observacoes.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(professor)))
}

#[utoipa::path(get, path = "/professores", tag = "Professores",
    responses((status = 200, description = "Lista de professores", body = [crate::models::Professor]))
)]
pub async fn get_all_professores(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let professores = app_state.cadastro_service.list_professores().await?;

    Ok((StatusCode::OK, Json(professores)))
}

#[utoipa::path(get, path = "/professores/{id}", tag = "Professores",
    params(("id" = i64, Path, description = "ID do professor")),
    responses(
        (status = 200, description = "Dados do professor", body = crate::models::Professor),
        (status = 404, description = "Professor não encontrado")
    )
)]
pub async fn get_professor(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let professor = app_state.cadastro_service.get_professor(id).await?;

    Ok((StatusCode::OK, Json(professor)))
}

#[utoipa::path(put, path = "/professores/{id}", tag = "Professores",
    params(("id" = i64, Path, description = "ID do professor")),
    request_body = UpdateProfessorPayload,
    responses(
        (status = 200, description = "Professor atualizado", body = crate::models::Professor),
        (status = 404, description = "Professor não encontrado")
    )
)]
pub async fn update_professor(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProfessorPayload>,
) -> Result<impl IntoResponse, AppError> {
    let professor = app_state
        .cadastro_service
        .update_professor(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(professor)))
}

#[utoipa::path(delete, path = "/professores/{id}", tag = "Professores",
    params(("id" = i64, Path, description = "ID do professor")),
    responses(
        (status = 200, description = "Professor removido, junto com as turmas e alunos dele"),
        (status = 404, description = "Professor não encontrado")
    )
)]
pub async fn delete_professor(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cadastro_service.delete_professor(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "mensagem": "Professor removido com sucesso" })),
    ))
}

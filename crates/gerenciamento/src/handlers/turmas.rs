// src/handlers/turmas.rs

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

use crate::{common::error::AppError, config::AppState, models::UpdateTurmaPayload};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTurmaPayload {
    #[validate(
        required(message = "O campo 'descricao' é obrigatório."),
        length(min = 1, message = "A descrição não pode ser vazia.")
    )]
    #[schema(example = "Turma A")]
    pub descricao: Option<String>,

    /// Turmas nascem ativas quando o campo não vem no payload.
    pub ativo: Option<bool>,

    #[validate(required(message = "O campo 'professor_id' é obrigatório."))]
    #[schema(example = 1)]
    pub professor_id: Option<i64>,
}

#[utoipa::path(post, path = "/turmas", tag = "Turmas",
    request_body = CreateTurmaPayload,
    responses(
        (status = 201, description = "Turma criada", body = crate::models::Turma),
        (status = 400, description = "Campos obrigatórios ausentes ou inválidos"),
        (status = 404, description = "Professor não encontrado")
    )
)]
pub async fn create_turma(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTurmaPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Presença dos campos é checada antes de qualquer consulta.
    payload.validate()?;

    let turma = app_state
        .cadastro_service
        .create_turma(
            payload.descricao.as_deref().unwrap(),
            payload.ativo.unwrap_or(true),
            payload.professor_id.unwrap(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(turma)))
}

#[utoipa::path(get, path = "/turmas", tag = "Turmas",
    responses((status = 200, description = "Lista de turmas", body = [crate::models::Turma]))
)]
pub async fn get_all_turmas(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let turmas = app_state.cadastro_service.list_turmas().await?;

    Ok((StatusCode::OK, Json(turmas)))
}

#[utoipa::path(get, path = "/turmas/{id}", tag = "Turmas",
    params(("id" = i64, Path, description = "ID da turma")),
    responses(
        (status = 200, description = "Dados da turma", body = crate::models::Turma),
        (status = 404, description = "Turma não encontrada")
    )
)]
pub async fn get_turma(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let turma = app_state.cadastro_service.get_turma(id).await?;

    Ok((StatusCode::OK, Json(turma)))
}

#[utoipa::path(put, path = "/turmas/{id}", tag = "Turmas",
    params(("id" = i64, Path, description = "ID da turma")),
    request_body = UpdateTurmaPayload,
    responses(
        (status = 200, description = "Turma atualizada", body = crate::models::Turma),
        (status = 404, description = "Turma ou professor não encontrados")
    )
)]
pub async fn update_turma(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTurmaPayload>,
) -> Result<impl IntoResponse, AppError> {
    let turma = app_state.cadastro_service.update_turma(id, payload).await?;

    Ok((StatusCode::OK, Json(turma)))
}

#[utoipa::path(delete, path = "/turmas/{id}", tag = "Turmas",
    params(("id" = i64, Path, description = "ID da turma")),
    responses(
        (status = 200, description = "Turma removida, junto com os alunos dela"),
        (status = 404, description = "Turma não encontrada")
    )
)]
pub async fn delete_turma(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cadastro_service.delete_turma(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "mensagem": "Turma removida com sucesso" })),
    ))
}

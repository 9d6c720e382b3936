// src/handlers/notas.rs

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

use crate::{common::error::AppError, config::AppState, models::UpdateNotaPayload};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNotaPayload {
    #[validate(required(message = "O campo 'nota' é obrigatório."))]
    #[schema(example = 8.5)]
    pub nota: Option<f64>,

    #[validate(required(message = "O campo 'aluno_id' é obrigatório."))]
    #[schema(example = 1)]
    pub aluno_id: Option<i64>,

    #[validate(required(message = "O campo 'atividade_id' é obrigatório."))]
    #[schema(example = 1)]
    pub atividade_id: Option<i64>,
}

#[utoipa::path(post, path = "/notas", tag = "Notas",
    request_body = CreateNotaPayload,
    responses(
        (status = 201, description = "Nota criada", body = crate::models::Nota),
        (status = 400, description = "Campos obrigatórios ausentes ou inválidos"),
        (status = 404, description = "Atividade ou aluno não encontrados")
    )
)]
pub async fn create_nota(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateNotaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let nota = app_state
        .atividade_service
        .create_nota(
            payload.nota.unwrap(),
            payload.aluno_id.unwrap(),
            payload.atividade_id.unwrap(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(nota)))
}

#[utoipa::path(get, path = "/notas", tag = "Notas",
    responses((status = 200, description = "Lista de notas", body = [crate::models::Nota]))
)]
pub async fn get_all_notas(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let notas = app_state.atividade_service.list_notas().await?;

    Ok((StatusCode::OK, Json(notas)))
}

#[utoipa::path(get, path = "/notas/{id}", tag = "Notas",
    params(("id" = i64, Path, description = "ID da nota")),
    responses(
        (status = 200, description = "Dados da nota", body = crate::models::Nota),
        (status = 404, description = "Nota não encontrada")
    )
)]
pub async fn get_nota(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let nota = app_state.atividade_service.get_nota(id).await?;

    Ok((StatusCode::OK, Json(nota)))
}

#[utoipa::path(put, path = "/notas/{id}", tag = "Notas",
    params(("id" = i64, Path, description = "ID da nota")),
    request_body = UpdateNotaPayload,
    responses(
        (status = 200, description = "Nota atualizada", body = crate::models::Nota),
        (status = 404, description = "Nota, atividade ou aluno não encontrados")
    )
)]
pub async fn update_nota(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateNotaPayload>,
) -> Result<impl IntoResponse, AppError> {
    let nota = app_state.atividade_service.update_nota(id, payload).await?;

    Ok((StatusCode::OK, Json(nota)))
}

#[utoipa::path(delete, path = "/notas/{id}", tag = "Notas",
    params(("id" = i64, Path, description = "ID da nota")),
    responses(
        (status = 200, description = "Nota removida"),
        (status = 404, description = "Nota não encontrada")
    )
)]
pub async fn delete_nota(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.atividade_service.delete_nota(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "mensagem": "Nota removida com sucesso" })),
    ))
}

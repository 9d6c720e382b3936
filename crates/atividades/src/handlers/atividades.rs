// src/handlers/atividades.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::UpdateAtividadePayload};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAtividadePayload {
    #[validate(
        required(message = "O campo 'nome_atividade' é obrigatório."),
        length(min = 1, message = "O nome da atividade não pode ser vazio.")
    )]
    #[schema(example = "Prova de Matemática - Capítulo 3")]
    pub nome_atividade: Option<String>,

    pub descricao: Option<String>,

    pub peso_porcento: Option<i64>,

    #[schema(value_type = Option<String>, example = "2025-11-05")]
    pub data_entrega: Option<NaiveDate>,

    #[validate(required(message = "O campo 'turma_id' é obrigatório."))]
    #[schema(example = 2)]
    pub turma_id: Option<i64>,

    #[validate(required(message = "O campo 'professor_id' é obrigatório."))]
    #[schema(example = 1)]
    pub professor_id: Option<i64>,
}

#[utoipa::path(post, path = "/atividades", tag = "Atividades",
    request_body = CreateAtividadePayload,
    responses(
        (status = 201, description = "Atividade criada", body = crate::models::Atividade),
        (status = 400, description = "Campos obrigatórios ausentes ou inválidos"),
        (status = 404, description = "Professor ou turma não encontrados no Gerenciamento")
    )
)]
pub async fn create_atividade(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateAtividadePayload>,
) -> Result<impl IntoResponse, AppError> {
    // Presença dos campos é checada antes de qualquer chamada remota.
    payload.validate()?;

    let atividade = app_state
        .atividade_service
        .create_atividade(
            payload.nome_atividade.as_deref().unwrap(),
            payload.descricao.as_deref(),
            payload.peso_porcento,
            payload.data_entrega,
            payload.turma_id.unwrap(),
            payload.professor_id.unwrap(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(atividade)))
}

#[utoipa::path(get, path = "/atividades", tag = "Atividades",
    responses((status = 200, description = "Lista de atividades", body = [crate::models::Atividade]))
)]
pub async fn get_all_atividades(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let atividades = app_state.atividade_service.list_atividades().await?;

    Ok((StatusCode::OK, Json(atividades)))
}

#[utoipa::path(get, path = "/atividades/{id}", tag = "Atividades",
    params(("id" = i64, Path, description = "ID da atividade")),
    responses(
        (status = 200, description = "Dados da atividade", body = crate::models::Atividade),
        (status = 404, description = "Atividade não encontrada")
    )
)]
pub async fn get_atividade(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let atividade = app_state.atividade_service.get_atividade(id).await?;

    Ok((StatusCode::OK, Json(atividade)))
}

#[utoipa::path(get, path = "/atividades/{id}/notas", tag = "Atividades",
    params(("id" = i64, Path, description = "ID da atividade")),
    responses(
        (status = 200, description = "Notas da atividade", body = [crate::models::Nota]),
        (status = 404, description = "Atividade não encontrada")
    )
)]
pub async fn get_notas_da_atividade(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let notas = app_state
        .atividade_service
        .list_notas_da_atividade(id)
        .await?;

    Ok((StatusCode::OK, Json(notas)))
}

#[utoipa::path(put, path = "/atividades/{id}", tag = "Atividades",
    params(("id" = i64, Path, description = "ID da atividade")),
    request_body = UpdateAtividadePayload,
    responses(
        (status = 200, description = "Atividade atualizada", body = crate::models::Atividade),
        (status = 404, description = "Atividade, professor ou turma não encontrados")
    )
)]
pub async fn update_atividade(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAtividadePayload>,
) -> Result<impl IntoResponse, AppError> {
    let atividade = app_state
        .atividade_service
        .update_atividade(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(atividade)))
}

#[utoipa::path(delete, path = "/atividades/{id}", tag = "Atividades",
    params(("id" = i64, Path, description = "ID da atividade")),
    responses(
        (status = 200, description = "Atividade removida, junto com as notas dela"),
        (status = 404, description = "Atividade não encontrada")
    )
)]
pub async fn delete_atividade(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.atividade_service.delete_atividade(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "mensagem": "Atividade removida com sucesso" })),
    ))
}

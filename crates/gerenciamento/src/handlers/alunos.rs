// src/handlers/alunos.rs

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

use crate::{common::error::AppError, config::AppState, models::UpdateAlunoPayload};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAlunoPayload {
    #[validate(
        required(message = "O campo 'nome' é obrigatório."),
        length(min = 1, message = "O nome não pode ser vazio.")
    )]
    #[schema(example = "João da Silva")]
    pub nome: Option<String>,

    pub idade: Option<i64>,

    #[schema(value_type = Option<String>, example = "2008-03-21")]
    pub data_nascimento: Option<NaiveDate>,

    #[validate(required(message = "O campo 'turma_id' é obrigatório."))]
    #[schema(example = 1)]
    pub turma_id: Option<i64>,

    pub nota_semestre1: Option<f64>,
    pub nota_semestre2: Option<f64>,
}

#[utoipa::path(post, path = "/alunos", tag = "Alunos",
    request_body = CreateAlunoPayload,
    responses(
        (status = 201, description = "Aluno criado", body = crate::models::Aluno),
        (status = 400, description = "Campos obrigatórios ausentes ou inválidos"),
        (status = 404, description = "Turma não encontrada")
    )
)]
pub async fn create_aluno(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateAlunoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let aluno = app_state
        .cadastro_service
        .create_aluno(
            payload.nome.as_deref().unwrap(),
            payload.idade,
            payload.data_nascimento,
            payload.turma_id.unwrap(),
            payload.nota_semestre1,
            payload.nota_semestre2,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(aluno)))
}

#[utoipa::path(get, path = "/alunos", tag = "Alunos",
    responses((status = 200, description = "Lista de alunos", body = [crate::models::Aluno]))
)]
pub async fn get_all_alunos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let alunos = app_state.cadastro_service.list_alunos().await?;

    Ok((StatusCode::OK, Json(alunos)))
}

#[utoipa::path(get, path = "/alunos/{id}", tag = "Alunos",
    params(("id" = i64, Path, description = "ID do aluno")),
    responses(
        (status = 200, description = "Dados do aluno", body = crate::models::Aluno),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn get_aluno(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let aluno = app_state.cadastro_service.get_aluno(id).await?;

    Ok((StatusCode::OK, Json(aluno)))
}

#[utoipa::path(put, path = "/alunos/{id}", tag = "Alunos",
    params(("id" = i64, Path, description = "ID do aluno")),
    request_body = UpdateAlunoPayload,
    responses(
        (status = 200, description = "Aluno atualizado", body = crate::models::Aluno),
        (status = 404, description = "Aluno ou turma não encontrados")
    )
)]
pub async fn update_aluno(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAlunoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let aluno = app_state.cadastro_service.update_aluno(id, payload).await?;

    Ok((StatusCode::OK, Json(aluno)))
}

#[utoipa::path(delete, path = "/alunos/{id}", tag = "Alunos",
    params(("id" = i64, Path, description = "ID do aluno")),
    responses(
        (status = 200, description = "Aluno removido"),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn delete_aluno(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cadastro_service.delete_aluno(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "mensagem": "Aluno removido com sucesso" })),
    ))
}

// src/handlers/reservas.rs

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

use crate::{common::error::AppError, config::AppState, models::UpdateReservaPayload};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservaPayload {
    #[validate(required(message = "O campo 'num_sala' é obrigatório."))]
    #[schema(example = 101)]
    pub num_sala: Option<i64>,

    /// Sala comum quando o campo não vem no payload.
    pub lab: Option<bool>,

    /// Data da reserva em formato AAAA-MM-DD.
    #[validate(required(message = "O campo 'data' é obrigatório."))]
    #[schema(example = "2025-11-05")]
    pub data: Option<String>,

    #[validate(required(message = "O campo 'turma_id' é obrigatório."))]
    #[schema(example = 1)]
    pub turma_id: Option<i64>,
}

#[utoipa::path(post, path = "/reservas", tag = "Reservas",
    request_body = CreateReservaPayload,
    responses(
        (status = 201, description = "Reserva criada", body = crate::models::Reserva),
        (status = 400, description = "Campos obrigatórios ausentes ou data fora do formato AAAA-MM-DD"),
        (status = 404, description = "Turma não encontrada no Gerenciamento")
    )
)]
pub async fn create_reserva(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateReservaPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Presença dos campos é checada antes de qualquer chamada remota.
    payload.validate()?;

    let reserva = app_state
        .reserva_service
        .create_reserva(
            payload.num_sala.unwrap(),
            payload.lab.unwrap_or(false),
            payload.data.as_deref().unwrap(),
            payload.turma_id.unwrap(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(reserva)))
}

#[utoipa::path(get, path = "/reservas", tag = "Reservas",
    responses((status = 200, description = "Lista de reservas", body = [crate::models::Reserva]))
)]
pub async fn get_all_reservas(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let reservas = app_state.reserva_service.list_reservas().await?;

    Ok((StatusCode::OK, Json(reservas)))
}

#[utoipa::path(get, path = "/reservas/{id}", tag = "Reservas",
    params(("id" = i64, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Dados da reserva", body = crate::models::Reserva),
        (status = 404, description = "Reserva não encontrada")
    )
)]
pub async fn get_reserva(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let reserva = app_state.reserva_service.get_reserva(id).await?;

    Ok((StatusCode::OK, Json(reserva)))
}

#[utoipa::path(put, path = "/reservas/{id}", tag = "Reservas",
    params(("id" = i64, Path, description = "ID da reserva")),
    request_body = UpdateReservaPayload,
    responses(
        (status = 200, description = "Reserva atualizada", body = crate::models::Reserva),
        (status = 400, description = "Data fora do formato AAAA-MM-DD"),
        (status = 404, description = "Reserva ou turma não encontradas")
    )
)]
pub async fn update_reserva(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateReservaPayload>,
) -> Result<impl IntoResponse, AppError> {
    let reserva = app_state.reserva_service.update_reserva(id, payload).await?;

    Ok((StatusCode::OK, Json(reserva)))
}

#[utoipa::path(delete, path = "/reservas/{id}", tag = "Reservas",
    params(("id" = i64, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Reserva removida"),
        (status = 404, description = "Reserva não encontrada")
    )
)]
pub async fn delete_reserva(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.reserva_service.delete_reserva(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "mensagem": "Reserva removida com sucesso" })),
    ))
}

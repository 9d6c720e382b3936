// src/models/reserva.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Reserva de uma sala (ou laboratório) para uma turma do Gerenciamento.
///
/// `turma_id` é validado por HTTP só no momento da escrita; se o
/// Gerenciamento deletar a turma depois, a reserva fica apontando para um
/// id que não existe mais.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reserva {
    pub id: i64,

    #[schema(example = 101)]
    pub num_sala: i64,

    /// Indica se a sala reservada é um laboratório.
    pub lab: bool,

    #[schema(value_type = String, example = "2025-11-05")]
    pub data: NaiveDate,

    #[schema(example = 1)]
    pub turma_id: i64,
}

/// Atualização parcial; `data` chega como texto e só é aceita em
/// formato AAAA-MM-DD.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateReservaPayload {
    pub num_sala: Option<i64>,
    pub lab: Option<bool>,
    #[schema(example = "2025-11-05")]
    pub data: Option<String>,
    /// Se presente, revalidado no Gerenciamento.
    pub turma_id: Option<i64>,
}

// src/models/nota.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Nota de um aluno em uma atividade.
///
/// `atividade_id` é referência local (cai em cascata com a atividade);
/// `aluno_id` pertence ao Gerenciamento e é validado por HTTP na escrita.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Nota {
    pub id: i64,

    #[schema(example = 8.5)]
    pub nota: f64,

    #[schema(example = 1)]
    pub aluno_id: i64,

    #[schema(example = 1)]
    pub atividade_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNotaPayload {
    pub nota: Option<f64>,
    /// Se presente, revalidado no Gerenciamento.
    pub aluno_id: Option<i64>,
    /// Se presente, precisa apontar para uma atividade local existente.
    pub atividade_id: Option<i64>,
}

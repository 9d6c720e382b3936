// src/models/turma.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Turma vinculada a um professor existente.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Turma {
    pub id: i64,

    #[schema(example = "Turma A")]
    pub descricao: String,

    /// Criada como ativa por padrão.
    pub ativo: bool,

    #[schema(example = 1)]
    pub professor_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTurmaPayload {
    pub descricao: Option<String>,
    pub ativo: Option<bool>,
    /// Se presente, precisa apontar para um professor existente.
    pub professor_id: Option<i64>,
}

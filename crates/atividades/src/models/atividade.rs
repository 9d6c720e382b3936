// src/models/atividade.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Atividade avaliativa vinculada a uma turma e a um professor do
/// Gerenciamento.
///
/// As duas referências são validadas por HTTP só no momento da escrita: se o
/// Gerenciamento deletar a turma ou o professor depois, os ids gravados aqui
/// ficam pendentes e ninguém avisa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Atividade {
    pub id: i64,

    #[schema(example = "Prova de Matemática - Capítulo 3")]
    pub nome_atividade: String,

    pub descricao: Option<String>,

    /// Peso da atividade na nota final, em porcentagem.
    #[schema(example = 30)]
    pub peso_porcento: Option<i64>,

    #[schema(value_type = Option<String>, example = "2025-11-05")]
    pub data_entrega: Option<NaiveDate>,

    #[schema(example = 2)]
    pub turma_id: i64,

    #[schema(example = 1)]
    pub professor_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAtividadePayload {
    pub nome_atividade: Option<String>,
    pub descricao: Option<String>,
    pub peso_porcento: Option<i64>,
    #[schema(value_type = Option<String>, example = "2025-11-05")]
    pub data_entrega: Option<NaiveDate>,
    /// Se presente, revalidado no Gerenciamento.
    pub turma_id: Option<i64>,
    /// Se presente, revalidado no Gerenciamento.
    pub professor_id: Option<i64>,
}

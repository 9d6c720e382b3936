// src/models/professor.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Professor cadastrado no Gerenciamento.
///
/// Deletar um professor remove também as turmas dele e, por consequência,
/// os alunos dessas turmas. Referências externas (Atividades) não são
/// avisadas e podem ficar pendentes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Professor {
    pub id: i64,

    #[schema(example = "Carlos Pereira")]
    pub nome: String,

    #[schema(example = 42)]
    pub idade: Option<i64>,

    #[schema(example = "Matemática")]
    pub materia: Option<String>,

    pub observacoes: Option<String>,
}

// Atualização parcial: só os campos presentes são alterados.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfessorPayload {
    pub nome: Option<String>,
    pub idade: Option<i64>,
    pub materia: Option<String>,
    pub observacoes: Option<String>,
}

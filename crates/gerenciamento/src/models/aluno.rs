// src/models/aluno.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Aluno matriculado em uma turma.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Aluno {
    pub id: i64,

    #[schema(example = "João da Silva")]
    pub nome: String,

    pub idade: Option<i64>,

    #[schema(value_type = Option<String>, example = "2008-03-21")]
    pub data_nascimento: Option<NaiveDate>,

    #[schema(example = 1)]
    pub turma_id: i64,

    pub nota_semestre1: Option<f64>,
    pub nota_semestre2: Option<f64>,

    /// Média aritmética das duas notas semestrais. Calculada pelo serviço;
    /// fica vazia enquanto alguma das duas notas não existir.
    pub media_final: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAlunoPayload {
    pub nome: Option<String>,
    pub idade: Option<i64>,
    #[schema(value_type = Option<String>, example = "2008-03-21")]
    pub data_nascimento: Option<NaiveDate>,
    /// Se presente, precisa apontar para uma turma existente.
    pub turma_id: Option<i64>,
    pub nota_semestre1: Option<f64>,
    pub nota_semestre2: Option<f64>,
}

/// Média final do aluno: média aritmética dos dois semestres quando os dois
/// existem; caso contrário fica indefinida.
pub fn media_final(nota_semestre1: Option<f64>, nota_semestre2: Option<f64>) -> Option<f64> {
    match (nota_semestre1, nota_semestre2) {
        (Some(n1), Some(n2)) => Some((n1 + n2) / 2.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::media_final;

    #[test]
    fn media_final_das_duas_notas() {
        assert_eq!(media_final(Some(8.5), Some(9.0)), Some(8.75));
    }

    #[test]
    fn media_final_indefinida_com_nota_faltando() {
        assert_eq!(media_final(Some(8.5), None), None);
        assert_eq!(media_final(None, Some(9.0)), None);
        assert_eq!(media_final(None, None), None);
    }
}

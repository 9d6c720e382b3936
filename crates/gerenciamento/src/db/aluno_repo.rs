// src/db/aluno_repo.rs

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::{common::error::AppError, models::Aluno};

#[derive(Clone)]
pub struct AlunoRepository {
    pool: SqlitePool,
}

impl AlunoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        nome: &str,
        idade: Option<i64>,
        data_nascimento: Option<NaiveDate>,
        turma_id: i64,
        nota_semestre1: Option<f64>,
        nota_semestre2: Option<f64>,
        media_final: Option<f64>,
    ) -> Result<Aluno, AppError> {
        let aluno = sqlx::query_as::<_, Aluno>(
            r#"
            INSERT INTO alunos (
                nome, idade, data_nascimento, turma_id,
                nota_semestre1, nota_semestre2, media_final
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id, nome, idade, data_nascimento, turma_id,
                nota_semestre1, nota_semestre2, media_final
            "#,
        )
        .bind(nome)
        .bind(idade)
        .bind(data_nascimento)
        .bind(turma_id)
        .bind(nota_semestre1)
        .bind(nota_semestre2)
        .bind(media_final)
        .fetch_one(&self.pool)
        .await?;

        Ok(aluno)
    }

    pub async fn find_all(&self) -> Result<Vec<Aluno>, AppError> {
        let alunos = sqlx::query_as::<_, Aluno>(
            r#"
            SELECT
                id, nome, idade, data_nascimento, turma_id,
                nota_semestre1, nota_semestre2, media_final
            FROM alunos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(alunos)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Aluno>, AppError> {
        let aluno = sqlx::query_as::<_, Aluno>(
            r#"
            SELECT
                id, nome, idade, data_nascimento, turma_id,
                nota_semestre1, nota_semestre2, media_final
            FROM alunos
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(aluno)
    }

    pub async fn update(&self, aluno: &Aluno) -> Result<Aluno, AppError> {
        let atualizado = sqlx::query_as::<_, Aluno>(
            r#"
            UPDATE alunos
            SET nome = ?, idade = ?, data_nascimento = ?, turma_id = ?,
                nota_semestre1 = ?, nota_semestre2 = ?, media_final = ?
            WHERE id = ?
            RETURNING
                id, nome, idade, data_nascimento, turma_id,
                nota_semestre1, nota_semestre2, media_final
            "#,
        )
        .bind(&aluno.nome)
        .bind(aluno.idade)
        .bind(aluno.data_nascimento)
        .bind(aluno.turma_id)
        .bind(aluno.nota_semestre1)
        .bind(aluno.nota_semestre2)
        .bind(aluno.media_final)
        .bind(aluno.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(atualizado)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM alunos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

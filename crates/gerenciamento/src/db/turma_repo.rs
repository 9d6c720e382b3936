// src/db/turma_repo.rs

use sqlx::SqlitePool;

use crate::{common::error::AppError, models::Turma};

#[derive(Clone)]
pub struct TurmaRepository {
    pool: SqlitePool,
}

impl TurmaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        descricao: &str,
        ativo: bool,
        professor_id: i64,
    ) -> Result<Turma, AppError> {
        let turma = sqlx::query_as::<_, Turma>(
            r#"
            INSERT INTO turmas (descricao, ativo, professor_id)
            VALUES (?, ?, ?)
            RETURNING id, descricao, ativo, professor_id
            "#,
        )
        .bind(descricao)
        .bind(ativo)
        .bind(professor_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(turma)
    }

    pub async fn find_all(&self) -> Result<Vec<Turma>, AppError> {
        let turmas = sqlx::query_as::<_, Turma>(
            r#"
            SELECT id, descricao, ativo, professor_id
            FROM turmas
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(turmas)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Turma>, AppError> {
        let turma = sqlx::query_as::<_, Turma>(
            r#"
            SELECT id, descricao, ativo, professor_id
            FROM turmas
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(turma)
    }

    pub async fn update(&self, turma: &Turma) -> Result<Turma, AppError> {
        let atualizada = sqlx::query_as::<_, Turma>(
            r#"
            UPDATE turmas
            SET descricao = ?, ativo = ?, professor_id = ?
            WHERE id = ?
            RETURNING id, descricao, ativo, professor_id
            "#,
        )
        .bind(&turma.descricao)
        .bind(turma.ativo)
        .bind(turma.professor_id)
        .bind(turma.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(atualizada)
    }

    /// Remove a turma e os alunos dela na mesma transação.
    pub async fn delete_cascade(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM alunos WHERE turma_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM turmas WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

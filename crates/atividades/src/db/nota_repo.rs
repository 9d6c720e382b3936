// src/db/nota_repo.rs

use sqlx::SqlitePool;

use crate::{common::error::AppError, models::Nota};

#[derive(Clone)]
pub struct NotaRepository {
    pool: SqlitePool,
}

impl NotaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nota: f64,
        aluno_id: i64,
        atividade_id: i64,
    ) -> Result<Nota, AppError> {
        let registro = sqlx::query_as::<_, Nota>(
            r#"
            INSERT INTO notas (nota, aluno_id, atividade_id)
            VALUES (?, ?, ?)
            RETURNING id, nota, aluno_id, atividade_id
            "#,
        )
        .bind(nota)
        .bind(aluno_id)
        .bind(atividade_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(registro)
    }

    pub async fn find_all(&self) -> Result<Vec<Nota>, AppError> {
        let notas = sqlx::query_as::<_, Nota>(
            r#"
            SELECT id, nota, aluno_id, atividade_id
            FROM notas
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notas)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Nota>, AppError> {
        let nota = sqlx::query_as::<_, Nota>(
            r#"
            SELECT id, nota, aluno_id, atividade_id
            FROM notas
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(nota)
    }

    pub async fn find_by_atividade(&self, atividade_id: i64) -> Result<Vec<Nota>, AppError> {
        let notas = sqlx::query_as::<_, Nota>(
            r#"
            SELECT id, nota, aluno_id, atividade_id
            FROM notas
            WHERE atividade_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(atividade_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notas)
    }

    pub async fn update(&self, nota: &Nota) -> Result<Nota, AppError> {
        let atualizada = sqlx::query_as::<_, Nota>(
            r#"
            UPDATE notas
            SET nota = ?, aluno_id = ?, atividade_id = ?
            WHERE id = ?
            RETURNING id, nota, aluno_id, atividade_id
            "#,
        )
        .bind(nota.nota)
        .bind(nota.aluno_id)
        .bind(nota.atividade_id)
        .bind(nota.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(atualizada)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM notas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// src/db/atividade_repo.rs

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::{common::error::AppError, models::Atividade};

#[derive(Clone)]
pub struct AtividadeRepository {
    pool: SqlitePool,
}

impl AtividadeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nome_atividade: &str,
        descricao: Option<&str>,
        peso_porcento: Option<i64>,
        data_entrega: Option<NaiveDate>,
        turma_id: i64,
        professor_id: i64,
    ) -> Result<Atividade, AppError> {
        let atividade = sqlx::query_as::<_, Atividade>(
            r#"
            INSERT INTO atividades (
                nome_atividade, descricao, peso_porcento, data_entrega,
                turma_id, professor_id
            )
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING
                id, nome_atividade, descricao, peso_porcento, data_entrega,
                turma_id, professor_id
            "#,
        )
        .bind(nome_atividade)
        .bind(descricao)
        .bind(peso_porcento)
        .bind(data_entrega)
        .bind(turma_id)
        .bind(professor_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(atividade)
    }

    pub async fn find_all(&self) -> Result<Vec<Atividade>, AppError> {
        let atividades = sqlx::query_as::<_, Atividade>(
            r#"
            SELECT
                id, nome_atividade, descricao, peso_porcento, data_entrega,
                turma_id, professor_id
            FROM atividades
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(atividades)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Atividade>, AppError> {
        let atividade = sqlx::query_as::<_, Atividade>(
            r#"
            SELECT
                id, nome_atividade, descricao, peso_porcento, data_entrega,
                turma_id, professor_id
            FROM atividades
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(atividade)
    }

    pub async fn update(&self, atividade: &Atividade) -> Result<Atividade, AppError> {
        let atualizada = sqlx::query_as::<_, Atividade>(
            r#"
            UPDATE atividades
            SET nome_atividade = ?, descricao = ?, peso_porcento = ?,
                data_entrega = ?, turma_id = ?, professor_id = ?
            WHERE id = ?
            RETURNING
                id, nome_atividade, descricao, peso_porcento, data_entrega,
                turma_id, professor_id
            "#,
        )
        .bind(&atividade.nome_atividade)
        .bind(&atividade.descricao)
        .bind(atividade.peso_porcento)
        .bind(atividade.data_entrega)
        .bind(atividade.turma_id)
        .bind(atividade.professor_id)
        .bind(atividade.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(atualizada)
    }

    /// Remove a atividade e as notas dela na mesma transação.
    pub async fn delete_cascade(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM notas WHERE atividade_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM atividades WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

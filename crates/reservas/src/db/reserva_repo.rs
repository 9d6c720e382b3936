// src/db/reserva_repo.rs

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::{common::error::AppError, models::Reserva};

#[derive(Clone)]
pub struct ReservaRepository {
    pool: SqlitePool,
}

impl ReservaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        num_sala: i64,
        lab: bool,
        data: NaiveDate,
        turma_id: i64,
    ) -> Result<Reserva, AppError> {
        let reserva = sqlx::query_as::<_, Reserva>(
            r#"
            INSERT INTO reservas (num_sala, lab, data, turma_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, num_sala, lab, data, turma_id
            "#,
        )
        .bind(num_sala)
        .bind(lab)
        .bind(data)
        .bind(turma_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(reserva)
    }

    pub async fn find_all(&self) -> Result<Vec<Reserva>, AppError> {
        let reservas = sqlx::query_as::<_, Reserva>(
            r#"
            SELECT id, num_sala, lab, data, turma_id
            FROM reservas
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reservas)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Reserva>, AppError> {
        let reserva = sqlx::query_as::<_, Reserva>(
            r#"
            SELECT id, num_sala, lab, data, turma_id
            FROM reservas
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reserva)
    }

    pub async fn update(&self, reserva: &Reserva) -> Result<Reserva, AppError> {
        let atualizada = sqlx::query_as::<_, Reserva>(
            r#"
            UPDATE reservas
            SET num_sala = ?, lab = ?, data = ?, turma_id = ?
            WHERE id = ?
            RETURNING id, num_sala, lab, data, turma_id
            "#,
        )
        .bind(reserva.num_sala)
        .bind(reserva.lab)
        .bind(reserva.data)
        .bind(reserva.turma_id)
        .bind(reserva.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(atualizada)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM reservas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

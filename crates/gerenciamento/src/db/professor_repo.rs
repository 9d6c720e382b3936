// src/db/professor_repo.rs

use sqlx::SqlitePool;

use crate::{common::error::AppError, models::Professor};

#[derive(Clone)]
pub struct ProfessorRepository {
    pool: SqlitePool,
}

impl ProfessorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nome: &str,
        idade: Option<i64>,
        materia: Option<&str>,
        observacoes: Option<&str>,
    ) -> Result<Professor, AppError> {
        let professor = sqlx::query_as::<_, Professor>(
            r#"
            INSERT INTO professores (nome, idade, materia, observacoes)
            VALUES (?, ?, ?, ?)
            RETURNING id, nome, idade, materia, observacoes
            "#,
        )
        .bind(nome)
        .bind(idade)
        .bind(materia)
        .bind(observacoes)
        .fetch_one(&self.pool)
        .await?;

        Ok(professor)
    }

    pub async fn find_all(&self) -> Result<Vec<Professor>, AppError> {
        let professores = sqlx::query_as::<_, Professor>(
            r#"
            SELECT id, nome, idade, materia, observacoes
            FROM professores
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(professores)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Professor>, AppError> {
        let professor = sqlx::query_as::<_, Professor>(
            r#"
            SELECT id, nome, idade, materia, observacoes
            FROM professores
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(professor)
    }

    /// Grava a linha inteira; o chamador já resolveu a mesclagem dos campos.
    pub async fn update(&self, professor: &Professor) -> Result<Professor, AppError> {
        let atualizado = sqlx::query_as::<_, Professor>(
            r#"
            UPDATE professores
            SET nome = ?, idade = ?, materia = ?, observacoes = ?
            WHERE id = ?
            RETURNING id, nome, idade, materia, observacoes
            "#,
        )
        .bind(&professor.nome)
        .bind(professor.idade)
        .bind(&professor.materia)
        .bind(&professor.observacoes)
        .bind(professor.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(atualizado)
    }

    /// Remove o professor e tudo que ele possui localmente: primeiro os
    /// alunos das turmas dele, depois as turmas, por último o professor.
    pub async fn delete_cascade(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM alunos
            WHERE turma_id IN (SELECT id FROM turmas WHERE professor_id = ?)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM turmas WHERE professor_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM professores WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

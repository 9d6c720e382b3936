// src/config.rs

use std::{env, time::Duration};

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::{
    db::{AlunoRepository, ProfessorRepository, TurmaRepository},
    services::CadastroService,
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub cadastro_service: CadastroService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // Cada serviço é dono do próprio banco.
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:gerenciamento.db?mode=rwc".to_string());

        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    /// Monta o grafo de dependências sobre uma pool já criada.
    /// Usado pelo `new()` e pelos testes de integração.
    pub fn from_pool(db_pool: SqlitePool) -> Self {
        let cadastro_service = CadastroService::new(
            ProfessorRepository::new(db_pool.clone()),
            TurmaRepository::new(db_pool.clone()),
            AlunoRepository::new(db_pool.clone()),
        );

        Self {
            db_pool,
            cadastro_service,
        }
    }
}

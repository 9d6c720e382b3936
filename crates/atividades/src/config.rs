// src/config.rs

use std::{env, sync::Arc, time::Duration};

use gerenciamento_client::{GerenciamentoClient, ValidadorReferencia};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::{
    db::{AtividadeRepository, NotaRepository},
    services::AtividadeService,
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub atividade_service: AtividadeService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // Cada serviço é dono do próprio banco.
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:atividades.db?mode=rwc".to_string());

        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        let validador = GerenciamentoClient::from_env();
        tracing::info!("Validando referências em {}", validador.base_url());

        Ok(Self::from_pool(db_pool, Arc::new(validador)))
    }

    /// Monta o grafo de dependências sobre uma pool e um validador já
    /// criados. Usado pelo `new()` e pelos testes de integração, que injetam
    /// um validador de mentira no lugar do cliente HTTP.
    pub fn from_pool(db_pool: SqlitePool, validador: Arc<dyn ValidadorReferencia>) -> Self {
        let atividade_service = AtividadeService::new(
            AtividadeRepository::new(db_pool.clone()),
            NotaRepository::new(db_pool.clone()),
            validador,
        );

        Self {
            db_pool,
            atividade_service,
        }
    }
}

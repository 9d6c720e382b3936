//! Cliente do serviço de Gerenciamento.
//!
//! Os serviços de Atividades e Reservas guardam ids de professores, turmas e
//! alunos que pertencem ao Gerenciamento. Antes de gravar, cada um consulta o
//! endpoint de leitura correspondente para confirmar que a referência existe.
//! A consulta é uma única tentativa, sem retry e sem cache.

use async_trait::async_trait;

/// Tipos de entidade que o Gerenciamento expõe para consulta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipoReferencia {
    Professor,
    Turma,
    Aluno,
}

impl TipoReferencia {
    /// Nome da coleção na API do Gerenciamento.
    pub fn colecao(&self) -> &'static str {
        match self {
            TipoReferencia::Professor => "professores",
            TipoReferencia::Turma => "turmas",
            TipoReferencia::Aluno => "alunos",
        }
    }
}

/// Capacidade de verificar se uma entidade remota existe.
///
/// A implementação HTTP devolve `true` somente quando o Gerenciamento
/// responde 200. Qualquer outro status ou falha de transporte conta como
/// "não encontrado" — o chamador rejeita a escrita como se a referência
/// fosse inválida, igual ao comportamento do sistema original.
#[async_trait]
pub trait ValidadorReferencia: Send + Sync {
    async fn existe(&self, tipo: TipoReferencia, id: i64) -> bool;
}

/// Cliente HTTP do Gerenciamento.
#[derive(Debug, Clone)]
pub struct GerenciamentoClient {
    base_url: String,
    http: reqwest::Client,
}

/// Endereço padrão do colaborador quando `GERENCIAMENTO_URL` não é definida.
pub const GERENCIAMENTO_URL_PADRAO: &str = "http://gerenciamento:5000";

impl GerenciamentoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Monta o cliente a partir da variável de ambiente `GERENCIAMENTO_URL`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GERENCIAMENTO_URL")
            .unwrap_or_else(|_| GERENCIAMENTO_URL_PADRAO.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_de(&self, tipo: TipoReferencia, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, tipo.colecao(), id)
    }
}

#[async_trait]
impl ValidadorReferencia for GerenciamentoClient {
    async fn existe(&self, tipo: TipoReferencia, id: i64) -> bool {
        let url = self.url_de(tipo, id);

        match self.http.get(&url).send().await {
            Ok(resposta) => {
                let encontrado = resposta.status() == reqwest::StatusCode::OK;
                tracing::debug!("GET {} -> {}", url, resposta.status());
                encontrado
            }
            Err(erro) => {
                // Indisponibilidade do Gerenciamento é tratada como
                // referência inexistente.
                tracing::warn!("Falha ao consultar {}: {}", url, erro);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colecao_mapeia_para_rota_do_gerenciamento() {
        assert_eq!(TipoReferencia::Professor.colecao(), "professores");
        assert_eq!(TipoReferencia::Turma.colecao(), "turmas");
        assert_eq!(TipoReferencia::Aluno.colecao(), "alunos");
    }

    #[test]
    fn url_de_consulta_inclui_colecao_e_id() {
        let client = GerenciamentoClient::new("http://localhost:5000/");
        assert_eq!(
            client.url_de(TipoReferencia::Turma, 7),
            "http://localhost:5000/turmas/7"
        );
    }

    #[tokio::test]
    async fn transporte_indisponivel_conta_como_nao_encontrado() {
        // Porta reservada sem listener: a chamada falha no transporte.
        let client = GerenciamentoClient::new("http://127.0.0.1:9");
        assert!(!client.existe(TipoReferencia::Professor, 1).await);
    }
}

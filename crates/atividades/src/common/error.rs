use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Tipo de erro do serviço, com `thiserror` para melhor ergonomia.
//
// Gerenciamento indisponível aparece para o cliente como a referência não
// encontrada — o serviço não distingue os dois casos, igual ao original.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Professor não encontrado")]
    ProfessorNaoEncontrado,

    #[error("Turma não encontrada")]
    TurmaNaoEncontrada,

    #[error("Aluno não encontrado")]
    AlunoNaoEncontrado,

    #[error("Atividade não encontrada")]
    AtividadeNaoEncontrada,

    #[error("Nota não encontrada")]
    NotaNaoEncontrada,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, mensagem) = match self {
            // Devolve todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut detalhes = std::collections::HashMap::new();
                for (campo, erros_do_campo) in errors.field_errors() {
                    let mensagens: Vec<String> = erros_do_campo
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    detalhes.insert(campo.to_string(), mensagens);
                }
                let body = Json(json!({
                    "erro": "Um ou mais campos são inválidos.",
                    "detalhes": detalhes,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::ProfessorNaoEncontrado => (StatusCode::NOT_FOUND, "Professor não encontrado"),
            AppError::TurmaNaoEncontrada => (StatusCode::NOT_FOUND, "Turma não encontrada"),
            AppError::AlunoNaoEncontrado => (StatusCode::NOT_FOUND, "Aluno não encontrado"),
            AppError::AtividadeNaoEncontrada => {
                (StatusCode::NOT_FOUND, "Atividade não encontrada")
            }
            AppError::NotaNaoEncontrada => (StatusCode::NOT_FOUND, "Nota não encontrada"),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "erro": mensagem }));
        (status, body).into_response()
    }
}

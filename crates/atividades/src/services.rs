pub mod atividade_service;

pub use atividade_service::AtividadeService;

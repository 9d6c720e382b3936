pub mod cadastro_service;

pub use cadastro_service::CadastroService;

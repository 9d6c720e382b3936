pub mod atividade_repo;
pub mod nota_repo;

pub use atividade_repo::AtividadeRepository;
pub use nota_repo::NotaRepository;

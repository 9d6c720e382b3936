pub mod atividades;
pub mod notas;

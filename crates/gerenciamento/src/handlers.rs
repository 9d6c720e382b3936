pub mod alunos;
pub mod professores;
pub mod turmas;

pub mod aluno_repo;
pub mod professor_repo;
pub mod turma_repo;

pub use aluno_repo::AlunoRepository;
pub use professor_repo::ProfessorRepository;
pub use turma_repo::TurmaRepository;

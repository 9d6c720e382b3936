pub mod aluno;
pub mod professor;
pub mod turma;

pub use aluno::{Aluno, UpdateAlunoPayload};
pub use professor::{Professor, UpdateProfessorPayload};
pub use turma::{Turma, UpdateTurmaPayload};

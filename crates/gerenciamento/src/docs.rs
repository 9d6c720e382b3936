// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Professores ---
        handlers::professores::create_professor,
        handlers::professores::get_all_professores,
        handlers::professores::get_professor,
        handlers::professores::update_professor,
        handlers::professores::delete_professor,

        // --- Turmas ---
        handlers::turmas::create_turma,
        handlers::turmas::get_all_turmas,
        handlers::turmas::get_turma,
        handlers::turmas::update_turma,
        handlers::turmas::delete_turma,

        // --- Alunos ---
        handlers::alunos::create_aluno,
        handlers::alunos::get_all_alunos,
        handlers::alunos::get_aluno,
        handlers::alunos::update_aluno,
        handlers::alunos::delete_aluno,
    ),
    components(
        schemas(
            models::Professor,
            models::Turma,
            models::Aluno,
            models::UpdateProfessorPayload,
            models::UpdateTurmaPayload,
            models::UpdateAlunoPayload,
            handlers::professores::CreateProfessorPayload,
            handlers::turmas::CreateTurmaPayload,
            handlers::alunos::CreateAlunoPayload,
        )
    ),
    tags(
        (name = "Professores", description = "Cadastro de professores"),
        (name = "Turmas", description = "Cadastro de turmas"),
        (name = "Alunos", description = "Cadastro de alunos e notas semestrais")
    )
)]
pub struct ApiDoc;

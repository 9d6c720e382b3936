// src/services/cadastro_service.rs

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    db::{AlunoRepository, ProfessorRepository, TurmaRepository},
    models::{
        Aluno, Professor, Turma, UpdateAlunoPayload, UpdateProfessorPayload, UpdateTurmaPayload,
        aluno,
    },
};

/// Regras de negócio do cadastro: valida as referências locais antes de
/// gravar, mescla atualizações parciais e dispara as remoções em cascata.
#[derive(Clone)]
pub struct CadastroService {
    professores: ProfessorRepository,
    turmas: TurmaRepository,
    alunos: AlunoRepository,
}

impl CadastroService {
    pub fn new(
        professores: ProfessorRepository,
        turmas: TurmaRepository,
        alunos: AlunoRepository,
    ) -> Self {
        Self {
            professores,
            turmas,
            alunos,
        }
    }

    // =========================================================================
    //  PROFESSORES
    // =========================================================================

    pub async fn create_professor(
        &self,
        nome: &str,
        idade: Option<i64>,
        materia: Option<&str>,
        observacoes: Option<&str>,
    ) -> Result<Professor, AppError> {
        self.professores
            .create(nome, idade, materia, observacoes)
            .await
    }

    pub async fn list_professores(&self) -> Result<Vec<Professor>, AppError> {
        self.professores.find_all().await
    }

    pub async fn get_professor(&self, id: i64) -> Result<Professor, AppError> {
        self.professores
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProfessorNaoEncontrado)
    }

    pub async fn update_professor(
        &self,
        id: i64,
        payload: UpdateProfessorPayload,
    ) -> Result<Professor, AppError> {
        let atual = self.get_professor(id).await?;

        // Campos ausentes no payload mantêm o valor gravado.
        let mesclado = Professor {
            id: atual.id,
            nome: payload.nome.unwrap_or(atual.nome),
            idade: payload.idade.or(atual.idade),
            materia: payload.materia.or(atual.materia),
            observacoes: payload.observacoes.or(atual.observacoes),
        };

        self.professores.update(&mesclado).await
    }

    /// Remove o professor, as turmas dele e os alunos dessas turmas.
    pub async fn delete_professor(&self, id: i64) -> Result<(), AppError> {
        self.get_professor(id).await?;
        self.professores.delete_cascade(id).await
    }

    // =========================================================================
    //  TURMAS
    // =========================================================================

    pub async fn create_turma(
        &self,
        descricao: &str,
        ativo: bool,
        professor_id: i64,
    ) -> Result<Turma, AppError> {
        // A referência é validada por inteiro antes da primeira escrita.
        self.exige_professor(professor_id).await?;
        self.turmas.create(descricao, ativo, professor_id).await
    }

    pub async fn list_turmas(&self) -> Result<Vec<Turma>, AppError> {
        self.turmas.find_all().await
    }

    pub async fn get_turma(&self, id: i64) -> Result<Turma, AppError> {
        self.turmas
            .find_by_id(id)
            .await?
            .ok_or(AppError::TurmaNaoEncontrada)
    }

    pub async fn update_turma(
        &self,
        id: i64,
        payload: UpdateTurmaPayload,
    ) -> Result<Turma, AppError> {
        let atual = self.get_turma(id).await?;

        // Só revalida a referência que o payload está trocando.
        if let Some(professor_id) = payload.professor_id {
            self.exige_professor(professor_id).await?;
        }

        let mesclada = Turma {
            id: atual.id,
            descricao: payload.descricao.unwrap_or(atual.descricao),
            ativo: payload.ativo.unwrap_or(atual.ativo),
            professor_id: payload.professor_id.unwrap_or(atual.professor_id),
        };

        self.turmas.update(&mesclada).await
    }

    /// Remove a turma e os alunos dela.
    pub async fn delete_turma(&self, id: i64) -> Result<(), AppError> {
        self.get_turma(id).await?;
        self.turmas.delete_cascade(id).await
    }

    // =========================================================================
    //  ALUNOS
    // =========================================================================

    #[allow(clippy::too_many_arguments)]
    pub async fn create_aluno(
        &self,
        nome: &str,
        idade: Option<i64>,
        data_nascimento: Option<NaiveDate>,
        turma_id: i64,
        nota_semestre1: Option<f64>,
        nota_semestre2: Option<f64>,
    ) -> Result<Aluno, AppError> {
        self.exige_turma(turma_id).await?;

        let media = aluno::media_final(nota_semestre1, nota_semestre2);

        self.alunos
            .create(
                nome,
                idade,
                data_nascimento,
                turma_id,
                nota_semestre1,
                nota_semestre2,
                media,
            )
            .await
    }

    pub async fn list_alunos(&self) -> Result<Vec<Aluno>, AppError> {
        self.alunos.find_all().await
    }

    pub async fn get_aluno(&self, id: i64) -> Result<Aluno, AppError> {
        self.alunos
            .find_by_id(id)
            .await?
            .ok_or(AppError::AlunoNaoEncontrado)
    }

    pub async fn update_aluno(
        &self,
        id: i64,
        payload: UpdateAlunoPayload,
    ) -> Result<Aluno, AppError> {
        let atual = self.get_aluno(id).await?;

        if let Some(turma_id) = payload.turma_id {
            self.exige_turma(turma_id).await?;
        }

        let nota_semestre1 = payload.nota_semestre1.or(atual.nota_semestre1);
        let nota_semestre2 = payload.nota_semestre2.or(atual.nota_semestre2);

        // A média só é recalculada quando o payload mexe em alguma nota.
        let media_final = if payload.nota_semestre1.is_some() || payload.nota_semestre2.is_some() {
            aluno::media_final(nota_semestre1, nota_semestre2)
        } else {
            atual.media_final
        };

        let mesclado = Aluno {
            id: atual.id,
            nome: payload.nome.unwrap_or(atual.nome),
            idade: payload.idade.or(atual.idade),
            data_nascimento: payload.data_nascimento.or(atual.data_nascimento),
            turma_id: payload.turma_id.unwrap_or(atual.turma_id),
            nota_semestre1,
            nota_semestre2,
            media_final,
        };

        self.alunos.update(&mesclado).await
    }

    pub async fn delete_aluno(&self, id: i64) -> Result<(), AppError> {
        self.get_aluno(id).await?;
        self.alunos.delete(id).await
    }

    // --- Validações de referência local ---

    async fn exige_professor(&self, id: i64) -> Result<(), AppError> {
        match self.professores.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::ProfessorNaoEncontrado),
        }
    }

    async fn exige_turma(&self, id: i64) -> Result<(), AppError> {
        match self.turmas.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::TurmaNaoEncontrada),
        }
    }
}

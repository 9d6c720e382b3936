// src/services/atividade_service.rs

use std::sync::Arc;

use chrono::NaiveDate;
use gerenciamento_client::{TipoReferencia, ValidadorReferencia};

use crate::{
    common::error::AppError,
    db::{AtividadeRepository, NotaRepository},
    models::{Atividade, Nota, UpdateAtividadePayload, UpdateNotaPayload},
};

/// Regras de negócio das atividades e notas.
///
/// Referências externas (professor, turma, aluno) são checadas no
/// Gerenciamento antes de cada escrita, em ordem fixa, parando na primeira
/// que falhar. A referência local nota → atividade é checada no próprio
/// banco. Nenhuma escrita parcial acontece: a validação termina antes do
/// primeiro INSERT/UPDATE.
#[derive(Clone)]
pub struct AtividadeService {
    atividades: AtividadeRepository,
    notas: NotaRepository,
    validador: Arc<dyn ValidadorReferencia>,
}

impl AtividadeService {
    pub fn new(
        atividades: AtividadeRepository,
        notas: NotaRepository,
        validador: Arc<dyn ValidadorReferencia>,
    ) -> Self {
        Self {
            atividades,
            notas,
            validador,
        }
    }

    // =========================================================================
    //  ATIVIDADES
    // =========================================================================

    #[allow(clippy::too_many_arguments)]
    pub async fn create_atividade(
        &self,
        nome_atividade: &str,
        descricao: Option<&str>,
        peso_porcento: Option<i64>,
        data_entrega: Option<NaiveDate>,
        turma_id: i64,
        professor_id: i64,
    ) -> Result<Atividade, AppError> {
        // Ordem fixa: professor, depois turma.
        self.exige_referencia(TipoReferencia::Professor, professor_id)
            .await?;
        self.exige_referencia(TipoReferencia::Turma, turma_id)
            .await?;

        self.atividades
            .create(
                nome_atividade,
                descricao,
                peso_porcento,
                data_entrega,
                turma_id,
                professor_id,
            )
            .await
    }

    pub async fn list_atividades(&self) -> Result<Vec<Atividade>, AppError> {
        self.atividades.find_all().await
    }

    pub async fn get_atividade(&self, id: i64) -> Result<Atividade, AppError> {
        self.atividades
            .find_by_id(id)
            .await?
            .ok_or(AppError::AtividadeNaoEncontrada)
    }

    pub async fn update_atividade(
        &self,
        id: i64,
        payload: UpdateAtividadePayload,
    ) -> Result<Atividade, AppError> {
        let atual = self.get_atividade(id).await?;

        // Só revalida as referências que o payload está trocando.
        if let Some(professor_id) = payload.professor_id {
            self.exige_referencia(TipoReferencia::Professor, professor_id)
                .await?;
        }
        if let Some(turma_id) = payload.turma_id {
            self.exige_referencia(TipoReferencia::Turma, turma_id)
                .await?;
        }

        let mesclada = Atividade {
            id: atual.id,
            nome_atividade: payload.nome_atividade.unwrap_or(atual.nome_atividade),
            descricao: payload.descricao.or(atual.descricao),
            peso_porcento: payload.peso_porcento.or(atual.peso_porcento),
            data_entrega: payload.data_entrega.or(atual.data_entrega),
            turma_id: payload.turma_id.unwrap_or(atual.turma_id),
            professor_id: payload.professor_id.unwrap_or(atual.professor_id),
        };

        self.atividades.update(&mesclada).await
    }

    /// Remove a atividade e as notas dela.
    pub async fn delete_atividade(&self, id: i64) -> Result<(), AppError> {
        self.get_atividade(id).await?;
        self.atividades.delete_cascade(id).await
    }

    // =========================================================================
    //  NOTAS
    // =========================================================================

    pub async fn create_nota(
        &self,
        nota: f64,
        aluno_id: i64,
        atividade_id: i64,
    ) -> Result<Nota, AppError> {
        // Ordem fixa: a referência local primeiro, depois o aluno remoto.
        self.get_atividade(atividade_id).await?;
        self.exige_referencia(TipoReferencia::Aluno, aluno_id)
            .await?;

        self.notas.create(nota, aluno_id, atividade_id).await
    }

    pub async fn list_notas(&self) -> Result<Vec<Nota>, AppError> {
        self.notas.find_all().await
    }

    pub async fn get_nota(&self, id: i64) -> Result<Nota, AppError> {
        self.notas
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotaNaoEncontrada)
    }

    /// Notas de uma atividade; 404 se a atividade não existir.
    pub async fn list_notas_da_atividade(&self, atividade_id: i64) -> Result<Vec<Nota>, AppError> {
        self.get_atividade(atividade_id).await?;
        self.notas.find_by_atividade(atividade_id).await
    }

    pub async fn update_nota(
        &self,
        id: i64,
        payload: UpdateNotaPayload,
    ) -> Result<Nota, AppError> {
        let atual = self.get_nota(id).await?;

        if let Some(atividade_id) = payload.atividade_id {
            self.get_atividade(atividade_id).await?;
        }
        if let Some(aluno_id) = payload.aluno_id {
            self.exige_referencia(TipoReferencia::Aluno, aluno_id)
                .await?;
        }

        let mesclada = Nota {
            id: atual.id,
            nota: payload.nota.unwrap_or(atual.nota),
            aluno_id: payload.aluno_id.unwrap_or(atual.aluno_id),
            atividade_id: payload.atividade_id.unwrap_or(atual.atividade_id),
        };

        self.notas.update(&mesclada).await
    }

    pub async fn delete_nota(&self, id: i64) -> Result<(), AppError> {
        self.get_nota(id).await?;
        self.notas.delete(id).await
    }

    // --- Validação de referência externa ---

    async fn exige_referencia(&self, tipo: TipoReferencia, id: i64) -> Result<(), AppError> {
        if self.validador.existe(tipo, id).await {
            return Ok(());
        }

        Err(match tipo {
            TipoReferencia::Professor => AppError::ProfessorNaoEncontrado,
            TipoReferencia::Turma => AppError::TurmaNaoEncontrada,
            TipoReferencia::Aluno => AppError::AlunoNaoEncontrado,
        })
    }
}

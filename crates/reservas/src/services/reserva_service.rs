// src/services/reserva_service.rs

use std::sync::Arc;

use chrono::NaiveDate;
use gerenciamento_client::{TipoReferencia, ValidadorReferencia};

use crate::{
    common::error::AppError,
    db::ReservaRepository,
    models::{Reserva, UpdateReservaPayload},
};

/// Regras de negócio das reservas.
///
/// A data chega como texto e só é aceita em formato AAAA-MM-DD; essa checagem
/// vem antes da consulta remota, para não gastar chamada com payload inválido.
/// A turma é validada no Gerenciamento antes de cada escrita.
#[derive(Clone)]
pub struct ReservaService {
    reservas: ReservaRepository,
    validador: Arc<dyn ValidadorReferencia>,
}

impl ReservaService {
    pub fn new(reservas: ReservaRepository, validador: Arc<dyn ValidadorReferencia>) -> Self {
        Self {
            reservas,
            validador,
        }
    }

    pub async fn create_reserva(
        &self,
        num_sala: i64,
        lab: bool,
        data: &str,
        turma_id: i64,
    ) -> Result<Reserva, AppError> {
        let data = parse_data(data)?;
        self.exige_turma(turma_id).await?;

        self.reservas.create(num_sala, lab, data, turma_id).await
    }

    pub async fn list_reservas(&self) -> Result<Vec<Reserva>, AppError> {
        self.reservas.find_all().await
    }

    pub async fn get_reserva(&self, id: i64) -> Result<Reserva, AppError> {
        self.reservas
            .find_by_id(id)
            .await?
            .ok_or(AppError::ReservaNaoEncontrada)
    }

    pub async fn update_reserva(
        &self,
        id: i64,
        payload: UpdateReservaPayload,
    ) -> Result<Reserva, AppError> {
        let atual = self.get_reserva(id).await?;

        // A data é validada antes de qualquer chamada remota.
        let data = match &payload.data {
            Some(texto) => Some(parse_data(texto)?),
            None => None,
        };

        // Só revalida a turma se o payload está trocando.
        if let Some(turma_id) = payload.turma_id {
            self.exige_turma(turma_id).await?;
        }

        let mesclada = Reserva {
            id: atual.id,
            num_sala: payload.num_sala.unwrap_or(atual.num_sala),
            lab: payload.lab.unwrap_or(atual.lab),
            data: data.unwrap_or(atual.data),
            turma_id: payload.turma_id.unwrap_or(atual.turma_id),
        };

        self.reservas.update(&mesclada).await
    }

    pub async fn delete_reserva(&self, id: i64) -> Result<(), AppError> {
        self.get_reserva(id).await?;
        self.reservas.delete(id).await
    }

    async fn exige_turma(&self, turma_id: i64) -> Result<(), AppError> {
        if self.validador.existe(TipoReferencia::Turma, turma_id).await {
            Ok(())
        } else {
            Err(AppError::TurmaNaoEncontrada)
        }
    }
}

/// Aceita somente datas de calendário em formato ISO (AAAA-MM-DD).
fn parse_data(texto: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(texto, "%Y-%m-%d")
        .map_err(|_| AppError::DataInvalida(texto.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_data;

    #[test]
    fn aceita_data_iso() {
        assert!(parse_data("2025-11-05").is_ok());
    }

    #[test]
    fn rejeita_outros_formatos() {
        assert!(parse_data("05-11-2025").is_err());
        assert!(parse_data("2025/11/05").is_err());
        assert!(parse_data("amanhã").is_err());
    }
}

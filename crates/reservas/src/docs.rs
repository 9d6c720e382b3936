// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::reservas::create_reserva,
        handlers::reservas::get_all_reservas,
        handlers::reservas::get_reserva,
        handlers::reservas::update_reserva,
        handlers::reservas::delete_reserva,
    ),
    components(
        schemas(
            models::Reserva,
            models::UpdateReservaPayload,
            handlers::reservas::CreateReservaPayload,
        )
    ),
    tags(
        (name = "Reservas", description = "Reservas de salas e laboratórios para turmas do Gerenciamento")
    )
)]
pub struct ApiDoc;

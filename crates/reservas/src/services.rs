pub mod reserva_service;

pub use reserva_service::ReservaService;

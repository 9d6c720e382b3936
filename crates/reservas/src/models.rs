pub mod reserva;

pub use reserva::{Reserva, UpdateReservaPayload};

pub mod atividade;
pub mod nota;

pub use atividade::{Atividade, UpdateAtividadePayload};
pub use nota::{Nota, UpdateNotaPayload};

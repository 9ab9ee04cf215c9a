//! Error puente de la orquestación: agrupa los errores de modelo, núcleo y
//! persistencia sin aplanarlos, para que el llamador pueda distinguir la capa
//! que falló.

use flow_core::CoreError;
use flow_domain::DomainError;
use flow_persistence::PersistenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("model: {0}")]
    Model(#[from] DomainError),
    #[error("core: {0}")]
    Core(#[from] CoreError),
    #[error("persistence: {0}")]
    Persistence(#[from] PersistenceError),
}

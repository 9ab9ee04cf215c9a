//! Errores del núcleo de transformación.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreError {
    #[error("entity `{0}` has no normalized label (disambiguation must run first)")]
    MissingNormalizedLabel(String),
}

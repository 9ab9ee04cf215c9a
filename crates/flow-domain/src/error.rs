use thiserror::Error;

/// Errores del modelo de grafo. El parseo semántico de cada tipo de nodo
/// queda fuera: aquí sólo se valida la forma mínima de los records.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("record is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("node `{node}` references unknown container `{container}`")]
    UnknownContainer { node: String, container: String },
}

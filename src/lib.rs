//! FlowTree Rust Library
//!
//! Este crate actúa como la capa de orquestación de FlowTree:
//! - Expone `convert` con las dos operaciones extremo a extremo
//!   (monolito → árbol y árbol → monolito).
//! - Expone `errors` con el error puente entre crates.
//!
//! Puede usarse desde `main.rs`, desde `flow-cli` o por otros clientes.

pub mod convert;
pub mod errors;

pub use convert::{merge, split, MergeOutcome, SplitOutcome};
pub use errors::ConvertError;

#[cfg(test)]
mod tests {
	use super::errors::ConvertError;
	use flow_core::CoreError;
	use flow_domain::DomainError;

	#[test]
	fn convert_error_forwards_core_messages() {
		let err: ConvertError = CoreError::MissingNormalizedLabel("f1".into()).into();
		assert_eq!(err.to_string(),
		           "core: entity `f1` has no normalized label (disambiguation must run first)");
	}

	#[test]
	fn convert_error_forwards_model_messages() {
		let err: ConvertError = DomainError::MissingField("id").into();
		assert_eq!(err.to_string(), "model: record is missing required field `id`");
	}
}

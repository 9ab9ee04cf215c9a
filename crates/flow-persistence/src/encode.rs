//! Colaborador de codificación: valor ↔ texto literal de archivo.
//!
//! JSON con indentación estable, finales de línea normalizados a `\n` y
//! newline final; YAML vía `serde_yaml`. Sin lógica de negocio: los
//! llamadores deciden qué se codifica y a dónde va.

use serde_json::Value;

use crate::config::FileFormat;
use crate::error::PersistenceError;

/// Produce el texto de archivo para `value` en el formato pedido.
pub fn encode(value: &Value, format: FileFormat) -> Result<String, PersistenceError> {
    if format.is_yaml() {
        return serde_yaml::to_string(value).map_err(|e| PersistenceError::Write {
            context: "yaml encoder".into(),
            detail: e.to_string(),
        });
    }
    let text = serde_json::to_string_pretty(value).map_err(|e| PersistenceError::Write {
        context: "json encoder".into(),
        detail: e.to_string(),
    })?;
    let mut text = text.replace("\r\n", "\n");
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Inversa de `encode`. Insensible al estilo de quoting del YAML de entrada.
pub fn decode(text: &str, format: FileFormat) -> Result<Value, PersistenceError> {
    if format.is_yaml() {
        serde_yaml::from_str(text).map_err(|e| PersistenceError::Parse {
            context: "yaml decoder".into(),
            detail: e.to_string(),
        })
    } else {
        serde_json::from_str(text).map_err(|e| PersistenceError::Parse {
            context: "json decoder".into(),
            detail: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_output_is_stable_and_newline_terminated() {
        let value = json!([{"id": "n1", "type": "inject"}]);
        let text = encode(&value, FileFormat::Json).unwrap();
        assert!(text.ends_with('\n'));
        assert!(!text.contains('\r'));
        // Misma entrada, mismo texto: la codificación es determinista.
        assert_eq!(text, encode(&value, FileFormat::Json).unwrap());
    }

    #[test]
    fn yaml_round_trips_through_decode() {
        let value = json!([{"id": "n1", "nodes": ["a", "b"]}]);
        let text = encode(&value, FileFormat::Yaml).unwrap();
        assert_eq!(decode(&text, FileFormat::Yaml).unwrap(), value);
    }

    #[test]
    fn json_and_yaml_decode_to_the_same_value() {
        let value = json!({"id": "n1", "active": true, "count": 3});
        let json_text = encode(&value, FileFormat::Json).unwrap();
        let yaml_text = encode(&value, FileFormat::Yml).unwrap();
        assert_eq!(decode(&json_text, FileFormat::Json).unwrap(),
                   decode(&yaml_text, FileFormat::Yml).unwrap());
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = decode("{not json", FileFormat::Json).unwrap_err();
        assert!(matches!(err, PersistenceError::Parse { .. }));
    }
}

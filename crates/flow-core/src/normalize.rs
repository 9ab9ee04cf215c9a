//! Normalización de labels a slugs aptos para nombre de archivo.

/// Separador usado al sanear caracteres fuera de `[A-Za-z0-9.]`.
pub const SEPARATOR: char = '-';

/// Convierte un label arbitrario en slug: reemplaza todo carácter fuera de
/// `[A-Za-z0-9.]` por `-`, colapsa rachas de separadores a uno solo (el
/// colapso es por arrastre, así que soporta rachas de cualquier longitud),
/// pasa a minúsculas y recorta separadores en los extremos. Función total:
/// nunca falla, aunque puede devolver cadena vacía si la entrada no aporta
/// ningún carácter válido (los llamadores aportan una semilla no vacía).
pub fn normalize(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' {
            if pending_sep && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            slug.push(ch.to_ascii_lowercase());
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }
    // El separador final pendiente se descarta: equivale al recorte derecho.
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_and_collapses() {
        assert_eq!(normalize("My Flow!!"), "my-flow");
    }

    #[test]
    fn long_separator_runs_collapse_to_one() {
        // Rachas muy largas: el colapso no puede ser de pasadas fijas.
        assert_eq!(normalize("a!!!!!!!!!!!!!!!!!!!!b"), "a-b");
        assert_eq!(normalize("a !@#$%^&*() b"), "a-b");
    }

    #[test]
    fn strips_leading_and_trailing_separators() {
        assert_eq!(normalize("  hello  "), "hello");
        assert_eq!(normalize("--x--"), "x");
    }

    #[test]
    fn keeps_dots_and_lowercases() {
        assert_eq!(normalize("Flow.V2"), "flow.v2");
    }

    #[test]
    fn empty_or_all_invalid_input_yields_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn output_shape_holds_for_odd_inputs() {
        for input in ["ñandú", "a__b__c", "...", "A-9.z"] {
            let slug = normalize(input);
            assert!(!slug.starts_with(SEPARATOR), "{slug:?}");
            assert!(!slug.ends_with(SEPARATOR), "{slug:?}");
            assert!(!slug.contains("--"), "{slug:?}");
            assert!(slug.chars().all(|c| c.is_ascii_lowercase()
                                         || c.is_ascii_digit()
                                         || c == '.'
                                         || c == SEPARATOR),
                    "{slug:?}");
        }
    }
}

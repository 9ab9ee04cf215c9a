/// Escenario de validación: round-trip completo sobre un directorio temporal.
/// Escribe un monolito de ejemplo, lo descompone, lista el árbol producido y
/// lo vuelve a ensamblar comprobando que no se pierde ningún nodo.
use flow_adapters::RecordGraphModel;
use flow_persistence::{read_monolith, write_monolith, ConvertConfig, FileFormat};
use flowtree_rust::convert::{merge, split};
use serde_json::json;

fn sample_monolith() -> Vec<serde_json::Value> {
    vec![json!({"id": "f1", "type": "tab", "label": "Planta"}),
         json!({"id": "f2", "type": "tab", "label": "Planta"}),
         json!({"id": "n1", "type": "inject", "z": "f1"}),
         json!({"id": "g1", "type": "group", "z": "f1", "w": 120, "h": 60,
                "nodes": ["n1"]}),
         json!({"id": "s1", "type": "subflow", "name": "Utilidades"}),
         json!({"id": "n2", "type": "function", "z": "s1"}),
         json!({"id": "c1", "type": "mqtt-broker", "site": {"name": "Nave 3"}})]
}

fn main() {
    let base = std::env::temp_dir().join("flowtree-demo");
    // Partir de un directorio limpio: restos de corridas previas ensuciarían
    // la lectura del árbol.
    let _ = std::fs::remove_dir_all(&base);
    let monolith_path = base.join("flows.json");
    let config = ConvertConfig { file_format: FileFormat::Json,
                                 destination_folder: base.join("tree"),
                                 tabs_order: vec!["f2".into(), "f1".into()],
                                 monolith_filename: monolith_path.clone() };

    let input = sample_monolith();
    if let Err(e) = write_monolith(&monolith_path, &input) {
        eprintln!("[demo] no se pudo escribir el monolito: {e}");
        std::process::exit(1);
    }

    let provider = RecordGraphModel::new();
    match split(&provider, &config) {
        Ok(outcome) => {
            println!("split: {} archivos", outcome.written.len());
            for path in &outcome.written {
                println!("  {}", path.display());
            }
            println!("tabs order derivado: {:?}", outcome.tabs_order);
        }
        Err(e) => {
            eprintln!("[demo] split falló: {e}");
            std::process::exit(1);
        }
    }

    match merge(&provider, &config, false) {
        Ok(outcome) => println!("merge: {} nodos en {}", outcome.node_count,
                                outcome.monolith.display()),
        Err(e) => {
            eprintln!("[demo] merge falló: {e}");
            std::process::exit(1);
        }
    }

    match read_monolith(&monolith_path) {
        Ok(nodes) if nodes.len() == input.len() => {
            println!("round-trip ok: {} nodos conservados", nodes.len());
        }
        Ok(nodes) => {
            eprintln!("[demo] se esperaban {} nodos y hay {}", input.len(), nodes.len());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("[demo] relectura falló: {e}");
            std::process::exit(1);
        }
    }
}

use std::path::PathBuf;

use flow_adapters::RecordGraphModel;
use flow_persistence::ConvertConfig;
use flowtree_rust::convert::{merge, split};

const USAGE: &str = "Uso: flow-cli <split|merge> [--config <PATH>] [--overwrite]";

fn main() {
    // Cargar .env si existe para obtener FLOWTREE_CONFIG
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let command = args[1].as_str();
    if command != "split" && command != "merge" {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let mut config_path: Option<PathBuf> = None;
    let mut overwrite = false;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if i < args.len() { config_path = Some(PathBuf::from(&args[i])); }
            }
            "--overwrite" => {
                overwrite = true;
            }
            other => {
                eprintln!("[flow-cli] argumento desconocido: {other}");
                eprintln!("{USAGE}");
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let config_path = config_path.unwrap_or_else(|| {
        std::env::var("FLOWTREE_CONFIG").map(PathBuf::from)
                                        .unwrap_or_else(|_| PathBuf::from("flowtree.json"))
    });
    let config = match ConvertConfig::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[flow-cli] configuración inválida ({}): {e}", config_path.display());
            std::process::exit(1);
        }
    };

    let provider = RecordGraphModel::new();
    if command == "split" {
        match split(&provider, &config) {
            Ok(outcome) => {
                println!("split: {} archivos en {}", outcome.written.len(),
                         config.destination_folder.display());
                if config.tabs_order.is_empty() {
                    println!("tabs order derivado: {:?}", outcome.tabs_order);
                }
                if !outcome.is_complete() {
                    for (path, err) in &outcome.failures {
                        eprintln!("[flow-cli] fallo en {}: {err}", path.display());
                    }
                    std::process::exit(3);
                }
            }
            Err(e) => {
                eprintln!("[flow-cli] split falló: {e}");
                std::process::exit(1);
            }
        }
    } else {
        match merge(&provider, &config, overwrite) {
            Ok(outcome) => {
                println!("merge: {} nodos en {}", outcome.node_count,
                         outcome.monolith.display());
                if !outcome.is_complete() {
                    for (path, err) in &outcome.failures {
                        eprintln!("[flow-cli] fallo en {}: {err}", path.display());
                    }
                    std::process::exit(3);
                }
            }
            Err(e) => {
                eprintln!("[flow-cli] merge falló: {e}");
                std::process::exit(1);
            }
        }
    }
}

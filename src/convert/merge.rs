//! Árbol descompuesto → monolito.

use std::path::PathBuf;

use flow_core::{assemble_flow_config, project_monolith};
use flow_domain::GraphModelProvider;
use flow_persistence::{read_tree, write_monolith, ConvertConfig, PersistenceError};

use crate::errors::ConvertError;

#[derive(Debug)]
pub struct MergeOutcome {
    pub monolith: PathBuf,
    pub node_count: usize,
    /// Archivos del árbol que no pudieron leerse (lote best-effort).
    pub failures: Vec<(PathBuf, PersistenceError)>,
}

impl MergeOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Lee el árbol, ensambla la secuencia plana con el `tabsOrder` configurado,
/// la re-parsea con el proveedor (validación de que el ensamblado forma un
/// grafo bien construido) y proyecta el monolito. Con `overwrite` se respeta
/// el orden natural de exportación en lugar del orden canónico.
pub fn merge(provider: &dyn GraphModelProvider,
             config: &ConvertConfig,
             overwrite: bool)
             -> Result<MergeOutcome, ConvertError> {
    let report = read_tree(config)?;
    let flat = assemble_flow_config(&report.entries, &config.tabs_order);
    let set = provider.parse_flow(flat)?;

    let nodes = project_monolith(&set, &config.tabs_order, overwrite);
    write_monolith(&config.monolith_filename, &nodes)?;
    log::info!("merge: {} nodos en {}", nodes.len(), config.monolith_filename.display());

    Ok(MergeOutcome { monolith: config.monolith_filename.clone(),
                      node_count: nodes.len(),
                      failures: report.failures })
}

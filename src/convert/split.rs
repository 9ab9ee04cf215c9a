//! Monolito → árbol descompuesto.

use std::path::PathBuf;

use flow_core::{build_tree, derive_tabs_order};
use flow_domain::GraphModelProvider;
use flow_persistence::{read_monolith, write_tree, ConvertConfig, PersistenceError};

use crate::errors::ConvertError;

/// Resultado de una descomposición. `tabs_order` es la lista de referencia
/// re-derivada del monolito leído: con `tabsOrder` vacío en la configuración,
/// el llamador puede fijarla para futuros round-trips.
#[derive(Debug)]
pub struct SplitOutcome {
    pub written: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, PersistenceError)>,
    pub tabs_order: Vec<String>,
}

impl SplitOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Lee el monolito, parsea el flow-set, desambigua las tres categorías con
/// un registro compartido, construye el árbol y lo escribe. La validación de
/// configuración ya ocurrió al construir `ConvertConfig`; aquí el primer
/// efecto sobre disco es la escritura del árbol.
pub fn split(provider: &dyn GraphModelProvider,
             config: &ConvertConfig)
             -> Result<SplitOutcome, ConvertError> {
    let nodes = read_monolith(&config.monolith_filename)?;
    let mut set = provider.parse_flow(nodes)?;
    super::disambiguate_all(&mut set);

    let entries = build_tree(&set)?;
    let report = write_tree(&entries, config)?;
    log::info!("split: {} entradas, {} escritas, {} fallidas",
               entries.len(),
               report.written.len(),
               report.failures.len());

    Ok(SplitOutcome { written: report.written,
                      failures: report.failures,
                      tabs_order: derive_tabs_order(&set) })
}

// src/source/json.rs

use crate::source::{Pagina, Tabla};
use crate::utils::error::SourceError;
use std::fs;
use std::path::Path;

/// Loads a JSON table dump: `pages[tables[rows[cells]]]`, where a cell is a
/// string or `null`. This is the wire format a table-extraction backend
/// writes when it walks a paginated document.
///
/// Page numbers are assigned 1-based in array order.
pub fn cargar(ruta: &Path) -> Result<Vec<Pagina>, SourceError> {
    let contenido = fs::read_to_string(ruta)?;
    let paginas: Vec<Vec<Tabla>> = serde_json::from_str(&contenido)?;

    tracing::debug!("Volcado JSON: {} paginas desde {}", paginas.len(), ruta.display());

    Ok(paginas
        .into_iter()
        .enumerate()
        .map(|(indice, tablas)| Pagina {
            numero: indice + 1,
            tablas,
        })
        .collect())
}

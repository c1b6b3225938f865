// src/source/mod.rs

pub mod html;
pub mod json;

use crate::utils::error::SourceError;
use std::path::Path;

// --- Data Structures ---
// Shape produced by the table-extraction backend: a document is a sequence of
// pages, each page holds zero or more tables, a table is rows of optional
// text cells. A cell may be missing entirely.
pub type Celda = Option<String>;
pub type Fila = Vec<Celda>;
pub type Tabla = Vec<Fila>;

#[derive(Debug, Clone)]
pub struct Pagina {
    pub numero: usize,
    pub tablas: Vec<Tabla>,
}

/// Loads a document into pages of tables, choosing the backend by file
/// extension. The file is only ever opened for reading.
pub fn cargar_documento(ruta: &Path) -> Result<Vec<Pagina>, SourceError> {
    let extension = ruta
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => json::cargar(ruta),
        "html" | "htm" => html::cargar(ruta),
        _ => Err(SourceError::FormatoNoSoportado(ruta.display().to_string())),
    }
}

/// Flattens a row into a single string: non-blank cells joined by one space.
pub fn texto_fila(fila: &Fila) -> String {
    fila.iter()
        .filter_map(|c| c.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when every cell is absent or blank; such rows are skippable.
pub fn fila_vacia(fila: &Fila) -> bool {
    fila.iter()
        .all(|c| c.as_deref().map_or(true, |v| v.trim().is_empty()))
}

/// Extracts the trimmed value of one cell, treating blank and the literal
/// `none`/`null` strings the backend sometimes emits as absent.
pub fn valor_celda(fila: &Fila, indice: usize) -> Option<String> {
    let valor = fila.get(indice)?.as_deref()?.trim();
    if valor.is_empty() || valor.eq_ignore_ascii_case("none") || valor.eq_ignore_ascii_case("null") {
        return None;
    }
    Some(valor.to_string())
}

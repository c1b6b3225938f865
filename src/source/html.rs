// src/source/html.rs

use crate::source::{Pagina, Tabla};
use crate::utils::error::SourceError;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::fs;
use std::path::Path;

// --- CSS Selectors (Lazy Static) ---
static TABLA_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table").expect("Failed to compile TABLA_SELECTOR")
});

static FILA_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("tr").expect("Failed to compile FILA_SELECTOR")
});

static CELDA_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("td, th").expect("Failed to compile CELDA_SELECTOR")
});

/// Loads an HTML export of a program document. HTML carries no page breaks,
/// so every `<table>` lands on a single synthetic page.
pub fn cargar(ruta: &Path) -> Result<Vec<Pagina>, SourceError> {
    let contenido = fs::read_to_string(ruta)?;
    let tablas = extraer_tablas(&contenido);

    tracing::debug!("HTML: {} tablas desde {}", tablas.len(), ruta.display());

    Ok(vec![Pagina { numero: 1, tablas }])
}

/// Walks every `<table>` element, turning `<tr>` rows of `<td>`/`<th>` cells
/// into the backend row shape. Blank cells become `None`.
fn extraer_tablas(html: &str) -> Vec<Tabla> {
    let documento = Html::parse_document(html);

    documento
        .select(&TABLA_SELECTOR)
        .map(|tabla| {
            tabla
                .select(&FILA_SELECTOR)
                .map(|fila| {
                    fila.select(&CELDA_SELECTOR)
                        .map(|celda| {
                            let texto = celda.text().collect::<String>();
                            let texto = texto.trim();
                            if texto.is_empty() {
                                None
                            } else {
                                Some(texto.to_string())
                            }
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}

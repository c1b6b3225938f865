// src/extractors/fases.rs

// --- Imports ---
use crate::source::{self, Fila, Pagina};
use crate::utils::error::ExtractError;
use crate::utils::text::norm;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

// --- Constants ---
// The phase plan lives inside the project-structure block
const SECCION_FASES: &str = "ESTRUCTURA DEL PROYECTO";
const FIN_SECCION: [&str; 2] = ["PLANTEAMIENTO DEL PROBLEMA", "INFORMACION BASICA DEL PROYECTO"];

// --- Data Structures ---
/// The four phases a formative project can declare. Declaration order is the
/// canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Fase {
    Analisis,
    Planeacion,
    Ejecucion,
    Evaluacion,
}

impl Fase {
    pub const TODAS: [Fase; 4] = [Fase::Analisis, Fase::Planeacion, Fase::Ejecucion, Fase::Evaluacion];

    fn etiqueta(self) -> &'static str {
        match self {
            Fase::Analisis => "ANALISIS",
            Fase::Planeacion => "PLANEACION",
            Fase::Ejecucion => "EJECUCION",
            Fase::Evaluacion => "EVALUACION",
        }
    }
}

// --- Extractor ---
/// Collects the phase names mentioned inside the project-structure block.
/// Repeated mentions deduplicate; output follows the canonical phase order,
/// filtered to the phases actually observed.
#[derive(Debug, Default)]
pub struct ExtractorFases {
    dentro_seccion: bool,
    encontradas: BTreeSet<Fase>,
}

impl ExtractorFases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn procesar_fila(&mut self, fila: &Fila) {
        if source::fila_vacia(fila) {
            return;
        }
        let texto_norm = norm(&source::texto_fila(fila));

        if texto_norm.contains(SECCION_FASES) {
            tracing::debug!("Seccion de estructura del proyecto detectada");
            self.dentro_seccion = true;
            return;
        }
        if !self.dentro_seccion {
            return;
        }
        if FIN_SECCION.iter().any(|marca| texto_norm.contains(marca)) {
            tracing::debug!("Fin de la seccion de estructura del proyecto");
            self.dentro_seccion = false;
            return;
        }

        for fase in Fase::TODAS {
            if texto_norm.contains(fase.etiqueta()) && self.encontradas.insert(fase) {
                tracing::debug!("Fase detectada: {}", fase.etiqueta());
            }
        }
    }

    pub fn finalizar(self) -> Vec<Fase> {
        Fase::TODAS
            .into_iter()
            .filter(|fase| self.encontradas.contains(fase))
            .collect()
    }
}

// --- Extraction entry points ---
/// Extracts the phase plan from the document at `ruta`.
pub fn extraer_fases(ruta: &Path) -> Result<Vec<Fase>, ExtractError> {
    let paginas = source::cargar_documento(ruta)?;
    Ok(extraer_de_paginas(&paginas))
}

pub fn extraer_de_paginas(paginas: &[Pagina]) -> Vec<Fase> {
    let mut extractor = ExtractorFases::new();
    for pagina in paginas {
        for tabla in &pagina.tablas {
            for fila in tabla {
                extractor.procesar_fila(fila);
            }
        }
    }
    let fases = extractor.finalizar();
    if fases.is_empty() {
        tracing::warn!("No se detecto ninguna fase del proyecto");
    } else {
        tracing::info!("Fases detectadas: {}", fases.len());
    }
    fases
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Tabla;

    fn fila(texto: &str) -> Fila {
        vec![Some(texto.to_string())]
    }

    fn escanear(filas: &[Fila]) -> Vec<Fase> {
        let tabla: Tabla = filas.to_vec();
        let paginas = vec![Pagina {
            numero: 1,
            tablas: vec![tabla],
        }];
        extraer_de_paginas(&paginas)
    }

    #[test]
    fn test_orden_canonico_y_deduplicacion() {
        let fases = escanear(&[
            fila("ESTRUCTURA DEL PROYECTO"),
            fila("Fase de EJECUCIÓN del proyecto"),
            fila("Fase de ANÁLISIS"),
            fila("Otra mención de la fase de EJECUCION"),
            fila("Fase de EVALUACIÓN"),
        ]);
        assert_eq!(fases, vec![Fase::Analisis, Fase::Ejecucion, Fase::Evaluacion]);
    }

    #[test]
    fn test_fases_fuera_de_seccion_se_ignoran() {
        let fases = escanear(&[
            fila("Fase de ANALISIS antes de la seccion"),
            fila("ESTRUCTURA DEL PROYECTO"),
            fila("Fase de PLANEACION"),
            fila("PLANTEAMIENTO DEL PROBLEMA"),
            fila("Fase de EVALUACION despues del cierre"),
        ]);
        assert_eq!(fases, vec![Fase::Planeacion]);
    }

    #[test]
    fn test_documento_sin_fases() {
        assert!(escanear(&[fila("ESTRUCTURA DEL PROYECTO")]).is_empty());
        assert!(escanear(&[]).is_empty());
    }

    #[test]
    fn test_serializacion_en_mayusculas() {
        let json = serde_json::to_string(&[Fase::Analisis, Fase::Ejecucion]).unwrap();
        assert_eq!(json, r#"["ANALISIS","EJECUCION"]"#);
    }
}

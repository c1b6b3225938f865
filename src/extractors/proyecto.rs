// src/extractors/proyecto.rs

// --- Imports ---
use crate::source::{self, valor_celda, Fila, Pagina};
use crate::utils::error::ExtractError;
use crate::utils::text::norm;
use serde::Serialize;
use std::path::Path;

// --- Constants ---
const SECCION_PROYECTO: &str = "INFORMACION BASICA DEL PROYECTO";
const FIN_SECCION: [&str; 2] = ["ESTRUCTURA DEL PROYECTO", "PLANTEAMIENTO DEL PROBLEMA"];

// Field labels, matched by containment against the normalized leading cell
const TARGET_CODIGO_PROYECTO: &str = "CODIGO PROYECTO SOFIA";
const TARGET_CODIGO_PROGRAMA: &str = "CODIGO DEL PROGRAMA SOFIA";
const TARGET_VERSION_PROGRAMA: &str = "VERSION DEL PROGRAMA";
const TARGET_CENTRO: &str = "CENTRO DE FORMACION";
const TARGET_REGIONAL: &str = "REGIONAL";
const TARGET_NOMBRE_PROYECTO: &str = "NOMBRE DEL PROYECTO";
const TARGET_PROGRAMA_FORMACION: &str = "PROGRAMA DE FORMACION AL QUE DA RESPUESTA";

// --- Data Structures ---
/// Basic metadata of one formative project. Fields are filled opportunistically
/// as label rows appear; anything never seen stays absent in the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Proyecto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_proyecto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_programa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_programa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centro_formacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_proyecto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programa_formacion: Option<String>,
}

impl Proyecto {
    fn esta_vacio(&self) -> bool {
        self.codigo_proyecto.is_none()
            && self.codigo_programa.is_none()
            && self.version_programa.is_none()
            && self.centro_formacion.is_none()
            && self.regional.is_none()
            && self.nombre_proyecto.is_none()
            && self.programa_formacion.is_none()
    }
}

// --- Extractor ---
/// Single-pass label matcher for the project information block. One record is
/// in progress at a time; a record is finalized when the block header is seen
/// again or the document ends.
#[derive(Debug, Default)]
pub struct ExtractorProyecto {
    dentro_seccion: bool,
    registro: Proyecto,
    resultado: Vec<Proyecto>,
}

impl ExtractorProyecto {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn procesar_fila(&mut self, fila: &Fila) {
        if fila.is_empty() {
            return;
        }
        let celda_izq = norm(fila.first().and_then(|c| c.as_deref()).unwrap_or(""));
        let texto_norm = norm(&source::texto_fila(fila));

        if texto_norm.contains(SECCION_PROYECTO) {
            tracing::debug!("Seccion de informacion basica detectada");
            self.dentro_seccion = true;
            self.flush();
            return;
        }
        if !self.dentro_seccion {
            return;
        }
        if FIN_SECCION.iter().any(|marca| texto_norm.contains(marca)) {
            tracing::debug!("Fin de la seccion de informacion basica");
            self.dentro_seccion = false;
            return;
        }

        // Label chain: most specific labels first, so e.g. a combined
        // "CENTRO DE FORMACION REGIONAL ..." cell lands on the center field
        if celda_izq.contains(TARGET_CODIGO_PROYECTO) {
            if let Some(valor) = valor_celda(fila, 1) {
                tracing::debug!("Codigo proyecto: {}", valor);
                self.registro.codigo_proyecto = Some(valor);
            }
        } else if celda_izq.contains(TARGET_CODIGO_PROGRAMA) {
            if let Some(valor) = valor_celda(fila, 1) {
                tracing::debug!("Codigo programa: {}", valor);
                self.registro.codigo_programa = Some(valor);
            }
        } else if celda_izq.contains(TARGET_VERSION_PROGRAMA) {
            // The version value may land in either of two columns
            if let Some(valor) = valor_celda(fila, 2).or_else(|| valor_celda(fila, 1)) {
                tracing::debug!("Version programa: {}", valor);
                self.registro.version_programa = Some(valor);
            }
        } else if celda_izq.contains(TARGET_CENTRO) {
            if let Some(valor) = valor_celda(fila, 1) {
                tracing::debug!("Centro de formacion: {}", valor);
                self.registro.centro_formacion = Some(valor);
            }
        } else if celda_izq.contains(TARGET_REGIONAL) {
            if let Some(valor) = valor_celda(fila, 1) {
                tracing::debug!("Regional: {}", valor);
                self.registro.regional = Some(valor);
            }
        } else if celda_izq.contains(TARGET_NOMBRE_PROYECTO) {
            if let Some(valor) = valor_celda(fila, 1) {
                tracing::debug!("Nombre proyecto: {}", valor);
                self.registro.nombre_proyecto = Some(valor);
            }
        } else if celda_izq.contains(TARGET_PROGRAMA_FORMACION) {
            if let Some(valor) = valor_celda(fila, 1) {
                tracing::debug!("Programa de formacion: {}", valor);
                self.registro.programa_formacion = Some(valor);
            }
        }
    }

    /// Finalizes the in-progress record if it has at least one populated
    /// field; records with nothing in them are never emitted.
    fn flush(&mut self) {
        if !self.registro.esta_vacio() {
            let registro = std::mem::take(&mut self.registro);
            tracing::debug!(
                "Registro de proyecto guardado: {}",
                registro.nombre_proyecto.as_deref().unwrap_or("sin nombre")
            );
            self.resultado.push(registro);
        }
    }

    pub fn finalizar(mut self) -> Vec<Proyecto> {
        self.flush();
        self.resultado
    }
}

// --- Extraction entry points ---
/// Extracts the project information records from the document at `ruta`.
pub fn extraer_proyecto(ruta: &Path) -> Result<Vec<Proyecto>, ExtractError> {
    let paginas = source::cargar_documento(ruta)?;
    Ok(extraer_de_paginas(&paginas))
}

pub fn extraer_de_paginas(paginas: &[Pagina]) -> Vec<Proyecto> {
    let mut extractor = ExtractorProyecto::new();
    for pagina in paginas {
        tracing::debug!("Procesando pagina {}", pagina.numero);
        for tabla in &pagina.tablas {
            for fila in tabla {
                extractor.procesar_fila(fila);
            }
        }
    }
    let proyectos = extractor.finalizar();
    if proyectos.is_empty() {
        tracing::warn!("No se extrajo ningun proyecto del documento");
    } else {
        tracing::info!("Total proyectos extraidos: {}", proyectos.len());
    }
    proyectos
}

// src/main.rs
mod extractors;
mod source;
mod utils;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use extractors::fases::{self, Fase};
use extractors::proyecto::{self, Proyecto};
use extractors::raps::{self, Rap};
use serde::Serialize;
use std::path::{Path, PathBuf};
use utils::error::ExtractError;
use utils::AppError;

const USO: &str = "Uso: sena_extractor <documento> <programa|competencias|proyecto|todo>";

/// Command Line Interface for the SENA program document extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the program document (.json table dump or .html export)
    documento: PathBuf,

    /// What to extract from the document
    #[arg(value_enum)]
    modo: Modo,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Modo {
    Programa,
    Competencias,
    Proyecto,
    Todo,
}

/// Payload of a successful run. Only the keys of the requested mode are
/// present in the JSON.
#[derive(Debug, Default, Serialize)]
struct Datos {
    #[serde(skip_serializing_if = "Option::is_none")]
    programa: Option<Vec<Fase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    competencias: Option<Vec<Rap>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proyecto: Option<Vec<Proyecto>>,
}

/// Runs the extractors selected by `modo` over the same source document.
/// Each extractor opens its own read-only view; the first failure aborts the
/// whole extraction.
fn procesar_documento(documento: &Path, modo: Modo) -> Result<Datos, ExtractError> {
    let mut datos = Datos::default();

    if matches!(modo, Modo::Programa | Modo::Todo) {
        datos.programa = Some(fases::extraer_fases(documento)?);
    }

    if matches!(modo, Modo::Competencias | Modo::Todo) {
        let lista = raps::extraer_raps(documento)?;
        for (codigo, resumen) in raps::resumen_por_competencia(&lista) {
            tracing::debug!(
                "Competencia {}: {} RAPs ({})",
                codigo,
                resumen.total,
                resumen.raps.join(", ")
            );
        }
        if lista.is_empty() {
            tracing::warn!("No se extrajo ningun RAP del documento");
        }
        datos.competencias = Some(lista);
    }

    if matches!(modo, Modo::Proyecto | Modo::Todo) {
        datos.proyecto = Some(proyecto::extraer_proyecto(documento)?);
    }

    Ok(datos)
}

/// The in-band result envelope written to stdout. Failures are reported
/// here, not through the exit code.
fn envolver(resultado: Result<Datos, ExtractError>) -> serde_json::Value {
    match resultado {
        Ok(datos) => serde_json::json!({ "success": true, "data": datos }),
        Err(e) => {
            tracing::error!("Extraccion fallida: {}", e);
            serde_json::json!({ "success": false, "error": e.to_string() })
        }
    }
}

fn imprimir(valor: &serde_json::Value) -> Result<(), AppError> {
    let salida = serde_json::to_string_pretty(valor)?;
    println!("{}", salida);
    Ok(())
}

fn main() {
    // 1. Setup Logging (reads RUST_LOG env var); stdout stays clean for JSON
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments. Bad invocations report usage in the envelope
    //    and exit 1; --help/--version keep their normal behavior.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            tracing::debug!("Argumentos invalidos: {}", e);
            let _ = imprimir(&serde_json::json!({ "success": false, "error": USO }));
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Procesando {} en modo {:?}",
        args.documento.display(),
        args.modo
    );

    // 3. Extract and report
    let respuesta = envolver(procesar_documento(&args.documento, args.modo));
    if let Err(e) = imprimir(&respuesta) {
        tracing::error!("No se pudo escribir la respuesta: {}", e);
        std::process::exit(1);
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const VOLCADO: &str = r#"[
      [
        [
          [ "INFORMACION BASICA DEL PROYECTO" ],
          [ "CODIGO PROYECTO SOFIA", "987654" ],
          [ "NOMBRE DEL PROYECTO", "Aplicativo de seguimiento academico" ],
          [ "ESTRUCTURA DEL PROYECTO" ],
          [ "Fase de ANALISIS" ],
          [ "Fase de EJECUCION" ]
        ]
      ],
      [
        [
          [ "CODIGO NORMA DE COMPETENCIA LABORAL", "220201501" ],
          [ "NOMBRE DE LA COMPETENCIA", "Interactuar en lengua inglesa" ],
          [ "1 COMPRENDER TEXTOS BASICOS EN LENGUA INGLESA" ],
          [ "CONOCIMIENTOS DEL SABER" ],
          [ "Vocabulario tecnico basico" ]
        ]
      ]
    ]"#;

    fn documento_de_prueba(nombre: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("sena_extractor_test_main");
        std::fs::create_dir_all(&dir).unwrap();
        let ruta = dir.join(nombre);
        std::fs::write(&ruta, VOLCADO).unwrap();
        ruta
    }

    #[test]
    fn test_modo_todo_llena_las_tres_claves() {
        let ruta = documento_de_prueba("todo.json");
        let datos = procesar_documento(&ruta, Modo::Todo).unwrap();

        assert_eq!(datos.programa, Some(vec![Fase::Analisis, Fase::Ejecucion]));

        let proyectos = datos.proyecto.unwrap();
        assert_eq!(proyectos.len(), 1);
        assert_eq!(proyectos[0].codigo_proyecto.as_deref(), Some("987654"));

        let raps = datos.competencias.unwrap();
        assert_eq!(raps.len(), 1);
        assert_eq!(raps[0].codigo_rap, "01");
        assert_eq!(raps[0].conocimientos_saber, vec!["Vocabulario tecnico basico"]);
    }

    #[test]
    fn test_modo_individual_omite_las_otras_claves() {
        let ruta = documento_de_prueba("proyecto.json");
        let datos = procesar_documento(&ruta, Modo::Proyecto).unwrap();

        assert!(datos.programa.is_none());
        assert!(datos.competencias.is_none());
        assert!(datos.proyecto.is_some());

        let json = serde_json::to_value(&datos).unwrap();
        assert!(json.get("programa").is_none());
        assert!(json.get("competencias").is_none());
    }

    #[test]
    fn test_salida_identica_entre_corridas() {
        let ruta = documento_de_prueba("idempotencia.json");
        let primera =
            serde_json::to_string_pretty(&envolver(procesar_documento(&ruta, Modo::Todo))).unwrap();
        let segunda =
            serde_json::to_string_pretty(&envolver(procesar_documento(&ruta, Modo::Todo))).unwrap();
        assert_eq!(primera, segunda);
    }

    #[test]
    fn test_documento_ilegible_produce_error() {
        let ruta = std::env::temp_dir().join("sena_extractor_inexistente.json");
        let envuelto = envolver(procesar_documento(&ruta, Modo::Competencias));
        assert_eq!(envuelto["success"], serde_json::json!(false));
        assert!(envuelto["error"].as_str().unwrap().contains("documento"));
    }
}

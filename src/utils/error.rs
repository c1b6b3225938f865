// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("No se pudo leer el documento: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Volcado de tablas invalido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Formato de documento no soportado: {0}")]
    FormatoNoSoportado(String),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Fuente de tablas fallida: {0}")]
    Source(#[from] SourceError),

    #[error("Error de extraccion: {0}")]
    Processing(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error de configuracion: {0}")]
    Config(String),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraccion fallida: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Error de serializacion: {0}")]
    Serialization(#[from] serde_json::Error),
}

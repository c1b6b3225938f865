// src/utils/text.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
// Leading bullet/dash decoration on list items
static VINETA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s\*\-•·]+").expect("Failed to compile VINETA_RE")
});

// Bare page numbers and "Página N de M" footers leak in as table rows
static RUIDO_PAGINA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*p[áa]gina\s+\d+(\s+de\s+\d+)?\s*$").expect("Failed to compile RUIDO_PAGINA_RE")
});

static NUMERO_SUELTO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d{1,3}\s*$").expect("Failed to compile NUMERO_SUELTO_RE")
});

/// Normalizes text for label matching: uppercase, Spanish accents folded to
/// their base letter, whitespace collapsed to single spaces.
///
/// The normalized form is only ever compared against label constants; it is
/// never stored in a record.
pub fn norm(texto: &str) -> String {
    let mut plano = String::with_capacity(texto.len());
    for c in texto.chars() {
        for mayus in c.to_uppercase() {
            plano.push(match mayus {
                'Á' | 'À' | 'Ä' | 'Â' => 'A',
                'É' | 'È' | 'Ë' | 'Ê' => 'E',
                'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
                'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
                'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
                'Ñ' => 'N',
                otro => otro,
            });
        }
    }
    plano.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips leading bullet decoration from a list item and collapses the
/// remaining whitespace.
pub fn limpiar_item(texto: &str) -> String {
    let sin_vineta = VINETA_RE.replace(texto, "");
    sin_vineta.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Detects rows that carry no information: blank lines, decorative
/// punctuation, page numbers and page footers.
pub fn es_ruido(texto: &str) -> bool {
    let recortado = texto.trim();
    if recortado.is_empty() {
        return true;
    }
    if !recortado.chars().any(|c| c.is_alphanumeric()) {
        return true;
    }
    RUIDO_PAGINA_RE.is_match(recortado) || NUMERO_SUELTO_RE.is_match(recortado)
}

/// Validates a cleaned list item before it is appended to a record: it must
/// still contain at least one letter and a minimum of substance.
pub fn es_contenido_valido(texto: &str) -> bool {
    let recortado = texto.trim();
    recortado.chars().count() >= 3 && recortado.chars().any(|c| c.is_alphabetic())
}

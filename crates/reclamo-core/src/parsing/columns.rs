use crate::error::ReclamoError;
use serde::Serialize;

// Inference keywords per canonical field. Matching is substring
// containment over normalized header names, first header wins.
const DATE_KEYWORDS: &[&str] = &["fecha"];
const PRODUCT_KEYWORDS: &[&str] = &["producto", "item"];
const COMPLAINT_KEYWORDS: &[&str] = &["queja", "reclamo", "descripcion", "problema", "asunto"];
const RESPONSE_KEYWORDS: &[&str] = &["respuesta", "solucion"];
const STATUS_KEYWORDS: &[&str] = &["estado"];

/// Normalize a header name for matching: trim, lower-case, spaces to
/// underscores.
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// User-supplied column names, one per canonical field. Unset fields fall
/// back to inference. A set field naming a column the dataset does not
/// have is an error, never silently ignored.
#[derive(Debug, Clone, Default)]
pub struct ColumnBindings {
    pub date: Option<String>,
    pub product: Option<String>,
    pub complaint: Option<String>,
    pub response: Option<String>,
    pub status: Option<String>,
}

/// A source column matched to a canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    /// Header exactly as it appears in the dataset.
    pub name: String,
    pub index: usize,
}

/// The resolved bindings for one dataset. `date` and `complaint` are
/// always present; the rest stay unbound when neither a binding nor an
/// inference keyword matches.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnMap {
    pub date: ResolvedColumn,
    pub complaint: ResolvedColumn,
    pub product: Option<ResolvedColumn>,
    pub response: Option<ResolvedColumn>,
    pub status: Option<ResolvedColumn>,
}

/// Map the dataset's headers to the canonical fields.
///
/// Explicit bindings take precedence unconditionally. Inference tests
/// each field's keyword list against the normalized headers; the date
/// field additionally falls back to the first column.
pub fn resolve_columns(
    headers: &[String],
    bindings: &ColumnBindings,
) -> Result<ColumnMap, ReclamoError> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

    let date = match resolve_field(headers, &normalized, "date", &bindings.date, DATE_KEYWORDS)? {
        Some(col) => col,
        // No date-like header: the first column stands in for it.
        None => match headers.first() {
            Some(name) => ResolvedColumn {
                name: name.clone(),
                index: 0,
            },
            None => return Err(missing_column("date", headers)),
        },
    };

    let complaint = resolve_field(
        headers,
        &normalized,
        "complaint",
        &bindings.complaint,
        COMPLAINT_KEYWORDS,
    )?
    .ok_or_else(|| missing_column("complaint", headers))?;

    let product = resolve_field(
        headers,
        &normalized,
        "product",
        &bindings.product,
        PRODUCT_KEYWORDS,
    )?;
    let response = resolve_field(
        headers,
        &normalized,
        "response",
        &bindings.response,
        RESPONSE_KEYWORDS,
    )?;
    let status = resolve_field(
        headers,
        &normalized,
        "status",
        &bindings.status,
        STATUS_KEYWORDS,
    )?;

    Ok(ColumnMap {
        date,
        complaint,
        product,
        response,
        status,
    })
}

/// Resolve one field: explicit binding first, keyword inference second.
fn resolve_field(
    headers: &[String],
    normalized: &[String],
    field: &str,
    binding: &Option<String>,
    keywords: &[&str],
) -> Result<Option<ResolvedColumn>, ReclamoError> {
    if let Some(wanted) = binding {
        let wanted_norm = normalize_header(wanted);
        let idx = normalized.iter().position(|h| *h == wanted_norm);
        return match idx {
            Some(index) => Ok(Some(ResolvedColumn {
                name: headers[index].clone(),
                index,
            })),
            None => Err(ReclamoError::UnknownColumn {
                field: field.to_string(),
                column: wanted.clone(),
            }),
        };
    }

    let hit = normalized
        .iter()
        .position(|h| keywords.iter().any(|k| h.contains(k)));
    Ok(hit.map(|index| ResolvedColumn {
        name: headers[index].clone(),
        index,
    }))
}

fn missing_column(field: &str, headers: &[String]) -> ReclamoError {
    let available = if headers.is_empty() {
        "(none)".to_string()
    } else {
        headers.join(", ")
    };
    ReclamoError::MissingColumn {
        field: field.to_string(),
        available,
    }
}

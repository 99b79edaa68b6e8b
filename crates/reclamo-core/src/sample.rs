use chrono::{Duration, Local};

use crate::model::{Cell, RawTable};
use crate::rng::SyntheticRng;

const PRODUCTS: [&str; 8] = [
    "Guantes de Seguridad",
    "Casco Industrial",
    "Botas de Trabajo",
    "Chaleco Reflectante",
    "Lentes de Protección",
    "Mascarilla N95",
    "Arnés de Seguridad",
    "Overol Industrial",
];

const COMPLAINTS: [&str; 5] = [
    "Producto defectuoso",
    "Color incorrecto",
    "Talla equivocada",
    "Entrega tardía",
    "Calidad baja",
];

const STATUS_LABELS: [&str; 3] = ["Resuelto", "En Proceso", "Pendiente"];
const STATUS_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

/// Synthetic demo dataset shaped like a real upload: plain text cells
/// under the usual Spanish headers. Nothing is pre-classified; the rows
/// flow through the normal pipeline.
pub fn sample_table(rows: usize, rng: &mut SyntheticRng) -> RawTable {
    let today = Local::now().date_naive();

    let mut out = Vec::with_capacity(rows);
    for i in 0..rows {
        let date = today - Duration::days(rng.days_between(0, 49) as i64);
        let product = PRODUCTS[rng.index(PRODUCTS.len())];
        let complaint = COMPLAINTS[i % COMPLAINTS.len()];
        let response = if rng.chance(0.7) {
            Cell::Text(format!("Respuesta a queja {}", i + 1))
        } else {
            Cell::Empty
        };

        out.push(vec![
            Cell::Text(date.to_string()),
            Cell::Text(product.to_string()),
            Cell::Text(complaint.to_string()),
            response,
            Cell::Text(weighted_status(rng).to_string()),
        ]);
    }

    RawTable {
        headers: vec![
            "fecha".into(),
            "producto".into(),
            "descripcion_queja".into(),
            "respuesta".into(),
            "estado".into(),
        ],
        rows: out,
    }
}

fn weighted_status(rng: &mut SyntheticRng) -> &'static str {
    let roll = rng.fraction();
    let mut acc = 0.0;
    for (label, weight) in STATUS_LABELS.iter().zip(STATUS_WEIGHTS) {
        acc += weight;
        if roll < acc {
            return label;
        }
    }
    STATUS_LABELS[STATUS_LABELS.len() - 1]
}

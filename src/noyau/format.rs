// src/noyau/format.rs
//
// Affichage d’un f64 dans la zone d’affichage.
// - décimal “le plus court qui se relit pareil” (Display de Rust)
// - notation exponentielle si |x| >= 1e21 ou 0 < |x| < 1e-6 (ex: 1e+21, 1.5e-7)
// - -0 s’affiche 0

/* ------------------------ Seuils ------------------------ */

const SEUIL_GRAND: f64 = 1e21;
const SEUIL_PETIT: f64 = 1e-6;

pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        let s = if x > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if (SEUIL_PETIT..SEUIL_GRAND).contains(&a) {
        return format!("{x}");
    }

    // {:e} donne "1e21" / "1.5e-7" : on ajoute le '+' des exposants positifs
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

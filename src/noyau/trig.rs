// src/noyau/trig.rs
//
// Trig flottante pour sin/cos/tan
// -------------------------------
// - L’unité d’angle est un PARAMÈTRE (pas d’état global)
// - Degrés : conversion x·π/180 avant l’appel
// - Résultat rendu tel quel, y compris non fini (pas de contrôle ici)

use std::f64::consts::PI;

use log::debug;

use super::erreur::EvaluationError;
use super::jetons::est_espace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    pub fn nom(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UniteAngle {
    #[default]
    Degres,
    Radians,
}

impl UniteAngle {
    pub fn basculer(self) -> Self {
        match self {
            UniteAngle::Degres => UniteAngle::Radians,
            UniteAngle::Radians => UniteAngle::Degres,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            UniteAngle::Degres => "Degrés",
            UniteAngle::Radians => "Radians",
        }
    }
}

/// Applique sin/cos/tan à `value`, convertie en radians si `unite` = degrés.
pub fn apply_trig(f: TrigFn, value: f64, unite: UniteAngle) -> f64 {
    let x = match unite {
        UniteAngle::Degres => value * PI / 180.0,
        UniteAngle::Radians => value,
    };

    match f {
        TrigFn::Sin => x.sin(),
        TrigFn::Cos => x.cos(),
        TrigFn::Tan => x.tan(),
    }
}

/// Bouton sin/cos/tan : lit le nombre en tête de l’affichage puis applique la fonction.
pub fn trig_depuis_texte(
    text: &str,
    f: TrigFn,
    unite: UniteAngle,
) -> Result<f64, EvaluationError> {
    let value = lire_nombre_initial(text).ok_or(EvaluationError::NumberExpected)?;
    let r = apply_trig(f, value, unite);
    debug!("{}({value}) [{}] = {r}", f.nom(), unite.libelle());
    Ok(r)
}

/* ------------------------ Lecture du nombre en tête ------------------------ */

/// Lit le plus long nombre décimal en tête de `text` (le reste est ignoré).
///
/// Forme acceptée après espaces initiaux :
///   [+-]? ( Infinity | chiffres [. chiffres?] | . chiffres ) ( [eE] [+-]? chiffres )?
///
/// "12+3" -> 12 ; "  -.5x" -> -0.5 ; "1e3" -> 1000 ; "1e" -> 1 ; "abc" -> None
pub fn lire_nombre_initial(text: &str) -> Option<f64> {
    let s = text.trim_start_matches(est_espace);
    let b = s.as_bytes();
    let mut i = 0;

    let negatif = match b.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    if s[i..].starts_with("Infinity") {
        return Some(if negatif {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let debut = i;
    let avant_point = compter_chiffres(&b[i..]);
    i += avant_point;

    let mut apres_point = 0;
    if b.get(i) == Some(&b'.') {
        apres_point = compter_chiffres(&b[i + 1..]);
        if avant_point > 0 || apres_point > 0 {
            i += 1 + apres_point;
        }
    }

    if avant_point == 0 && apres_point == 0 {
        return None;
    }

    // exposant : seulement s’il est complet
    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let n = compter_chiffres(&b[j..]);
        if n > 0 {
            i = j + n;
        }
    }

    let v: f64 = s[debut..i].parse().ok()?;
    Some(if negatif { -v } else { v })
}

fn compter_chiffres(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}

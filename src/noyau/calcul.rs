// src/noyau/calcul.rs
//
// Contrat côté appelant, autour de l’évaluateur :
// 1) filtre de caractères  [0-9+\-*/().\s]+  (avant le noyau)
// 2) evaluate
// 3) finitude du résultat (après le noyau)

use log::debug;

use super::erreur::EvaluationError;
use super::eval::{evaluate_detaille, Evaluation};
use super::jetons::est_espace;

/// Caractères acceptés à l’entrée du calcul (hors espaces).
const AUTORISES: &str = "0123456789+-*/().";

/// Vrai si le texte est non vide et ne contient que des caractères autorisés
/// ou des espaces.
pub fn caracteres_autorises(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| est_espace(c) || AUTORISES.contains(c))
}

/// Calcul complet (bouton "=") : valeur finie ou erreur classée.
#[cfg_attr(not(test), allow(dead_code))] // la vue passe par calculate_detaille
pub fn calculate(text: &str) -> Result<f64, EvaluationError> {
    calculate_detaille(text).map(|e| e.valeur)
}

/// Comme `calculate`, avec la démarche.
pub fn calculate_detaille(text: &str) -> Result<Evaluation, EvaluationError> {
    if !caracteres_autorises(text) {
        debug!("entrée refusée: {text:?}");
        return Err(EvaluationError::InvalidCharacters);
    }

    let e = evaluate_detaille(text)?;
    if !e.valeur.is_finite() {
        debug!("résultat non fini: {}", e.valeur);
        return Err(EvaluationError::NonFiniteResult);
    }

    Ok(e)
}

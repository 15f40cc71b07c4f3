//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> réduction -> f64
//!
//! Fonction pure de la chaîne d’entrée : aucune pile partagée entre deux appels,
//! la table des opérateurs est en lecture seule.
//! La finitude du résultat n’est PAS vérifiée ici (voir calcul.rs).

use log::debug;

use super::erreur::EvaluationError;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Résultat + démarche (jetons, RPN) pour le panneau d’explication.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression arithmétique.
///
/// `10/0` réussit (valeur infinie) ; c’est à l’appelant de classer ce cas.
#[cfg_attr(not(test), allow(dead_code))] // la vue passe par calculate_detaille
pub fn evaluate(text: &str) -> Result<f64, EvaluationError> {
    evaluate_detaille(text).map(|e| e.valeur)
}

/// Comme `evaluate`, avec la démarche en plus.
pub fn evaluate_detaille(text: &str) -> Result<Evaluation, EvaluationError> {
    // 1) Jetons
    let jetons = tokenize(text);
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons: [{jetons_txt}]");

    // 2) RPN
    let rpn = to_rpn(&jetons).inspect_err(|e| debug!("shunting-yard: {e}"))?;
    let rpn_txt = format_tokens(&rpn);
    debug!("rpn: [{rpn_txt}]");

    // 3) Réduction
    let valeur = eval_rpn(&rpn).inspect_err(|e| debug!("réduction: {e}"))?;
    debug!("valeur: {valeur}");

    Ok(Evaluation {
        valeur,
        jetons: jetons_txt,
        rpn: rpn_txt,
    })
}

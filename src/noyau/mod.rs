//! Noyau flottant (sans exécution de code)
//!
//! Organisation interne :
//! - erreur.rs     : erreurs classées (EvaluationError)
//! - jetons.rs     : tokenisation
//! - operateurs.rs : table précédence / associativité
//! - rpn.rs        : shunting-yard + réduction postfix
//! - eval.rs       : pipeline du noyau (evaluate)
//! - calcul.rs     : contrat appelant (filtre de caractères + finitude)
//! - trig.rs       : sin/cos/tan + unité d’angle en paramètre
//! - format.rs     : affichage d’un f64

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;
pub mod trig;

#[cfg(test)]
mod tests_arith;


// API publique minimale
pub use calcul::calculate_detaille;
pub use format::format_nombre;
pub use trig::{trig_depuis_texte, TrigFn, UniteAngle};

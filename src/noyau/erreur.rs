// src/noyau/erreur.rs
//
// Erreurs classées du noyau.
// - MismatchedParentheses / InvalidExpression : levées par l’évaluateur (rpn.rs)
// - NonFiniteResult / InvalidCharacters       : levées par l’appelant (calcul.rs)
// - NumberExpected                            : trig sans nombre à l’affichage (trig.rs)

/// Tout ce qui peut faire échouer un calcul.
///
/// Le message (Display) est celui montré à l’utilisateur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// `)` sans `(` correspondante, ou `(` jamais fermée.
    #[error("Parenthèses non appariées")]
    MismatchedParentheses,

    /// Opérateur sans deux opérandes, ou pile finale ≠ 1 valeur.
    #[error("Expression invalide")]
    InvalidExpression,

    /// Résultat infini ou NaN (division par zéro, dépassement).
    #[error("Division par zéro ou résultat invalide")]
    NonFiniteResult,

    /// Le texte contient autre chose que `0-9 + - * / ( ) .` et des espaces.
    #[error("Caractères invalides")]
    InvalidCharacters,

    /// Fonction trig demandée sans nombre lisible à l’affichage.
    #[error("Entrez d’abord un nombre")]
    NumberExpected,
}

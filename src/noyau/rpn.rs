// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Token en RPN (postfix)
// - Puis réduire la RPN avec une pile de valeurs
//
// Règles:
// - Operator(c) sans entrée dans la table (caractère non filtré par l’appelant) : ignoré
// - Number dont le littéral n’est pas lisible en f64 ("1.2.3", ".") : ignoré
//   => ces cas finissent en InvalidExpression ou MismatchedParentheses, pas en erreur dédiée.

use log::trace;

use super::erreur::EvaluationError;
use super::jetons::Token;
use super::operateurs::{appliquer, doit_depiler, info_operateur};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// La pile d’opérateurs ne contient que des opérateurs et des '(' ;
/// la sortie ne contient que des Number et des Operator.
///
/// Exemple:
///   tokens: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, EvaluationError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for tok in tokens {
        match tok {
            Token::Number(l) => {
                if l.valeur().is_some() {
                    out.push(tok.clone());
                } else {
                    trace!("littéral illisible ignoré: {:?}", l.texte());
                }
            }

            Token::Operator(c) => {
                let Some(courant) = info_operateur(*c) else {
                    trace!("symbole sans métadonnées ignoré: {c:?}");
                    continue;
                };

                // dépile tant que le sommet est un opérateur (pas '(')
                // et que précédence/associativité l’exigent
                while let Some(Token::Operator(s)) = ops.last() {
                    let Some(sommet) = info_operateur(*s) else {
                        break;
                    };
                    if !doit_depiler(courant, sommet) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok.clone());
            }

            Token::LeftParen => ops.push(Token::LeftParen),

            Token::RightParen => {
                // dépile jusqu’à '(' (qui est jetée)
                loop {
                    match ops.pop() {
                        Some(Token::LeftParen) => break,
                        Some(op) => out.push(op),
                        None => return Err(EvaluationError::MismatchedParentheses),
                    }
                }
            }
        }
    }

    // vide la pile ops : toute parenthèse restante est une '(' non fermée
    while let Some(op) = ops.pop() {
        if matches!(op, Token::LeftParen | Token::RightParen) {
            return Err(EvaluationError::MismatchedParentheses);
        }
        out.push(op);
    }

    Ok(out)
}

/// Réduit une RPN en une valeur.
///
/// - Number : empile
/// - Operator : dépile b puis a, empile a OP b (il faut au moins 2 valeurs)
/// - à la fin : exactement une valeur, sinon InvalidExpression
pub fn eval_rpn(rpn: &[Token]) -> Result<f64, EvaluationError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Token::Number(l) => {
                if let Some(v) = l.valeur() {
                    st.push(v);
                }
            }

            Token::Operator(c) => {
                let Some(op) = info_operateur(*c) else {
                    continue;
                };
                let b = st.pop().ok_or(EvaluationError::InvalidExpression)?;
                let a = st.pop().ok_or(EvaluationError::InvalidExpression)?;
                st.push(appliquer(op, a, b));
            }

            // to_rpn ne sort jamais de parenthèse
            Token::LeftParen | Token::RightParen => {
                return Err(EvaluationError::MismatchedParentheses);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvaluationError::InvalidExpression),
    }
}

//! Tests arithmétiques (campagne) : exemples travaillés + classement des erreurs.
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - Les espaces sont retirés AVANT la tokenisation : "3 4" se lit 34.
//!   Pour deux nombres sans opérateur on passe donc par des parenthèses : "(3)(4)".
//! - Un littéral illisible ("1.2.3") ou un symbole inconnu est ignoré par l’évaluateur :
//!   l’erreur remonte en InvalidExpression, pas en erreur dédiée.
//! - La finitude n’est vérifiée que par `calculate` (pas par `evaluate`).

use super::calcul::{calculate, caracteres_autorises};
use super::erreur::EvaluationError;
use super::eval::{evaluate, evaluate_detaille};
use super::format::format_nombre;
use super::jetons::{est_espace, tokenize, Litteral, Token};
use super::operateurs::{doit_depiler, info_operateur, Associativite, InfoOperateur};
use super::trig::{apply_trig, lire_nombre_initial, trig_depuis_texte, TrigFn, UniteAngle};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_err(expr: &str, attendu: EvaluationError) {
    assert_eq!(evaluate(expr), Err(attendu), "expr={expr:?}");
}

fn num(s: &str) -> Token {
    Token::Number(Litteral(s.to_string()))
}

fn assert_proche(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "{a} ≉ {b}");
}

/* ------------------------ Tokenisation ------------------------ */

#[test]
fn jetons_base() {
    assert_eq!(
        tokenize("(2+3)*4"),
        vec![
            Token::LeftParen,
            num("2"),
            Token::Operator('+'),
            num("3"),
            Token::RightParen,
            Token::Operator('*'),
            num("4"),
        ]
    );
}

#[test]
fn jetons_cas_limites() {
    // vide -> aucun jeton
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \t ").is_empty());

    // plusieurs points : un seul littéral, pas de rejet
    assert_eq!(tokenize("1.2.3"), vec![num("1.2.3")]);

    // opérateurs consécutifs : deux jetons
    assert_eq!(
        tokenize("3++4"),
        vec![
            num("3"),
            Token::Operator('+'),
            Token::Operator('+'),
            num("4")
        ]
    );

    // espaces retirés avant lecture : les chiffres se recollent
    assert_eq!(tokenize(" 1 2 . 5 "), vec![num("12.5")]);

    // caractère hors filtre : passe comme Operator
    assert_eq!(tokenize("2x"), vec![num("2"), Token::Operator('x')]);
}

#[test]
fn jetons_deterministes() {
    let s = "((1.5 + 2) * 3 - 4 / 5)";
    assert_eq!(tokenize(s), tokenize(s));
}

/* ------------------------ Table des opérateurs ------------------------ */

#[test]
fn table_operateurs() {
    let plus = info_operateur('+').expect("+");
    let fois = info_operateur('*').expect("*");
    assert_eq!(plus.precedence, 1);
    assert_eq!(fois.precedence, 2);
    for c in ['+', '-', '*', '/'] {
        assert_eq!(
            info_operateur(c).map(|op| op.associativite),
            Some(Associativite::Gauche)
        );
    }
    assert!(info_operateur('^').is_none());
    assert!(info_operateur('(').is_none());

    // gauche : même précédence => on dépile
    assert!(doit_depiler(plus, plus));
    assert!(doit_depiler(plus, fois));
    assert!(!doit_depiler(fois, plus));
}

#[test]
fn regle_associativite_droite() {
    // opérateur fictif (aucun dans la table) : vérifie seulement la règle
    let puissance = InfoOperateur {
        symbole: '^',
        precedence: 3,
        associativite: Associativite::Droite,
    };
    let fois = info_operateur('*').expect("*");

    assert!(!doit_depiler(&puissance, &puissance));
    assert!(!doit_depiler(&puissance, fois));
    assert!(doit_depiler(fois, &puissance));
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn arith_exemples() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("2*3+4"), 10.0);
    assert_eq!(eval_ok("1.5 + 2.25"), 3.75);
    assert_eq!(eval_ok(" 2 * ( 3 + 4 ) "), 14.0);
    assert_eq!(eval_ok("((7))"), 7.0);
    assert_eq!(eval_ok(".5*4"), 2.0);
    assert_eq!(eval_ok("3.*2"), 6.0);
    assert_eq!(eval_ok("0.1+0.2"), 0.1 + 0.2);
}

#[test]
fn arith_associativite_gauche() {
    assert_eq!(eval_ok("8-3-2"), 3.0);
    assert_eq!(eval_ok("8/4/2"), 1.0);
    assert_eq!(eval_ok("2-3+4"), 3.0);
    assert_eq!(eval_ok("12/3*2"), 8.0);
    assert_eq!(eval_ok("8-(3-2)"), 7.0);
}

#[test]
fn arith_division_par_zero_non_classee() {
    // evaluate réussit : c’est l’appelant qui juge la finitude
    assert_eq!(eval_ok("10/0"), f64::INFINITY);
    assert_eq!(eval_ok("0-10/0"), f64::NEG_INFINITY);
    assert!(eval_ok("0/0").is_nan());
}

#[test]
fn arith_parentheses_non_appariees() {
    assert_err("(1+2", EvaluationError::MismatchedParentheses);
    assert_err("1+2)", EvaluationError::MismatchedParentheses);
    assert_err(")(", EvaluationError::MismatchedParentheses);
    assert_err("((1)", EvaluationError::MismatchedParentheses);
    assert_err("(", EvaluationError::MismatchedParentheses);
}

#[test]
fn arith_expression_invalide() {
    assert_err("1+", EvaluationError::InvalidExpression);
    assert_err("", EvaluationError::InvalidExpression);
    assert_err("+", EvaluationError::InvalidExpression);
    assert_err("()", EvaluationError::InvalidExpression);
    assert_err("(3)(4)", EvaluationError::InvalidExpression);
    assert_err("3++4", EvaluationError::InvalidExpression);
    assert_err("-3", EvaluationError::InvalidExpression);
}

#[test]
fn arith_espaces_recollent_les_chiffres() {
    // espaces retirés avant le regroupement : "3 4" est le littéral 34
    assert_eq!(eval_ok("3 4"), 34.0);
    assert_eq!(eval_ok("1 2 + 3"), 15.0);
    assert_eq!(eval_ok("2 . 5 * 2"), 5.0);
}

#[test]
fn arith_litteraux_et_symboles_ignores() {
    assert_err("1.2.3", EvaluationError::InvalidExpression);
    assert_err("2*1.2.3", EvaluationError::InvalidExpression);
    assert_err(".", EvaluationError::InvalidExpression);
    assert_err("3a4", EvaluationError::InvalidExpression);
    assert_err("2+a", EvaluationError::InvalidExpression);
    assert_err("(a", EvaluationError::MismatchedParentheses);
}

#[test]
fn arith_demarche() {
    let e = evaluate_detaille("2+3*4").expect("ok");
    assert_eq!(e.valeur, 14.0);
    assert_eq!(e.jetons, "2 + 3 * 4");
    assert_eq!(e.rpn, "2 3 4 * +");

    let e = evaluate_detaille("(2+3)*4").expect("ok");
    assert_eq!(e.rpn, "2 3 + 4 *");
}

#[test]
fn arith_imbrication_profonde_sans_recursion() {
    let n = 5000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_ok(&expr), 1.0);
}

/* ------------------------ Contrat appelant ------------------------ */

#[test]
fn appelant_filtre_caracteres() {
    assert!(caracteres_autorises("(1 + 2) * 3.5 / 4 - 5"));
    assert!(caracteres_autorises("   "));
    assert!(!caracteres_autorises(""));
    assert!(!caracteres_autorises("2^3"));
    assert!(!caracteres_autorises("1e5"));
    assert!(!caracteres_autorises("alert(1)"));

    assert_eq!(calculate("2^3"), Err(EvaluationError::InvalidCharacters));
    assert_eq!(calculate(""), Err(EvaluationError::InvalidCharacters));
    assert_eq!(calculate("   "), Err(EvaluationError::InvalidExpression));
}

#[test]
fn appelant_ensemble_des_espaces() {
    // espaces du filtre d’origine : tabulations, NBSP, BOM, espaces typographiques…
    for e in ['\t', '\n', '\u{000B}', '\u{00A0}', '\u{2003}', '\u{3000}', '\u{FEFF}'] {
        let expr = format!("1{e}+2");
        assert!(est_espace(e), "{e:?}");
        assert_eq!(calculate(&expr), Ok(3.0), "expr={expr:?}");
    }

    // U+0085 (NEL) : espace pour Rust, pas pour le filtre
    assert!(!est_espace('\u{0085}'));
    assert_eq!(
        calculate("1\u{0085}+2"),
        Err(EvaluationError::InvalidCharacters)
    );
    assert_eq!(tokenize("1\u{FEFF}2"), vec![num("12")]);
}

#[test]
fn appelant_finitude() {
    assert_eq!(calculate("2+3*4"), Ok(14.0));
    assert_eq!(calculate("10/0"), Err(EvaluationError::NonFiniteResult));
    assert_eq!(calculate("0/0"), Err(EvaluationError::NonFiniteResult));
    assert_eq!(calculate("(1+2"), Err(EvaluationError::MismatchedParentheses));

    // dépassement : 1e200 * 1e200
    let grand = format!("1{}", "0".repeat(200));
    assert_eq!(
        calculate(&format!("{grand}*{grand}")),
        Err(EvaluationError::NonFiniteResult)
    );
}

#[test]
fn appelant_messages() {
    assert_eq!(
        EvaluationError::NonFiniteResult.to_string(),
        "Division par zéro ou résultat invalide"
    );
    assert_eq!(
        EvaluationError::MismatchedParentheses.to_string(),
        "Parenthèses non appariées"
    );
}

/* ------------------------ Trig ------------------------ */

#[test]
fn trig_degres_radians() {
    assert_proche(apply_trig(TrigFn::Sin, 90.0, UniteAngle::Degres), 1.0);
    assert_eq!(apply_trig(TrigFn::Cos, 0.0, UniteAngle::Degres), 1.0);
    assert_eq!(apply_trig(TrigFn::Sin, 0.0, UniteAngle::Radians), 0.0);
    assert_proche(apply_trig(TrigFn::Tan, 45.0, UniteAngle::Degres), 1.0);
    assert_proche(apply_trig(TrigFn::Cos, 60.0, UniteAngle::Degres), 0.5);
    assert_proche(
        apply_trig(TrigFn::Sin, std::f64::consts::FRAC_PI_6, UniteAngle::Radians),
        0.5,
    );
}

#[test]
fn trig_resultat_rendu_tel_quel() {
    // tan(90°) : pas d’erreur, très grand nombre
    assert!(apply_trig(TrigFn::Tan, 90.0, UniteAngle::Degres).abs() > 1e15);
    assert!(apply_trig(TrigFn::Sin, f64::INFINITY, UniteAngle::Radians).is_nan());
}

#[test]
fn trig_depuis_affichage() {
    assert_eq!(
        trig_depuis_texte("abc", TrigFn::Sin, UniteAngle::Degres),
        Err(EvaluationError::NumberExpected)
    );
    assert_eq!(
        trig_depuis_texte("", TrigFn::Cos, UniteAngle::Radians),
        Err(EvaluationError::NumberExpected)
    );

    // seul le nombre en tête compte : "30+5" -> sin(30°)
    let v = trig_depuis_texte("30+5", TrigFn::Sin, UniteAngle::Degres).expect("ok");
    assert_proche(v, 0.5);
}

#[test]
fn trig_lecture_nombre_initial() {
    assert_eq!(lire_nombre_initial("12+3"), Some(12.0));
    assert_eq!(lire_nombre_initial("  -.5x"), Some(-0.5));
    assert_eq!(lire_nombre_initial("1e3"), Some(1000.0));
    assert_eq!(lire_nombre_initial("1e"), Some(1.0));
    assert_eq!(lire_nombre_initial("2.5e-1*4"), Some(0.25));
    assert_eq!(lire_nombre_initial("1.2.3"), Some(1.2));
    assert_eq!(lire_nombre_initial("5."), Some(5.0));
    assert_eq!(lire_nombre_initial("Infinity"), Some(f64::INFINITY));
    assert_eq!(lire_nombre_initial("-Infinity"), Some(f64::NEG_INFINITY));
    assert_eq!(lire_nombre_initial("abc"), None);
    assert_eq!(lire_nombre_initial("."), None);
    assert_eq!(lire_nombre_initial("-"), None);
    assert_eq!(lire_nombre_initial("(3)"), None);
}

#[test]
fn trig_bascule_unite() {
    assert_eq!(UniteAngle::default(), UniteAngle::Degres);
    assert_eq!(UniteAngle::Degres.basculer(), UniteAngle::Radians);
    assert_eq!(UniteAngle::Radians.basculer(), UniteAngle::Degres);
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn format_affichage() {
    assert_eq!(format_nombre(14.0), "14");
    assert_eq!(format_nombre(2.5), "2.5");
    assert_eq!(format_nombre(-3.75), "-3.75");
    assert_eq!(format_nombre(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_nombre(-0.0), "0");
    assert_eq!(format_nombre(123456.0), "123456");
    assert_eq!(format_nombre(0.000001), "0.000001");
    assert_eq!(format_nombre(1e21), "1e+21");
    assert_eq!(format_nombre(-1e21), "-1e+21");
    assert_eq!(format_nombre(1.5e-7), "1.5e-7");
    assert_eq!(format_nombre(f64::INFINITY), "Infinity");
    assert_eq!(format_nombre(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_nombre(f64::NAN), "NaN");
}

#[test]
fn format_resultat_relu_par_le_noyau() {
    // un résultat affiché (hors notation exponentielle) se recalcule tel quel
    for expr in ["2+3*4", "1/3", "0.1+0.2", "7/8-2"] {
        let v = eval_ok(expr);
        let relu = eval_ok(&format!("{}*1", format_nombre(v).trim_start_matches('-')));
        assert_eq!(relu, v.abs(), "expr={expr:?}");
    }
}

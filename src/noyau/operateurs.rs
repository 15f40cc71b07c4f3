// src/noyau/operateurs.rs
//
// Table statique des opérateurs binaires (précédence + associativité).
// Lecture seule, partagée par tous les appels.
//
// NOTE: aucune entrée n’est associative à droite pour l’instant, mais le champ
// reste dans la table : la règle de dépilement en dépend (futur ^ ou moins unaire).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug)]
pub struct InfoOperateur {
    pub symbole: char,
    pub precedence: u8,
    pub associativite: Associativite,
}

static OPERATEURS: [InfoOperateur; 4] = [
    InfoOperateur {
        symbole: '+',
        precedence: 1,
        associativite: Associativite::Gauche,
    },
    InfoOperateur {
        symbole: '-',
        precedence: 1,
        associativite: Associativite::Gauche,
    },
    InfoOperateur {
        symbole: '*',
        precedence: 2,
        associativite: Associativite::Gauche,
    },
    InfoOperateur {
        symbole: '/',
        precedence: 2,
        associativite: Associativite::Gauche,
    },
];

/// Métadonnées d’un symbole, ou None si ce n’est pas un opérateur connu.
pub fn info_operateur(c: char) -> Option<&'static InfoOperateur> {
    OPERATEURS.iter().find(|op| op.symbole == c)
}

/// Faut-il sortir `sommet` (haut de pile) avant d’empiler `courant` ?
///
/// - gauche : precedence(courant) <= precedence(sommet)
/// - droite : precedence(courant) <  precedence(sommet)
pub fn doit_depiler(courant: &InfoOperateur, sommet: &InfoOperateur) -> bool {
    match courant.associativite {
        Associativite::Gauche => courant.precedence <= sommet.precedence,
        Associativite::Droite => courant.precedence < sommet.precedence,
    }
}

/// Applique `a OP b` en flottant IEEE-754.
///
/// Pas de cas spécial pour /0 : inf / NaN remontent tels quels,
/// c’est l’appelant qui vérifie la finitude.
pub fn appliquer(op: &InfoOperateur, a: f64, b: f64) -> f64 {
    match op.symbole {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        '/' => a / b,
        _ => f64::NAN,
    }
}

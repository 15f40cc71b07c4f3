// src/noyau/jetons.rs

/// Littéral numérique tel que scanné (chiffres et points).
///
/// La conversion en f64 est faite à la consommation : "1.2.3" reste
/// un seul littéral, et c’est `valeur()` qui dira s’il est lisible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Litteral(pub String);

impl Litteral {
    pub fn valeur(&self) -> Option<f64> {
        self.0.parse::<f64>().ok()
    }

    pub fn texte(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Number(Litteral),

    // + - * / ; tout autre caractère passe aussi ici (pas de re-validation)
    Operator(char),

    LeftParen,
    RightParen,
}

/// Espaces reconnus (même ensemble que `\s` du filtre d’origine).
///
/// NOTE: différent de `char::is_whitespace` : U+0085 n’en fait pas partie, U+FEFF si.
pub fn est_espace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn est_caractere_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenize une chaîne en jetons.
///
/// - les espaces sont ignorés (jamais de jeton “espace”)
/// - une suite maximale de [0-9.] donne un seul Number (même "1.2.3")
/// - ( et ) donnent LeftParen / RightParen
/// - tout autre caractère donne Operator(c)
///
/// Totale : aucune erreur possible.
pub fn tokenize(s: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut nombre = String::new();

    for c in s.chars().filter(|c| !est_espace(*c)) {
        if est_caractere_nombre(c) {
            nombre.push(c);
            continue;
        }

        if !nombre.is_empty() {
            out.push(Token::Number(Litteral(std::mem::take(&mut nombre))));
        }

        out.push(match c {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            _ => Token::Operator(c),
        });
    }

    if !nombre.is_empty() {
        out.push(Token::Number(Litteral(nombre)));
    }

    out
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Token::Number(l) => l.texte().to_string(),
            Token::Operator(c) => c.to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

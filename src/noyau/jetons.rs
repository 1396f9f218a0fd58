// src/noyau/jetons.rs
//
// Saisie -> forme arithmétique -> jetons.
//
// normalize : glyphes (×, ÷, −) -> pourcentages -> assainissement
// tokenize  : forme normalisée -> Vec<Tok>

use super::erreur::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // moins unaire : produit par to_rpn seulement, jamais par tokenize
    Neg,

    LPar,
    RPar,
}

fn est_chiffre_ou_point(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Alphabet arithmétique sûr (tout le reste est jeté).
fn est_sur(c: char) -> bool {
    est_chiffre_ou_point(c) || matches!(c, '+' | '-' | '*' | '/' | '(' | ')')
}

/// Transforme une saisie en chaîne strictement arithmétique.
///
/// L’ordre compte :
/// 1. glyphes décoratifs -> `*`, `/`, `-`
/// 2. littéral numérique suivi de `%` -> `(littéral/100)`
///    (le `%` ne porte que sur le littéral juste avant, jamais sur une parenthèse)
/// 3. tout caractère hors `0-9 . + - * / ( )` est retiré
pub fn normalize(expression: &str) -> String {
    let chars: Vec<char> = expression
        .chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            _ => c,
        })
        .collect();

    let mut out = String::with_capacity(chars.len() + 8);
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if !est_chiffre_ou_point(c) {
            out.push(c);
            i += 1;
            continue;
        }

        // Littéral : plus longue suite de chiffres/points
        let start = i;
        while i < chars.len() && est_chiffre_ou_point(chars[i]) {
            i += 1;
        }
        let litteral = &chars[start..i];

        let a_un_chiffre = litteral.iter().any(|c| c.is_ascii_digit());
        if a_un_chiffre && i < chars.len() && chars[i] == '%' {
            out.push('(');
            out.extend(litteral);
            out.push_str("/100)");
            i += 1; // consomme le '%'
        } else {
            out.extend(litteral);
        }
    }

    // Défense en profondeur : la saisie est déjà contrainte, on filtre quand même.
    out.retain(est_sur);
    out
}

/// Tokenize une forme normalisée.
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, .5, 5.)
/// - opérateurs + - * /
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            _ if est_chiffre_ou_point(c) => {
                let start = i;
                while i < chars.len() && est_chiffre_ou_point(chars[i]) {
                    i += 1;
                }
                let litteral: String = chars[start..i].iter().collect();
                let v = litteral
                    .parse::<f64>()
                    .map_err(|_| ErreurCalc::malformee(format!("nombre invalide: '{litteral}'")))?;
                out.push(Tok::Num(v));
                continue;
            }
            _ => return Err(ErreurCalc::malformee(format!("caractère inattendu: '{c}'"))),
        };

        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

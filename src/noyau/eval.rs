//! Noyau — évaluation (pipeline réel)
//!
//! normalize -> borne de longueur -> jetons -> RPN -> valeur -> finitude
//!
//! Fonction pure : ne connaît que la chaîne, jamais l’état de saisie.

use tracing::trace;

use super::erreur::ErreurCalc;
use super::jetons::{format_tokens, normalize, tokenize};
use super::limites::Limites;
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une saisie et retourne une valeur finie.
///
/// - forme normalisée vide => 0
/// - forme normalisée plus longue que `limites.longueur_max_eval` => `TropLong`
/// - grammaire invalide => `Malformee`
/// - ±∞ ou NaN => `NonFini`
pub fn evaluate(expression: &str, limites: &Limites) -> Result<f64, ErreurCalc> {
    let t = normalize(expression);
    if t.is_empty() {
        return Ok(0.0);
    }

    let max = limites.longueur_max_eval;
    if t.len() > max {
        return Err(ErreurCalc::TropLong {
            longueur: t.len(),
            max,
        });
    }

    let jetons = tokenize(&t)?;
    let rpn = to_rpn(&jetons)?;
    trace!(forme = %t, rpn = %format_tokens(&rpn), "rpn");

    let v = eval_rpn(&rpn)?;
    if !v.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    Ok(v)
}

//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - limites.rs : bornes (longueur de saisie, d’évaluation) + constantes d’affichage
//! - erreur.rs  : erreurs d’évaluation
//! - saisie.rs  : état de la saisie (ajouts validés au fil de la frappe)
//! - jetons.rs  : normalisation (glyphes, %, assainissement) + tokenisation
//! - rpn.rs     : shunting-yard + évaluation de la RPN
//! - eval.rs    : pipeline complet
//! - format.rs  : texte affichable d’un résultat
//! - session.rs : touches -> saisie -> aperçu / calcul final

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod limites;
pub mod rpn;
pub mod saisie;
pub mod session;


#[cfg(test)]
mod tests_eval;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use session::{Session, Touche};

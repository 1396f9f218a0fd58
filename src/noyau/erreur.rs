// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs d’évaluation.
///
/// Aucune n’est fatale : l’aperçu les avale (affiche `0`),
/// le calcul final les montre (`Err`) sans toucher à la saisie.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    /// Forme normalisée trop longue.
    #[error("expression trop longue ({longueur} > {max})")]
    TropLong { longueur: usize, max: usize },

    /// Syntaxe invalide (opérateur final, parenthèse orpheline, ...).
    #[error("expression invalide: {0}")]
    Malformee(String),

    /// Division par zéro, dépassement, NaN.
    #[error("résultat non fini")]
    NonFini,
}

impl ErreurCalc {
    pub(crate) fn malformee(msg: impl Into<String>) -> Self {
        Self::Malformee(msg.into())
    }
}

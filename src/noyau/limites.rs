// src/noyau/limites.rs
//
// Bornes et constantes d’affichage du noyau.
// Un seul endroit à toucher si on veut une calculatrice plus “large”.

/// Longueur max de la saisie (au-delà : ajout refusé sans bruit).
pub const LONGUEUR_MAX_SAISIE: usize = 60;

/// Longueur max de la forme arithmétique normalisée (au-delà : erreur).
pub const LONGUEUR_MAX_EVAL: usize = 200;

/// Au-delà de cette longueur, l’affichage bascule en précision fixe.
pub const SEUIL_AFFICHAGE: usize = 18;

/// Chiffres significatifs gardés en précision fixe.
pub const CHIFFRES_SIGNIFICATIFS: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    pub longueur_max_saisie: usize,
    pub longueur_max_eval: usize,
    pub seuil_affichage: usize,
    pub chiffres_significatifs: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            longueur_max_saisie: LONGUEUR_MAX_SAISIE,
            longueur_max_eval: LONGUEUR_MAX_EVAL,
            seuil_affichage: SEUIL_AFFICHAGE,
            chiffres_significatifs: CHIFFRES_SIGNIFICATIFS,
        }
    }
}

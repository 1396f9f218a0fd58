//! src/noyau/session.rs
//!
//! Session de calcul : la saisie + ce qu’affiche la ligne “résultat”.
//!
//! Rôle : recevoir les touches (abstraites, sans souci du clavier ou de la souris),
//! muter la saisie, puis recalculer l’aperçu.
//!
//! Politique d’erreur :
//! - aperçu (frappe en cours) : toute erreur => "0", la saisie n’est jamais touchée
//! - calcul final (`=`)       : erreur => MARQUEUR_ERREUR, saisie laissée telle quelle

use tracing::debug;

use super::erreur::ErreurCalc;
use super::eval::evaluate;
use super::format::format_for_display;
use super::jetons::normalize;
use super::limites::Limites;
use super::saisie::EtatExpression;

/// Ce qu’affiche la ligne résultat après un `=` raté.
pub const MARQUEUR_ERREUR: &str = "Err";

/// Touches abstraites reçues par le noyau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(char),
    Pourcent,
    ParenOuvrante,
    ParenFermante,
    Egal,
    Effacer,
    ToutEffacer,
}

#[derive(Clone, Debug)]
pub struct Session {
    saisie: EtatExpression,
    limites: Limites,

    resultat: String,
    erreur: Option<ErreurCalc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::avec_limites(Limites::default())
    }
}

impl Session {
    pub fn avec_limites(limites: Limites) -> Self {
        let mut s = Self {
            saisie: EtatExpression::avec_limites(limites),
            limites,
            resultat: String::new(),
            erreur: None,
        };
        s.rafraichir();
        s
    }

    /* ------------------------ Lectures (affichage) ------------------------ */

    /// Texte brut de la saisie (ligne principale).
    pub fn expression(&self) -> &str {
        self.saisie.snapshot()
    }

    /// Ligne résultat : aperçu, ou MARQUEUR_ERREUR après un `=` raté.
    pub fn resultat(&self) -> &str {
        &self.resultat
    }

    /// Erreur du dernier `=` (effacée à la mutation suivante).
    pub fn erreur(&self) -> Option<&ErreurCalc> {
        self.erreur.as_ref()
    }

    pub fn est_evalue(&self) -> bool {
        self.saisie.est_evalue()
    }

    /* ------------------------ Entrée ------------------------ */

    pub fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => {
                self.saisie.push_digit_or_dot(d);
            }
            Touche::Point => {
                self.saisie.push_digit_or_dot('.');
            }
            Touche::Operateur(op) => {
                self.saisie.push_operator(op);
            }
            Touche::Pourcent => {
                self.saisie.push_percent();
            }
            Touche::ParenOuvrante => {
                self.saisie.push_paren_open();
            }
            Touche::ParenFermante => {
                self.saisie.push_paren_close();
            }
            Touche::Effacer => self.saisie.delete_last(),
            Touche::ToutEffacer => self.saisie.clear(),
            Touche::Egal => {
                self.equals();
                return;
            }
        }
        self.rafraichir();
    }

    /// Calcul final : le résultat formaté devient la nouvelle saisie.
    pub fn equals(&mut self) {
        if self.saisie.is_empty() {
            return;
        }

        debug!(expression = self.saisie.snapshot(), "calcul demandé");
        match evaluate(self.saisie.snapshot(), &self.limites) {
            Ok(v) => {
                let texte = format_for_display(v, &self.limites);
                debug!(resultat = %texte, "calcul réussi");
                self.saisie.set_resultat(texte);
                self.rafraichir();
            }
            Err(e) => {
                debug!(erreur = %e, "calcul impossible");
                self.resultat = MARQUEUR_ERREUR.to_string();
                self.erreur = Some(e);
            }
        }
    }

    /// Aperçu en direct : jamais d’erreur visible, "0" par défaut.
    pub fn apercu(&self) -> String {
        let expression = self.saisie.snapshot();
        if !normalize(expression).contains(|c: char| c.is_ascii_digit()) {
            return "0".to_string();
        }

        match evaluate(expression, &self.limites) {
            Ok(v) => format_for_display(v, &self.limites),
            Err(_) => "0".to_string(),
        }
    }

    fn rafraichir(&mut self) {
        self.erreur = None;
        self.resultat = self.apercu();
    }
}

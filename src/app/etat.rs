//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir la session du noyau + l’état purement “interface”
//! (répétition de DEL maintenu) et traduire le clavier en touches abstraites.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Session::appliquer`.
//! - Le temps vient de l’appelant (horloge egui) : tout est testable sans fenêtre.

use eframe::egui;

use crate::noyau::{Session, Touche};

/// DEL maintenu : attente avant la première répétition (s).
pub const DELAI_REPETITION: f64 = 0.5;

/// DEL maintenu : intervalle entre deux répétitions (s).
pub const INTERVALLE_REPETITION: f64 = 0.09;

/// Répétition de l’effacement tant que DEL reste enfoncé.
///
/// Un effacement immédiat à l’appui, puis un toutes les
/// `INTERVALLE_REPETITION` secondes une fois `DELAI_REPETITION` écoulé.
#[derive(Clone, Debug, Default)]
pub struct RepetitionEffacement {
    appui: Option<f64>,
    repetitions: usize,
}

impl RepetitionEffacement {
    /// À appeler à chaque frame ; renvoie le nombre d’effacements à faire.
    pub fn tick(&mut self, appuye: bool, maintenant: f64) -> usize {
        if !appuye {
            self.appui = None;
            self.repetitions = 0;
            return 0;
        }

        let Some(debut) = self.appui else {
            self.appui = Some(maintenant);
            return 1;
        };

        let ecoule = maintenant - debut - DELAI_REPETITION;
        if ecoule < INTERVALLE_REPETITION {
            return 0;
        }

        let dues = (ecoule / INTERVALLE_REPETITION).floor() as usize;
        let a_faire = dues.saturating_sub(self.repetitions);
        self.repetitions = dues;
        a_faire
    }

    pub fn en_cours(&self) -> bool {
        self.appui.is_some()
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub session: Session,
    pub repetition: RepetitionEffacement,
}

impl AppCalc {
    pub fn appliquer_toutes(&mut self, touches: impl IntoIterator<Item = Touche>) {
        for t in touches {
            self.session.appliquer(t);
        }
    }
}

/* ------------------------ Clavier -> touches ------------------------ */

/// Caractère tapé -> touche (None si sans rapport avec la calculatrice).
pub fn touche_depuis_texte(c: char) -> Option<Touche> {
    match c {
        '0'..='9' => Some(Touche::Chiffre(c)),
        '.' => Some(Touche::Point),
        '+' | '-' | '*' | '/' => Some(Touche::Operateur(c)),
        '×' => Some(Touche::Operateur('*')),
        '÷' => Some(Touche::Operateur('/')),
        '%' => Some(Touche::Pourcent),
        '(' => Some(Touche::ParenOuvrante),
        ')' => Some(Touche::ParenFermante),
        '=' => Some(Touche::Egal),
        _ => None,
    }
}

/// Touche spéciale (Entrée, Retour arrière, Échap) -> touche.
pub fn touche_depuis_cle(cle: egui::Key) -> Option<Touche> {
    match cle {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Backspace => Some(Touche::Effacer),
        egui::Key::Escape => Some(Touche::ToutEffacer),
        _ => None,
    }
}

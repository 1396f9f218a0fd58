// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Clavier global (pas de champ texte) : chiffres, opérateurs, % ( ) = tapés comme texte,
//   Entrée / Retour arrière / Échap comme touches.
// - Si un autre widget veut le clavier, on ne touche à rien.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;
use etat::{touche_depuis_cle, touche_depuis_texte};

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !ctx.wants_keyboard_input() {
            let touches = ctx.input(touches_clavier);
            self.appliquer_toutes(touches);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événements clavier de la frame -> touches, dans l’ordre de frappe.
fn touches_clavier(i: &egui::InputState) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in &i.events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(touche_depuis_texte)),
            egui::Event::Key {
                key, pressed: true, ..
            } => out.extend(touche_depuis_cle(*key)),
            _ => {}
        }
    }
    out
}

// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : ligne saisie (texte brut) + ligne résultat (aperçu ou "Err")
// - Pavé : gros boutons, DEL maintenu = effacement continu
//
// Note :
// - Le clavier est géré dans app.rs (global, il n’y a pas de champ texte)

use std::time::Duration;

use eframe::egui;

use super::etat::{AppCalc, INTERVALLE_REPETITION};
use crate::noyau::Touche;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(crate::TITRE_APP);
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur_resultat = if self.session.erreur().is_some() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // résultat précédent : grisé jusqu’à la prochaine touche
                    let couleur_saisie = if self.session.est_evalue() {
                        ui.visuals().weak_text_color()
                    } else {
                        ui.visuals().text_color()
                    };
                    ui.label(
                        egui::RichText::new(self.session.expression())
                            .monospace()
                            .size(20.0)
                            .color(couleur_saisie),
                    );
                    ui.label(
                        egui::RichText::new(self.session.resultat())
                            .monospace()
                            .size(34.0)
                            .color(couleur_resultat),
                    );
                });
            });

        if let Some(e) = self.session.erreur() {
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", &[Touche::ToutEffacer]);
                self.bouton_del(ui);
                self.bouton(ui, "%", &[Touche::Pourcent]);
                self.bouton(ui, "÷", &[Touche::Operateur('/')]);
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton(ui, "×", &[Touche::Operateur('*')]);
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton(ui, "−", &[Touche::Operateur('-')]);
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton(ui, "+", &[Touche::Operateur('+')]);
                ui.end_row();

                self.bouton(ui, "(", &[Touche::ParenOuvrante]);
                self.bouton(ui, ")", &[Touche::ParenFermante]);
                self.bouton(ui, "00", &[Touche::Chiffre('0'), Touche::Chiffre('0')]);
                self.bouton(ui, ".", &[Touche::Point]);
                ui.end_row();

                self.bouton_chiffre(ui, '0');
                ui.label("");
                ui.label("");
                self.bouton(ui, "=", &[Touche::Egal]);
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        let mut tampon = [0u8; 4];
        let label: &str = c.encode_utf8(&mut tampon);
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if resp.clicked() {
            self.session.appliquer(Touche::Chiffre(c));
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touches: &[Touche]) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if resp.clicked() {
            self.appliquer_toutes(touches.iter().copied());
        }
    }

    /// DEL : un effacement à l’appui, puis en continu tant que maintenu.
    fn bouton_del(&mut self, ui: &mut egui::Ui) {
        let resp = ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new("DEL"))
            .on_hover_text("Maintenir pour effacer en continu");

        let appuye = resp.is_pointer_button_down_on();
        let maintenant = ui.input(|i| i.time);

        let n = self.repetition.tick(appuye, maintenant);
        self.appliquer_toutes(std::iter::repeat_n(Touche::Effacer, n));

        // egui ne redessine pas tout seul si la souris ne bouge pas
        if self.repetition.en_cours() {
            ui.ctx()
                .request_repaint_after(Duration::from_secs_f64(INTERVALLE_REPETITION));
        }
    }
}

// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Affichage en lecture seule (entrée en cours OU résultat OU "Error")
// - Pavé 4×4 : 7 8 9 / | 4 5 6 * | 1 2 3 - | 0 C = +
// - Clavier : symboles du pavé, Enter/"=" évalue, Escape/"c" efface, Backspace
//
// Aucune logique ici : tout passe par AppCalc::appuyer (etat.rs).

use eframe::egui;

use super::etat::{AppCalc, Touche, PAVE};

const TAILLE_TOUCHE: [f32; 2] = [40.0, 36.0];
const HAUTEUR_AFFICHAGE: f32 = 36.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);
        ui.add_space(6.0);
        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        let resp = egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(HAUTEUR_AFFICHAGE);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = egui::RichText::new(&self.affichage).monospace().size(20.0);
                    if self.est_en_erreur() {
                        ui.label(texte.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(texte);
                    }
                });
            })
            .response;

        if let Some(e) = &self.derniere_erreur {
            resp.on_hover_text(e.to_string());
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for label in ligne {
                        self.bouton(ui, label);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if !resp.clicked() {
            return;
        }
        if let Some(t) = Touche::depuis_label(label) {
            self.appuyer(t);
        }
    }

    /// Clavier physique (natif + web) : mêmes actions que le pavé.
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(t) = touche_clavier(c) {
                            self.appuyer(t);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.appuyer(Touche::Evaluer),
                    egui::Key::Escape => self.appuyer(Touche::Effacer),
                    egui::Key::Backspace => self.retour_arriere(),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

/// Caractère tapé -> touche du pavé (les autres sont ignorés).
fn touche_clavier(c: char) -> Option<Touche> {
    match c {
        '=' => Some(Touche::Evaluer),
        'c' | 'C' => Some(Touche::Effacer),
        '0'..='9' | '.' | '+' | '-' | '*' | '/' => Some(Touche::Saisie(c)),
        _ => None,
    }
}

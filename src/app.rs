// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier d’abord : la frame affiche déjà le nouvel état.
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

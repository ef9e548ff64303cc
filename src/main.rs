// src/main.rs
//
// Calculatrice à pavé — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;
mod reglages;

use app::AppCalc;
use reglages::Reglages;

/* ------------------------ Journaux (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use env_logger::{Builder, Env};
    use std::io::Write;

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    init_logging();

    let reglages = Reglages::depuis_env();
    log::info!(
        "{} v{} ({} décimales)",
        reglages.titre,
        env!("CARGO_PKG_VERSION"),
        reglages.decimales
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(reglages.titre.as_str())
            .with_inner_size(reglages.taille)
            .with_min_inner_size(reglages.taille_min),
        ..Default::default()
    };

    let app = AppCalc::new(&reglages);
    eframe::run_native(
        &reglages.titre,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, Reglages};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// Pas d’environnement côté navigateur : réglages par défaut.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let reglages = Reglages::default();

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(&reglages.titre);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();
        let app = AppCalc::new(&reglages);

        eframe::WebRunner::new()
            .start(canvas, web_options, Box::new(|_cc| Ok(Box::new(app))))
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}

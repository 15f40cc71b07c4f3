// src/main.rs
//
// Calculatrice CSP : lancement
// ----------------------------
// Une seule AppCalc, deux façons de la monter :
// - poste de travail : fenêtre eframe, logs via env_logger (RUST_LOG=debug montre jetons / RPN)
// - navigateur       : canvas HTML "the_canvas_id", aucun logger installé
//
// Le calcul ne passe jamais par un interpréteur : noyau::calcul (filtre + RPN + finitude).

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

const TITRE_APP: &str = "Calculatrice CSP";

/// Fenêtre étroite, format “calculette de poche”.
const TAILLE_FENETRE: [f32; 2] = [360.0, 560.0];
const TAILLE_MIN_FENETRE: [f32; 2] = [300.0, 480.0];

/// État initial commun aux deux entrées (l’unité d’angle démarre en degrés).
fn creer_app() -> Box<AppCalc> {
    Box::<AppCalc>::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("démarrage {TITRE_APP}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size(TAILLE_FENETRE)
            .with_min_inner_size(TAILLE_MIN_FENETRE),
        ..Default::default()
    };

    eframe::run_native(TITRE_APP, options, Box::new(|_cc| Ok(creer_app())))
}

// wasm32 : rien à faire ici, la page appelle `web::demarrer` (wasm_bindgen start).
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{creer_app, TITRE_APP};

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn demarrer() -> Result<(), JsValue> {
        let canvas = canvas_calculatrice()?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(creer_app())),
            )
            .await
    }

    /// Titre de l’onglet + canvas cible de la calculatrice.
    fn canvas_calculatrice() -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document indisponible"))?;

        document.set_title(TITRE_APP);

        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas de la calculatrice absent"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("l’id du canvas ne désigne pas un <canvas>"))
    }
}

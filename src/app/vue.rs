// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter calcule (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_affichage)
// - sin/cos/tan agissent sur le nombre affiché, selon l’unité Deg/Rad

use eframe::egui;

use super::etat::{AppCalc, Demarche, GenreMessage};
use crate::noyau::{calculate_detaille, format_nombre, trig_depuis_texte, TrigFn};

/// Couleur des messages informatifs (ex: "Mode : Radians").
const COULEUR_INFO: egui::Color32 = egui::Color32::from_rgb(0x29, 0x80, 0xb9);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice CSP");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_fonctions(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, 10/4 - 0.5")
                .id_source("affichage_edit")
                .code_editor(),
        );

        // Saisie clavier directe : on efface le message comme pour une touche du pavé
        if resp.changed() {
            self.clear_message();
        }

        if self.focus_affichage {
            resp.request_focus();
            self.focus_affichage = false;
        }

        // --- Clavier : Enter calcule (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calculer();
        }

        if !self.message.is_empty() {
            ui.add_space(4.0);
            let couleur = match self.genre_message {
                GenreMessage::Erreur => ui.visuals().error_fg_color,
                GenreMessage::Info => COULEUR_INFO,
            };
            ui.colored_label(couleur, &self.message);
        }
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for f in [TrigFn::Sin, TrigFn::Cos, TrigFn::Tan] {
                if ui.add_sized([56.0, 30.0], egui::Button::new(f.nom())).clicked() {
                    self.appliquer_trig(f);
                }
            }

            ui.separator();

            let bascule = ui
                .add_sized([84.0, 30.0], egui::Button::new(self.unite.libelle()))
                .on_hover_text("Bascule Degrés / Radians");
            if bascule.clicked() {
                self.basculer_angle();
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_csp")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Efface l’affichage", Action::Clear);
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                self.bouton_insert(ui, "(");
                self.bouton_insert(ui, ")");
                ui.end_row();

                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_insert(ui, "/");
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                self.bouton_insert(ui, "*");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, "-");
                ui.end_row();

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_action(ui, "=", "Calcule l’expression", Action::Calculer);
                self.bouton_insert(ui, "+");
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 34.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Clear => self.clear_affichage(),
                Action::Backspace => self.backspace(),
                Action::Calculer => self.calculer(),
            }
            self.focus_affichage = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str) {
        if ui.add_sized([56.0, 34.0], egui::Button::new(label)).clicked() {
            self.ajouter(label);
        }
    }

    /// "=" : calcule via le noyau, puis remplace l’affichage par le résultat.
    fn calculer(&mut self) {
        match calculate_detaille(&self.affichage) {
            Ok(e) => {
                let d = Demarche {
                    jetons: e.jetons,
                    rpn: e.rpn,
                };
                self.set_resultat(format_nombre(e.valeur), d);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /// sin/cos/tan sur le nombre affiché (résultat rendu tel quel).
    fn appliquer_trig(&mut self, f: TrigFn) {
        match trig_depuis_texte(&self.affichage, f, self.unite) {
            Ok(v) => self.set_resultat(format_nombre(v), Demarche::default()),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Clear,
    Backspace,
    Calculer,
}

//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, message, unité d’angle, démarche)
//! et offrir des opérations simples (ajout, C, DEL, Deg/Rad) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Une erreur ne touche JAMAIS l’affichage (l’utilisateur corrige sa saisie).

use log::info;

use crate::noyau::UniteAngle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenreMessage {
    #[default]
    Erreur,
    Info,
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- zone d’affichage (entrée ET résultat) ---
    pub affichage: String,

    // --- message sous l’affichage ---
    pub message: String,
    pub genre_message: GenreMessage,

    // --- paramètres ---
    pub unite: UniteAngle,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’affichage après un clic sur un bouton.
    pub focus_affichage: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            message: String::new(),
            genre_message: GenreMessage::Erreur,
            unite: UniteAngle::default(), // degrés au démarrage
            demarche: Demarche::default(),
            focus_affichage: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Touche du pavé : ajoute le texte à l’affichage.
    pub fn ajouter(&mut self, s: &str) {
        self.clear_message();
        self.affichage.push_str(s);
        self.focus_affichage = true;
    }

    /// C : vide l’affichage et le message.
    pub fn clear_affichage(&mut self) {
        self.affichage.clear();
        self.clear_message();
        self.focus_affichage = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn backspace(&mut self) {
        self.affichage.pop();
        self.clear_message();
        self.focus_affichage = true;
    }

    /// Deg/Rad : bascule l’unité et l’annonce (message informatif).
    pub fn basculer_angle(&mut self) {
        self.unite = self.unite.basculer();
        info!("unité d’angle: {}", self.unite.libelle());
        self.set_info(format!("Mode : {}", self.unite.libelle()));
    }

    pub fn clear_message(&mut self) {
        self.message.clear();
        self.genre_message = GenreMessage::Erreur;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE l’affichage (saisie fautive encore visible).
    /// - On efface la démarche (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
        self.genre_message = GenreMessage::Erreur;
        self.demarche = Demarche::default();
        self.focus_affichage = true;
    }

    pub fn set_info(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
        self.genre_message = GenreMessage::Info;
        self.focus_affichage = true;
    }

    /// Utilitaire : remplacer l’affichage par un résultat (+ démarche).
    pub fn set_resultat(&mut self, texte: impl Into<String>, demarche: Demarche) {
        self.clear_message();
        self.affichage = texte.into();
        self.demarche = demarche;
        self.focus_affichage = true;
    }
}

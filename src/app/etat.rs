//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’entrée accumulée et le texte affiché, et offrir les trois
//! actions du pavé : saisir un symbole, effacer (C), évaluer (=).
//!
//! Contrats :
//! - Le noyau ne voit qu’un `&str` figé ; seul cet état mute l’entrée.
//! - Après "=", succès ou erreur, l’entrée repart de zéro.
//! - Toute erreur s’affiche "Error" ; le type exact reste dans `derniere_erreur`.

use crate::noyau::jetons::{format_tokens, tokenize};
use crate::noyau::{evaluate, format_resultat, EvalError};
use crate::reglages::Reglages;

/// Marqueur affiché quand l’évaluation échoue.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Pavé 4×4, dans l’ordre d’affichage.
pub const PAVE: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", "C", "=", "+"],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Symbole ajouté tel quel à l’entrée.
    Saisie(char),
    /// C
    Effacer,
    /// =
    Evaluer,
}

impl Touche {
    /// Étiquette du pavé -> touche. `None` si l’étiquette n’est pas un symbole unique.
    pub fn depuis_label(label: &str) -> Option<Self> {
        match label {
            "C" => Some(Self::Effacer),
            "=" => Some(Self::Evaluer),
            _ => {
                let mut it = label.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) => Some(Self::Saisie(c)),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sortie ---
    pub affichage: String,
    pub derniere_erreur: Option<EvalError>,

    // --- paramètres ---
    pub decimales: usize,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            entree: String::new(),
            affichage: String::new(),
            derniere_erreur: None,
            decimales: reglages.decimales,
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Saisie(c) => self.ajouter(c),
            Touche::Effacer => self.effacer(),
            Touche::Evaluer => self.evaluer(),
        }
    }

    /// Ajoute un symbole ; l’affichage reprend l’entrée telle quelle.
    pub fn ajouter(&mut self, c: char) {
        self.entree.push(c);
        self.affichage.clone_from(&self.entree);
        self.derniere_erreur = None;
    }

    /// Retire le dernier symbole de l’entrée en cours (rien après "=").
    pub fn retour_arriere(&mut self) {
        if self.entree.pop().is_some() {
            self.affichage.clone_from(&self.entree);
        }
    }

    /// C : entrée vidée, affichage blanc.
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.affichage.clear();
        self.derniere_erreur = None;
    }

    /// = : une seule évaluation de l’entrée courante, puis entrée vidée.
    pub fn evaluer(&mut self) {
        if log::log_enabled!(log::Level::Trace) {
            match tokenize(&self.entree) {
                Ok(jetons) => log::trace!("jetons: {}", format_tokens(&jetons)),
                Err(e) => log::trace!("jetons: {e}"),
            }
        }

        match evaluate(&self.entree) {
            Ok(v) => {
                log::debug!("{:?} = {v}", self.entree);
                self.affichage = format_resultat(v, self.decimales);
                self.derniere_erreur = None;
            }
            Err(e) => {
                log::warn!("{:?} : {e}", self.entree);
                self.affichage = AFFICHAGE_ERREUR.to_string();
                self.derniere_erreur = Some(e);
            }
        }
        self.entree.clear();
    }

    pub fn est_en_erreur(&self) -> bool {
        self.derniere_erreur.is_some()
    }
}

//! src/reglages.rs
//!
//! Réglages de l’application (fenêtre + précision d’affichage).
//!
//! Valeurs par défaut en constantes ; seule la précision peut être surchargée
//! par l’environnement (`CALC_DECIMALES`), avec garde-fou (borne haute).

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculator";

/// Taille de fenêtre par défaut (pavé 4×4 + affichage).
const TAILLE_DEFAUT: [f32; 2] = [200.0, 250.0];
const TAILLE_MIN: [f32; 2] = [180.0, 220.0];

/// Précision d’affichage par défaut (notation fixe, 6 décimales).
const DECIMALES_DEFAUT: usize = 6;

/// Au-delà, les chiffres d’un f64 ne veulent plus rien dire.
const DECIMALES_MAX: usize = 17;

/// Variable d’environnement lue par `Reglages::depuis_env`.
pub const ENV_DECIMALES: &str = "CALC_DECIMALES";

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub titre: String,
    pub taille: [f32; 2],
    pub taille_min: [f32; 2],
    pub decimales: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            titre: TITRE_APP.to_string(),
            taille: TAILLE_DEFAUT,
            taille_min: TAILLE_MIN,
            decimales: DECIMALES_DEFAUT,
        }
    }
}

impl Reglages {
    /// Défauts + surcharge `CALC_DECIMALES` si présente.
    pub fn depuis_env() -> Self {
        let brut = std::env::var(ENV_DECIMALES).ok();
        Self::default().avec_decimales_texte(brut.as_deref())
    }

    /// Applique une précision fournie en texte.
    /// Illisible => ignorée (warn) ; trop grande => bornée (warn).
    pub fn avec_decimales_texte(mut self, brut: Option<&str>) -> Self {
        let Some(brut) = brut else {
            return self;
        };

        match brut.trim().parse::<usize>() {
            Ok(d) => {
                if d > DECIMALES_MAX {
                    log::warn!("{ENV_DECIMALES}={d} trop grand, borné à {DECIMALES_MAX}");
                }
                self.set_decimales(d);
            }
            Err(e) => {
                log::warn!("{ENV_DECIMALES}={brut:?} ignoré ({e}), défaut {DECIMALES_DEFAUT}");
            }
        }
        self
    }

    /// Garde-fou : limite la précision.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
    }
}

// src/noyau/format.rs
//
// Affichage d’un résultat : notation fixe, `decimales` chiffres après la virgule
// (6 par défaut, comme une calculatrice de bureau : 14 -> "14.000000").
// Non fini : "inf", "-inf", "nan".

pub fn format_resultat(valeur: f64, decimales: usize) -> String {
    if valeur.is_nan() {
        return "nan".to_string();
    }
    if valeur.is_infinite() {
        return if valeur.is_sign_positive() {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    format!("{valeur:.decimales$}")
}

// src/noyau/format.rs

use super::limites::Limites;

/// Texte affichable d’un résultat fini.
///
/// - représentation décimale la plus courte (jamais d’exposant : le texte
///   redevient une saisie après `=`)
/// - trop longue (> `seuil_affichage`) => arrondi à `chiffres_significatifs`
/// - zéros finaux après la virgule retirés, puis le point s’il reste seul
pub fn format_for_display(valeur: f64, limites: &Limites) -> String {
    // couvre -0
    if valeur == 0.0 {
        return "0".to_string();
    }

    let mut brut = format!("{valeur}");
    if brut.len() > limites.seuil_affichage {
        brut = precision_fixe(valeur, limites.chiffres_significatifs);
    }

    trim_zeros(&brut).to_string()
}

/// Arrondi à `chiffres` significatifs, réécrit en décimal simple.
fn precision_fixe(valeur: f64, chiffres: usize) -> String {
    let decimales = chiffres.max(1) - 1;
    let sci = format!("{valeur:.decimales$e}");
    match sci.parse::<f64>() {
        Ok(arrondi) => format!("{arrondi}"),
        Err(_) => format!("{valeur}"),
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

//! src/noyau/saisie.rs
//!
//! Saisie en cours : le texte de l’expression + le drapeau “vient d’être évalué”.
//!
//! Contrats :
//! - Toute mutation passe par les méthodes ci-dessous (pas d’état global).
//! - Un ajout refusé laisse le texte intact et renvoie `false`.
//! - Jamais deux `.` dans un même nombre.
//! - Jamais deux opérateurs collés, sauf `-` derrière un autre opérateur (`5*-3`).
//! - L’expression peut commencer par `-`, jamais par `+`, `*` ou `/`.

use tracing::trace;

use super::limites::Limites;

/// Opérateurs binaires de la saisie.
pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

#[derive(Clone, Debug, Default)]
pub struct EtatExpression {
    texte: String,
    // true : `texte` est le résultat précédent (mode POST-EVAL)
    evalue: bool,
    limites: Limites,
}

impl EtatExpression {
    pub fn avec_limites(limites: Limites) -> Self {
        Self {
            limites,
            ..Self::default()
        }
    }

    /// Texte courant (affichage + évaluation).
    pub fn snapshot(&self) -> &str {
        &self.texte
    }

    pub fn est_evalue(&self) -> bool {
        self.evalue
    }

    pub fn is_empty(&self) -> bool {
        self.texte.is_empty()
    }

    /* ------------------------ Ajouts ------------------------ */

    /// Chiffre `0-9` ou `.`.
    ///
    /// Après un `=`, on repart d’une saisie vide : le résultat est jeté.
    /// Un `.` qui ouvre un nombre devient `0.`.
    pub fn push_digit_or_dot(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || c == '.') {
            trace!(%c, "ni chiffre ni point, ignoré");
            return false;
        }

        if self.evalue {
            self.texte.clear();
            self.evalue = false;
        }

        if c == '.' {
            let jeton = self.dernier_jeton();
            if jeton.contains('.') {
                trace!(jeton, "second point dans le même nombre, refusé");
                return false;
            }
            if jeton.is_empty() {
                return self.ajouter("0.");
            }
        }

        let mut tampon = [0u8; 4];
        self.ajouter(c.encode_utf8(&mut tampon))
    }

    /// Opérateur binaire `+ - * /`.
    ///
    /// Derrière un opérateur : `-` s’ajoute (moins unaire), sinon toute la
    /// traîne d’opérateurs est remplacée par le nouveau.
    pub fn push_operator(&mut self, op: char) -> bool {
        if !est_operateur(op) {
            trace!(%op, "opérateur inconnu, ignoré");
            return false;
        }

        // Un opérateur continue toujours l’expression (résultat gardé à gauche).
        self.evalue = false;

        let Some(dernier) = self.texte.chars().last() else {
            if op == '-' {
                return self.ajouter("-");
            }
            trace!(%op, "opérateur binaire en tête, refusé");
            return false;
        };

        if !est_operateur(dernier) {
            return self.ajouter(op_str(op));
        }

        if op == '-' && dernier != '-' {
            return self.ajouter("-");
        }

        let base = self.texte.trim_end_matches(est_operateur).len();
        if base == 0 && op != '-' {
            // "-" puis "*" donnerait "*" en tête
            trace!(%op, "remplacement du signe de tête refusé");
            return false;
        }
        self.texte.truncate(base);
        self.texte.push(op);
        true
    }

    /// `%` : suffixe postfixe, validé seulement à l’évaluation.
    pub fn push_percent(&mut self) -> bool {
        self.push_symbole("%")
    }

    pub fn push_paren_open(&mut self) -> bool {
        self.push_symbole("(")
    }

    pub fn push_paren_close(&mut self) -> bool {
        self.push_symbole(")")
    }

    /* ------------------------ Retraits ------------------------ */

    /// Retire le dernier caractère (rien si vide). Le drapeau reste tel quel.
    pub fn delete_last(&mut self) {
        self.texte.pop();
    }

    /// Remise à zéro (mode EDITING, saisie vide).
    pub fn clear(&mut self) {
        self.texte.clear();
        self.evalue = false;
    }

    /// Dépose un résultat formaté comme nouvelle saisie (mode POST-EVAL).
    pub fn set_resultat(&mut self, texte: impl Into<String>) {
        self.texte = texte.into();
        self.evalue = true;
    }

    /* ------------------------ Outils internes ------------------------ */

    fn push_symbole(&mut self, s: &str) -> bool {
        self.evalue = false;
        self.ajouter(s)
    }

    /// Ajout brut, sous la borne de longueur.
    fn ajouter(&mut self, s: &str) -> bool {
        let max = self.limites.longueur_max_saisie;
        if self.texte.len() + s.len() > max {
            trace!(longueur = self.texte.len(), max, "saisie pleine, ajout refusé");
            return false;
        }
        self.texte.push_str(s);
        true
    }

    /// Plus long suffixe sans opérateur (le nombre en cours de frappe).
    fn dernier_jeton(&self) -> &str {
        let debut = self.texte.rfind(est_operateur).map_or(0, |i| i + 1);
        &self.texte[debut..]
    }
}

fn op_str(op: char) -> &'static str {
    match op {
        '+' => "+",
        '*' => "*",
        '/' => "/",
        _ => "-",
    }
}

// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la grammaire au passage
// - Puis évaluer la RPN sur une pile (itératif : pas de récursion, pas de risque de pile)
//
// Règles:
// - '*' '/' lient plus fort que '+' '-', gauche à droite
// - '-' là où on attend une valeur => moins unaire (Tok::Neg, préfixe, priorité max)
// - '+' là où on attend une valeur => plus unaire (ignoré)

use super::erreur::ErreurCalc;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter le moins unaire et les trous de grammaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurCalc::malformee("nombre inattendu"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurCalc::malformee("parenthèse ouvrante inattendue"));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurCalc::malformee("opérande manquant avant ')'"));
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurCalc::malformee("parenthèse fermante sans ouvrante"));
                }
            }

            Tok::Minus if !prev_was_value => ops.push(Tok::Neg),
            Tok::Plus if !prev_was_value => {}
            Tok::Star | Tok::Slash if !prev_was_value => {
                return Err(ErreurCalc::malformee("opérande manquant avant '*' ou '/'"));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    out.extend(ops.pop());
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurCalc::malformee("jeton interne inattendu")),
        }
    }

    // couvre aussi la suite vide
    if !prev_was_value {
        return Err(ErreurCalc::malformee("opérande manquant en fin d’expression"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::malformee("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN en flottant double précision.
///
/// Ne vérifie pas la finitude : c’est le rôle de l’appelant (eval.rs).
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Neg => {
                let x = st.pop().ok_or_else(|| ErreurCalc::malformee("moins sans argument"))?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(|| ErreurCalc::malformee("expression invalide"))?;
                let a = st.pop().ok_or_else(|| ErreurCalc::malformee("expression invalide"))?;

                st.push(match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                });
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalc::malformee("parenthèse inattendue en RPN"))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalc::malformee("expression invalide")),
    }
}

//! Tests d’évaluation : normalisation, priorités, pourcentages, erreurs.

use super::erreur::ErreurCalc;
use super::eval::evaluate;
use super::format::format_for_display;
use super::jetons::{normalize, tokenize, Tok};
use super::limites::Limites;
use super::rpn::to_rpn;

fn eval(expr: &str) -> Result<f64, ErreurCalc> {
    evaluate(expr, &Limites::default())
}

fn eval_ok(expr: &str) -> f64 {
    eval(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < 1e-12,
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

fn assert_malformee(expr: &str) {
    match eval(expr) {
        Err(ErreurCalc::Malformee(_)) => {}
        autre => panic!("expr={expr:?} : Malformee attendue, obtenu {autre:?}"),
    }
}

/* ------------------------ Normalisation ------------------------ */

#[test]
fn normalize_glyphes() {
    assert_eq!(normalize("6×7"), "6*7");
    assert_eq!(normalize("8÷2"), "8/2");
    assert_eq!(normalize("9−1"), "9-1");
}

#[test]
fn normalize_pourcent_sur_litteral() {
    assert_eq!(normalize("50%"), "(50/100)");
    assert_eq!(normalize("12.5%+1"), "(12.5/100)+1");
    assert_eq!(normalize("2*50%"), "2*(50/100)");
}

#[test]
fn normalize_pourcent_orphelin_jete() {
    // pas de littéral juste avant : le % disparaît à l’assainissement
    assert_eq!(normalize("(50)%"), "(50)");
    assert_eq!(normalize("%"), "");
    // seul le premier % suit un littéral
    assert_eq!(normalize("5%%"), "(5/100)");
}

#[test]
fn normalize_assainit() {
    assert_eq!(normalize("1 + 2"), "1+2");
    assert_eq!(normalize("alert(1)"), "(1)");
    assert_eq!(normalize("2e3"), "23");
}

/* ------------------------ Valeurs ------------------------ */

#[test]
fn addition_simple() {
    assert_eq!(eval_ok("2+2"), 4.0);
    assert_eq!(format_for_display(eval_ok("2+2"), &Limites::default()), "4");
}

#[test]
fn priorites() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("8/4/2"), 1.0);
    assert_eq!(eval_ok("10-4-3"), 3.0);
    assert_eq!(eval_ok("2*3+4*5"), 26.0);
}

#[test]
fn pourcentages() {
    assert_eq!(eval_ok("50%+10"), 10.5);
    assert_proche("200*15%", 30.0);
    assert_proche("0.5%", 0.005);
}

#[test]
fn moins_unaire() {
    assert_eq!(eval_ok("-5"), -5.0);
    assert_eq!(eval_ok("5*-3"), -15.0);
    assert_eq!(eval_ok("-2*3"), -6.0);
    assert_eq!(eval_ok("-2+3"), 1.0);
    assert_eq!(eval_ok("-(2+3)"), -5.0);
    assert_eq!(eval_ok("2--3"), 5.0);
    assert_eq!(eval_ok("+4"), 4.0);
}

#[test]
fn litteraux_partiels() {
    assert_eq!(eval_ok("0.5"), 0.5);
    assert_eq!(eval_ok(".5"), 0.5);
    assert_eq!(eval_ok("5."), 5.0);
}

#[test]
fn vide_vaut_zero() {
    assert_eq!(eval_ok(""), 0.0);
    assert_eq!(eval_ok("%"), 0.0);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn division_par_zero_non_finie() {
    assert_eq!(eval("5/0"), Err(ErreurCalc::NonFini));
    assert_eq!(eval("-5/0"), Err(ErreurCalc::NonFini));
    assert_eq!(eval("0/0"), Err(ErreurCalc::NonFini));
}

#[test]
fn grammaire_invalide() {
    assert_malformee("2+");
    assert_malformee("5*");
    assert_malformee("-");
    assert_malformee("*5");
    assert_malformee("(2+3");
    assert_malformee("2+3)");
    assert_malformee("()");
    assert_malformee("2(3)");
    assert_malformee("(2)(3)");
    assert_malformee("1.2.3");
    assert_malformee(".");
}

#[test]
fn trop_long() {
    let expr = "1+".repeat(100) + "1";
    assert_eq!(
        eval(&expr),
        Err(ErreurCalc::TropLong {
            longueur: 201,
            max: 200
        })
    );

    // la borne porte sur la forme normalisée : 91 caractères saisis, 241 après réécriture des %
    let expr = "1%+".repeat(30) + "1";
    assert!(matches!(eval(&expr), Err(ErreurCalc::TropLong { .. })));
}

#[test]
fn limite_juste_sous_la_borne() {
    let expr = "1+".repeat(99) + "1"; // 199 caractères
    assert_eq!(eval_ok(&expr), 100.0);
}

#[test]
fn parentheses_profondes_sans_recursion() {
    let expr = "(".repeat(99) + "7" + &")".repeat(99);
    assert_eq!(eval_ok(&expr), 7.0);
}

/* ------------------------ RPN ------------------------ */

#[test]
fn rpn_moins_unaire_lie_fort() {
    let rpn = to_rpn(&tokenize("2*-3").unwrap()).unwrap();
    assert_eq!(
        rpn,
        vec![Tok::Num(2.0), Tok::Num(3.0), Tok::Neg, Tok::Star]
    );
}

#[test]
fn tokenize_refuse_hors_alphabet() {
    assert!(tokenize("2%").is_err());
    assert!(tokenize("1 + 1").is_err());
}

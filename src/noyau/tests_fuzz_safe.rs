//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler saisie + évaluation sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants de saisie vérifiés après CHAQUE touche
//! - invariant clé : l’évaluation donne une valeur finie ou une erreur définie, jamais de panique

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::eval::evaluate;
use super::limites::Limites;
use super::saisie::est_operateur;
use super::session::{Session, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    const CHIFFRES: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
    const OPS: &[char] = &['+', '-', '*', '/'];

    // pondéré : beaucoup de chiffres, des opérateurs, un peu du reste
    match rng.pick(20) {
        0..=7 => Touche::Chiffre(CHIFFRES[rng.pick(10) as usize]),
        8..=9 => Touche::Point,
        10..=13 => Touche::Operateur(OPS[rng.pick(4) as usize]),
        14 => Touche::Pourcent,
        15 => Touche::ParenOuvrante,
        16 => Touche::ParenFermante,
        17 => Touche::Egal,
        18 => Touche::Effacer,
        _ => {
            // ToutEffacer rare, sinon les saisies restent courtes
            if rng.pick(4) == 0 {
                Touche::ToutEffacer
            } else {
                Touche::Chiffre('1')
            }
        }
    }
}

/* ------------------------ Invariants de saisie ------------------------ */

fn check_invariants_saisie(expr: &str, max: usize) {
    assert!(expr.len() <= max, "saisie trop longue: {expr:?}");

    // Jamais d’opérateur binaire en tête
    if let Some(c) = expr.chars().next() {
        assert!(!matches!(c, '+' | '*' | '/'), "opérateur en tête: {expr:?}");
    }

    // Un seul point par jeton numérique
    for jeton in expr.split(est_operateur) {
        assert!(
            jeton.matches('.').count() <= 1,
            "deux points dans {jeton:?} (saisie {expr:?})"
        );
    }

    // Opérateurs collés : seulement "x-" (moins unaire derrière un opérateur)
    let chars: Vec<char> = expr.chars().collect();
    for w in chars.windows(2) {
        if est_operateur(w[0]) && est_operateur(w[1]) {
            assert!(
                w[1] == '-' && w[0] != '-',
                "opérateurs collés {:?} dans {expr:?}",
                w
            );
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_de_saisie() {
    let t0 = Instant::now();
    let max_temps = Duration::from_millis(500);
    let limites = Limites::default();

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        let mut s = Session::default();
        // un résultat très long déposé par `=` n’est pas une saisie : borne suspendue
        let mut depot_long = false;
        for _ in 0..80 {
            let t = gen_touche(&mut rng);
            s.appliquer(t);
            if s.est_evalue() {
                depot_long |= s.expression().len() > limites.longueur_max_saisie;
                continue;
            }
            let max = if depot_long {
                usize::MAX
            } else {
                limites.longueur_max_saisie
            };
            check_invariants_saisie(s.expression(), max);
        }
        budget(t0, max_temps);
    }
}

#[test]
fn fuzz_safe_evaluation_definie() {
    let t0 = Instant::now();
    let max_temps = Duration::from_millis(500);
    let limites = Limites::default();

    // Même seed => mêmes saisies => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        let mut s = Session::default();
        let n = 1 + rng.pick(25);
        for _ in 0..n {
            let t = gen_touche(&mut rng);
            if t != Touche::Egal {
                s.appliquer(t);
            }
        }

        let expr = s.expression().to_string();
        match evaluate(&expr, &limites) {
            Ok(v) => {
                assert!(v.is_finite(), "valeur non finie: expr={expr:?} v={v}");
                assert_eq!(evaluate(&expr, &limites), Ok(v), "non déterministe: {expr:?}");
                seen_ok += 1;
            }
            Err(ErreurCalc::Malformee(_)) | Err(ErreurCalc::NonFini) => seen_err += 1,
            // 25 touches au plus : la forme normalisée reste sous 200 caractères
            Err(e @ ErreurCalc::TropLong { .. }) => {
                panic!("erreur non attendue: expr={expr:?} err={e}")
            }
        }
        budget(t0, max_temps);
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_texte_arbitraire() {
    let t0 = Instant::now();
    let max_temps = Duration::from_millis(300);
    let limites = Limites::default();

    // Alphabet large : l’assainissement doit tout absorber.
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '%', '(', ')', ' ', 'e', 'x', '×', '÷', 'π', ';',
    ];
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..400 {
        let n = rng.pick(40);
        let expr: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        if let Ok(v) = evaluate(&expr, &limites) {
            assert!(v.is_finite(), "expr={expr:?} v={v}");
        }
        budget(t0, max_temps);
    }
}

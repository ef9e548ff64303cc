//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariant clé : jamais de panique, toujours Ok ou une EvalError typée

use std::time::{Duration, Instant};

use super::{evaluate, EvalError};

/* ------------------------ RNG déterministe minimal ------------------------ */

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Alphabet du pavé + quelques intrus (espaces, caractères inconnus).
const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', ' ', 'x', '^',
];

fn gen_bruit(rng: &mut Rng, max_len: u32) -> String {
    let n = rng.pick(max_len + 1);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn gen_entier(rng: &mut Rng) -> u32 {
    rng.pick(1000)
}

/// Expression bien formée : n (op n)*, entiers seulement.
/// Retourne aussi la valeur attendue, calculée à part (produits d’abord).
fn gen_bien_formee(rng: &mut Rng, max_termes: u32) -> (String, f64) {
    let ops = ['+', '-', '*', '/'];
    let n_ops = rng.pick(max_termes);

    let premier = gen_entier(rng);
    let mut s = premier.to_string();

    // termes additifs déjà terminés + produit en cours
    let mut somme = 0.0_f64;
    let mut signe = 1.0_f64;
    let mut produit = f64::from(premier);

    for _ in 0..n_ops {
        let op = ops[rng.pick(4) as usize];
        // diviseur jamais nul : on teste /0 ailleurs
        let n = if op == '/' {
            gen_entier(rng) + 1
        } else {
            gen_entier(rng)
        };

        if rng.coin() {
            s.push(' ');
        }
        s.push(op);
        if rng.coin() {
            s.push(' ');
        }
        s.push_str(&n.to_string());

        match op {
            '*' => produit *= f64::from(n),
            '/' => produit /= f64::from(n),
            _ => {
                somme += signe * produit;
                signe = if op == '+' { 1.0 } else { -1.0 };
                produit = f64::from(n);
            }
        }
    }

    (s, somme + signe * produit)
}

/// Grammaire acceptée, espaces retirés : nombre (op nombre)*
/// avec nombre = chiffres, puis éventuellement '.' et chiffres.
fn suit_la_grammaire(s: &str) -> bool {
    let compact: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut i = 0;

    loop {
        // nombre
        let debut = i;
        while i < compact.len() && compact[i].is_ascii_digit() {
            i += 1;
        }
        if i == debut {
            return false;
        }
        if i < compact.len() && compact[i] == '.' {
            i += 1;
            while i < compact.len() && compact[i].is_ascii_digit() {
                i += 1;
            }
        }

        if i == compact.len() {
            return true;
        }

        // opérateur
        if !matches!(compact[i], '+' | '-' | '*' | '/') {
            return false;
        }
        i += 1;
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn grammaire_de_reference() {
    assert!(suit_la_grammaire("1 + 2.5*3."));
    assert!(!suit_la_grammaire(""));
    assert!(!suit_la_grammaire("+1"));
    assert!(!suit_la_grammaire("1+"));
    assert!(!suit_la_grammaire("1..2"));
    assert!(!suit_la_grammaire("2x3"));
}

#[test]
fn fuzz_bruit_jamais_de_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..20_000 {
        budget(start, max);

        let s = gen_bruit(&mut rng, 24);
        let r1 = evaluate(&s);
        let r2 = evaluate(&s);

        match (&r1, &r2) {
            (Ok(a), Ok(b)) => {
                assert!(a == b || (a.is_nan() && b.is_nan()), "non déterministe: {s:?}");
            }
            (Err(e1), Err(e2)) => assert_eq!(e1, e2, "non déterministe: {s:?}"),
            _ => panic!("non déterministe: {s:?} {r1:?} {r2:?}"),
        }

        // Ok seulement pour une chaîne qui suit la grammaire
        if r1.is_ok() {
            assert!(suit_la_grammaire(&s), "Ok hors grammaire: {s:?} -> {r1:?}");
        }

        // UnknownOperator : seulement pour un intrus présent ; un 'x'/'^' signalé
        // est forcément le premier 'x'/'^' de la chaîne (lecture gauche -> droite)
        if let Err(EvalError::UnknownOperator(c)) = r1 {
            assert!(matches!(c, 'x' | '^' | '.'), "expr={s:?} c={c:?}");
            assert!(s.contains(c), "expr={s:?} c={c:?}");
            if c != '.' {
                assert_eq!(s.find(|ch: char| matches!(ch, 'x' | '^')), s.find(c), "expr={s:?}");
            }
        }
    }
}

#[test]
fn fuzz_bien_formees_valeur_attendue() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..5_000 {
        budget(start, max);

        let (s, attendu) = gen_bien_formee(&mut rng, 8);
        assert!(suit_la_grammaire(&s), "expr={s:?}");
        let v = evaluate(&s).unwrap_or_else(|e| panic!("expr={s:?} err={e}"));

        let echelle = attendu.abs().max(1.0);
        assert!(
            (v - attendu).abs() <= 1e-9 * echelle,
            "expr={s:?} obtenu={v} attendu={attendu}"
        );
    }
}

#[test]
fn fuzz_operateur_en_queue_toujours_mal_forme() {
    let mut rng = Rng::new(7);

    for _ in 0..2_000 {
        let (mut s, _) = gen_bien_formee(&mut rng, 5);
        s.push(['+', '-', '*', '/'][rng.pick(4) as usize]);
        assert_eq!(evaluate(&s), Err(EvalError::MalformedExpression), "expr={s:?}");
    }
}

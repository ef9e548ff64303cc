// src/noyau/jetons.rs
//
// Lecture gauche -> droite, paresseuse : un jeton à la fois.
// Le noyau consomme ce flux en une seule passe (pas de Vec intermédiaire).

use std::iter::Peekable;
use std::str::Chars;

use super::erreur::EvalError;

/// Les quatre opérateurs binaires supportés.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// `None` pour tout caractère qui n’est pas un opérateur supporté.
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    /// Deux niveaux seulement : additifs (1) < multiplicatifs (2).
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
        }
    }

    /// Arithmétique IEEE-754 brute : x/0 donne ±inf ou NaN, pas d’erreur.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Plus => a + b,
            Self::Moins => a - b,
            Self::Fois => a * b,
            Self::Divise => a / b,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
}

/// Flux de jetons sur une chaîne.
///
/// Règles de lecture :
/// - espaces ignorés
/// - nombre = chiffres, puis éventuellement '.' et chiffres fractionnaires
///   ("3." vaut 3.0)
/// - un '.' qui ne suit pas une partie entière ("." en tête, second '.')
///   n’est pas un nombre : il est rejeté comme tout caractère inconnu
pub struct Jetons<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Jetons<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            chars: s.chars().peekable(),
        }
    }

    fn lire_nombre(&mut self) -> f64 {
        let mut val = 0.0_f64;

        // partie entière (gloutonne)
        while let Some(d) = self.chars.peek().and_then(|c| c.to_digit(10)) {
            val = val * 10.0 + f64::from(d);
            self.chars.next();
        }

        // partie fractionnaire : d * 10^-k, k = 1, 2, ...
        if self.chars.peek() == Some(&'.') {
            self.chars.next();
            let mut fraction = 1.0_f64;
            while let Some(d) = self.chars.peek().and_then(|c| c.to_digit(10)) {
                fraction /= 10.0;
                val += f64::from(d) * fraction;
                self.chars.next();
            }
        }

        val
    }
}

impl Iterator for Jetons<'_> {
    type Item = Result<Tok, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}

        let c = *self.chars.peek()?;

        if c.is_ascii_digit() {
            return Some(Ok(Tok::Num(self.lire_nombre())));
        }

        self.chars.next();
        Some(
            Operateur::depuis_char(c)
                .map(Tok::Op)
                .ok_or(EvalError::UnknownOperator(c)),
        )
    }
}

/// Tokenize une chaîne complète (utile pour la trace et les tests).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvalError> {
    Jetons::new(s).collect()
}

/// Format utilitaire : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs   : EvalError (UnknownOperator / MalformedExpression)
//! - jetons.rs   : lecture paresseuse (nombres décimaux + opérateurs)
//! - eval.rs     : deux piles, précédence à deux niveaux
//! - format.rs   : affichage d’un résultat (notation fixe, inf/nan)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvalError;
pub use eval::evaluate;
pub use format::format_resultat;

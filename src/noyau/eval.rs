//! Noyau — évaluation (shunting-yard à deux piles, une seule passe)
//!
//! Jetons (paresseux) -> pile d’opérandes + pile d’opérateurs -> résultat.
//!
//! Fonction pure : pas d’état global, pas d’E/S, chaque appel a ses propres piles.

use super::erreur::EvalError;
use super::jetons::{Jetons, Operateur, Tok};

/// API publique : évalue une expression infixe `+ - * /` sur des décimaux.
///
/// - `*` et `/` passent avant `+` et `-`, égalité => gauche à droite
/// - division par zéro => ±inf / NaN (IEEE), pas une erreur
/// - caractère inconnu => `UnknownOperator` dès sa lecture
/// - nombres et opérateurs doivent alterner (nombre en tête et en queue),
///   sinon `MalformedExpression`
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let mut valeurs: Vec<f64> = Vec::new();
    let mut ops: Vec<Operateur> = Vec::new();

    // invariant : valeurs.len() == ops.len() + (!attend_nombre) as usize
    let mut attend_nombre = true;

    for jeton in Jetons::new(expression) {
        match jeton? {
            Tok::Num(v) => {
                if !attend_nombre {
                    return Err(EvalError::MalformedExpression);
                }
                valeurs.push(v);
                attend_nombre = false;
            }

            Tok::Op(op) => {
                if attend_nombre {
                    return Err(EvalError::MalformedExpression);
                }
                attend_nombre = true;

                // gauche-associatif : on combine tant que le sommet lie au moins autant
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    combiner(&mut valeurs, &mut ops)?;
                }
                ops.push(op);
            }
        }
    }

    // opérateur en queue (ou entrée vide)
    if attend_nombre {
        return Err(EvalError::MalformedExpression);
    }

    while !ops.is_empty() {
        combiner(&mut valeurs, &mut ops)?;
    }

    match valeurs.as_slice() {
        [resultat] => Ok(*resultat),
        _ => Err(EvalError::MalformedExpression),
    }
}

/// Dépile droite, gauche, opérateur ; empile `gauche op droite`.
/// Chaque pop est vérifié (pas de sous-dépassement possible).
fn combiner(valeurs: &mut Vec<f64>, ops: &mut Vec<Operateur>) -> Result<(), EvalError> {
    let b = valeurs.pop().ok_or(EvalError::MalformedExpression)?;
    let a = valeurs.pop().ok_or(EvalError::MalformedExpression)?;
    let op = ops.pop().ok_or(EvalError::MalformedExpression)?;

    valeurs.push(op.appliquer(a, b));
    Ok(())
}

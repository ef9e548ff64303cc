// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// L’UI les affiche toutes pareil ("Error"), mais le type garde la distinction.

/// Échec d’évaluation d’une expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Caractère hors `0-9 . + - * /` et hors espaces (rejeté dès la lecture).
    #[error("opérateur inconnu: '{0}'")]
    UnknownOperator(char),

    /// Piles incohérentes : vide, opérateur en tête/queue, deux nombres collés...
    #[error("expression mal formée")]
    MalformedExpression,
}

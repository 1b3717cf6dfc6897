use thiserror::Error;

use crate::planet::Planet;

#[derive(Error, Debug)]
pub enum SynodicError {
    #[error("Input outside the supported domain: {0}")]
    InputDomain(String),

    #[error("Iteration failed to converge after {iterations} passes ({context})")]
    ConvergenceError { context: String, iterations: usize },

    #[error("ROOTS finding error: {0}")]
    RootFindingError(#[from] roots::SearchError),

    #[error("Query {query} is not defined for {planet:?}")]
    UnsupportedQuery { planet: Planet, query: String },
}

impl PartialEq for SynodicError {
    fn eq(&self, other: &Self) -> bool {
        use SynodicError::*;
        match (self, other) {
            (InputDomain(a), InputDomain(b)) => a == b,
            (
                ConvergenceError {
                    context: a,
                    iterations: i,
                },
                ConvergenceError {
                    context: b,
                    iterations: j,
                },
            ) => a == b && i == j,
            (RootFindingError(a), RootFindingError(b)) => a == b,
            (
                UnsupportedQuery {
                    planet: p,
                    query: q,
                },
                UnsupportedQuery {
                    planet: r,
                    query: s,
                },
            ) => p == r && q == s,
            _ => false,
        }
    }
}

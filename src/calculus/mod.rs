//! Differentiation and algebraic simplification

mod derivative;
mod errors;
mod simplify;

pub use derivative::differentiate;
pub use errors::DerivativeError;
pub use simplify::simplify;

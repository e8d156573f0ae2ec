//! Domain service for calculator
//!
//! Holds the four arithmetic primitives and the dispatch from [`Operation`]
//! to them. Operands are plain `f64`: overflow saturates to infinity and
//! precision loss follows IEEE-754, neither is reported as a failure.

use tracing::{debug, instrument};

use super::{DomainError, Operation};

/// Return the sum of two numbers.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Return `a` minus `b`.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Return the product of two numbers.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Return `a` divided by `b`.
///
/// # Errors
/// Returns [`DomainError::DivisionByZero`] when `b` is exactly zero (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64, DomainError> {
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}

/// Stateless domain service that performs calculations.
///
/// Shared between handlers behind an `Arc`; carries no state.
#[derive(Clone, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Apply `operation` to the two operands.
    ///
    /// # Errors
    /// Returns [`DomainError::DivisionByZero`] for a division with a zero divisor.
    #[instrument(level = "debug", skip(self, operation), fields(operation = %operation))]
    pub fn calculate(&self, operation: Operation, a: f64, b: f64) -> Result<f64, DomainError> {
        let result = match operation {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
            Operation::Divide => divide(a, b)?,
        };
        debug!(result, "calculation completed");
        Ok(result)
    }
}

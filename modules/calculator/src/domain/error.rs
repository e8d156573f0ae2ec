use thiserror::Error;

/// Failures the arithmetic core can report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

impl DomainError {
    /// Machine-readable kind used on the wire.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            Self::DivisionByZero => "division_by_zero",
        }
    }
}

//! REST DTOs for calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Operation;

/// Arithmetic operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OperationDto {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl From<OperationDto> for Operation {
    fn from(dto: OperationDto) -> Self {
        match dto {
            OperationDto::Add => Operation::Add,
            OperationDto::Subtract => Operation::Subtract,
            OperationDto::Multiply => Operation::Multiply,
            OperationDto::Divide => Operation::Divide,
        }
    }
}

/// Request body for a calculation.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct CalculationRequest {
    /// The arithmetic operation to perform
    pub operation: OperationDto,
    /// First operand
    #[schema(example = 10.0)]
    pub a: f64,
    /// Second operand
    #[schema(example = 5.0)]
    pub b: f64,
}

/// Response body for a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CalculationResponse {
    /// The operation that was performed
    #[schema(example = "add")]
    pub operation: String,
    /// First operand
    pub a: f64,
    /// Second operand
    pub b: f64,
    /// The computed result
    #[schema(example = 15.0)]
    pub result: f64,
}

/// Response body for a failed calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type identifier
    #[schema(example = "division_by_zero")]
    pub error: String,
    /// Human-readable error message
    #[schema(example = "Cannot divide by zero")]
    pub detail: String,
}

//! Schema validation for the `/calculate` request body.
//!
//! Runs as an axum extractor so a malformed request is answered with 422
//! before the handler, and therefore the domain, is ever reached. Every
//! violation found is reported, not just the first one.

use api_gateway::middleware::request_id;
use api_gateway::problem::unprocessable_entity;
use api_gateway::{Problem, ValidationViolation};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::dto::{CalculationRequest, OperationDto};
use crate::domain::Operation;

/// A `CalculationRequest` that passed schema validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCalculation(pub CalculationRequest);

/// Why a `/calculate` body was refused.
#[derive(Debug)]
pub enum CalculationRejection {
    /// The body could not be read at all (e.g. it exceeds the size limit).
    Body(BytesRejection),
    /// The body was read but does not match the request schema.
    Invalid(Box<Problem>),
}

impl IntoResponse for CalculationRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Body(rejection) => rejection.into_response(),
            Self::Invalid(problem) => (*problem).into_response(),
        }
    }
}

impl<S> FromRequest<S> for ValidatedCalculation
where
    S: Send + Sync,
{
    type Rejection = CalculationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_owned();
        let trace_id = request_id::from_headers(req.headers());

        let body = Bytes::from_request(req, state)
            .await
            .map_err(CalculationRejection::Body)?;

        validate_calculation(&body).map(Self).map_err(|errors| {
            tracing::debug!(
                violations = errors.len(),
                "rejecting malformed calculation request"
            );
            let problem = unprocessable_entity(errors)
                .with_instance(instance)
                .with_trace_id(trace_id);
            CalculationRejection::Invalid(Box::new(problem))
        })
    }
}

struct FieldError {
    message: String,
    code: &'static str,
}

impl FieldError {
    fn new(message: impl Into<String>, code: &'static str) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    fn into_violation(self, field: &str) -> ValidationViolation {
        ValidationViolation::new(field, self.message).with_code(self.code)
    }
}

/// Validate a raw request body against the `CalculationRequest` schema.
///
/// # Errors
/// Returns every violation found when the body does not match the schema.
pub fn validate_calculation(body: &[u8]) -> Result<CalculationRequest, Vec<ValidationViolation>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(vec![FieldError::new("Field required", "missing").into_violation("body")]);
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        vec![FieldError::new(format!("JSON decode error: {e}"), "json_invalid").into_violation("body")]
    })?;

    let Value::Object(fields) = value else {
        return Err(vec![
            FieldError::new("Input should be a JSON object", "object_type").into_violation("body"),
        ]);
    };

    let mut errors = Vec::new();
    let operation = check_field(&fields, "operation", parse_operation, &mut errors);
    let a = check_field(&fields, "a", parse_operand, &mut errors);
    let b = check_field(&fields, "b", parse_operand, &mut errors);

    match (operation, a, b) {
        (Some(operation), Some(a), Some(b)) => Ok(CalculationRequest { operation, a, b }),
        _ => Err(errors),
    }
}

fn check_field<T>(
    fields: &Map<String, Value>,
    name: &str,
    parse: fn(&Value) -> Result<T, FieldError>,
    errors: &mut Vec<ValidationViolation>,
) -> Option<T> {
    let Some(value) = fields.get(name) else {
        errors.push(FieldError::new("Field required", "missing").into_violation(name));
        return None;
    };

    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            errors.push(e.into_violation(name));
            None
        }
    }
}

fn parse_operation(value: &Value) -> Result<OperationDto, FieldError> {
    OperationDto::deserialize(value).map_err(|_| {
        let expected: Vec<String> = Operation::ALL.iter().map(|op| format!("'{op}'")).collect();
        FieldError::new(
            format!("Input should be one of: {}", expected.join(", ")),
            "enum",
        )
    })
}

/// JSON numbers pass as-is; strings holding a finite decimal number are coerced.
fn parse_operand(value: &Value) -> Result<f64, FieldError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| FieldError::new("Input should be a finite number", "finite_number")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                FieldError::new(
                    "Input should be a valid number, unable to parse string as a number",
                    "float_parsing",
                )
            }),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            Err(FieldError::new("Input should be a valid number", "float_type"))
        }
    }
}

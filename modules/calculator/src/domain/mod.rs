//! Domain layer for calculator module
//!
//! Contains the arithmetic core and the operation dispatch.

pub mod error;
pub mod operation;
pub mod service;

pub use error::DomainError;
pub use operation::Operation;
pub use service::{Service, add, divide, multiply, subtract};

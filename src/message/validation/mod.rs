//! Message schema validation.
//!
//! The schema is described as data in [`schema`]; a structural pass checks
//! JSON types and keys, [`rules`] holds the named constraints, and
//! [`service::SchemaValidator`] runs both passes in order.

pub mod rules;
pub mod schema;
pub mod service;
mod structure;

pub use rules::{Constraint, ListLimit, TextLimit};
pub use schema::{JsonPath, ObjectKind, Property, ValueKind};
pub use service::{SchemaReport, SchemaValidator};

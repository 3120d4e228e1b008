//! Application services for the message subsystem.
//!
//! Services orchestrate domain operations and coordinate between ports,
//! implementing workflows that span the domain and its adapters.

mod dispatch;

pub use dispatch::{Dispatcher, prepare_request};

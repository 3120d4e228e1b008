//! Unit tests for the editor module.
//!
//! Coordinator transitions are checked through a mocked host; the gate's own
//! ordering lives next to it in `gate.rs`.

//! The editing surface: one owned state, the transitions over it, and the
//! gate that decides when sending is allowed.
//!
//! - [`EditorState`]: message, JSON text, errors, files, endpoint, and the
//!   in-flight flag
//! - [`EditCoordinator`]: applies structured edits, raw JSON edits, file
//!   selection, and dispatches
//! - [`dispatch_gate`]: pure check over a state snapshot
//! - [`EditorHost`]: port for notifying whatever embeds the editor

mod coordinator;
mod gate;
mod host;
mod state;

pub use coordinator::{DispatchTicket, EditCoordinator, SendError};
pub use gate::{DispatchBlocker, DispatchGate, dispatch_gate};
#[cfg(test)]
pub use host::MockEditorHost;
pub use host::{EditorHost, HeadlessHost};
pub use state::EditorState;

#[cfg(test)]
mod tests;

//! World state for editor BDD scenarios.

use std::sync::Arc;

use hookcraft::{
    editor::{DispatchTicket, EditCoordinator, EditorHost, SendError},
    message::{
        adapters::memory::RecordingTransport, domain::Message, error::ValidationError,
        ports::DispatchReport, services::Dispatcher,
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Endpoint used whenever a scenario sets one.
pub const ENDPOINT: &str = "https://hooks.example/api/webhooks/1/token";

/// Host that remembers every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Messages passed to `message_changed`, oldest first.
    pub messages: Vec<Message>,
    /// Number of `errors_changed` notifications.
    pub error_reports: usize,
}

impl EditorHost for RecordingHost {
    fn message_changed(&mut self, message: &Message) {
        self.messages.push(message.clone());
    }

    fn errors_changed(&mut self, _errors: &[ValidationError]) {
        self.error_reports += 1;
    }
}

/// Scenario world for editor behaviour tests.
pub struct EditorWorld {
    /// The coordinator under test.
    pub editor: EditCoordinator<RecordingHost>,
    /// Transport capturing dispatched requests.
    pub transport: Arc<RecordingTransport>,
    /// Dispatcher wired to `transport`.
    pub dispatcher: Dispatcher<RecordingTransport, DefaultClock>,
    /// Last raw JSON text typed by a step.
    pub typed_json: Option<String>,
    /// Ticket of a dispatch that has begun but not completed.
    pub ticket: Option<DispatchTicket>,
    /// Result of the last full send.
    pub last_send: Option<Result<DispatchReport, SendError>>,
}

impl Default for EditorWorld {
    fn default() -> Self {
        let transport = Arc::new(RecordingTransport::new());
        let dispatcher = Dispatcher::new(Arc::clone(&transport), Arc::new(DefaultClock));
        Self {
            editor: EditCoordinator::new(Message::default(), RecordingHost::default()),
            transport,
            dispatcher,
            typed_json: None,
            ticket: None,
            last_send: None,
        }
    }
}

#[fixture]
pub fn world() -> EditorWorld {
    EditorWorld::default()
}

pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

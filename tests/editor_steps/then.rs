//! Then steps for editor BDD scenarios.

use super::world::EditorWorld;
use eyre::eyre;
use hookcraft::{editor::DispatchGate, message::json::stringify_message};
use rstest_bdd_macros::then;

#[then("the JSON text is the canonical form of the message")]
fn json_is_canonical(world: &EditorWorld) -> Result<(), eyre::Report> {
    let state = world.editor.state();
    let expected = stringify_message(state.message());
    if state.json() != expected {
        return Err(eyre!("expected JSON {expected:?}, found {:?}", state.json()));
    }
    Ok(())
}

#[then("the JSON text is kept as typed")]
fn json_kept_as_typed(world: &EditorWorld) -> Result<(), eyre::Report> {
    let typed = world
        .typed_json
        .as_deref()
        .ok_or_else(|| eyre!("no JSON was typed"))?;
    if world.editor.state().json() != typed {
        return Err(eyre!(
            "expected JSON {typed:?}, found {:?}",
            world.editor.state().json()
        ));
    }
    Ok(())
}

#[then(r#"the message content is "{content}""#)]
fn message_content(world: &EditorWorld, content: String) -> Result<(), eyre::Report> {
    let actual = world.editor.state().message().content.as_deref();
    if actual != Some(content.as_str()) {
        return Err(eyre!("expected content {content:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("there are {count:usize} validation errors")]
fn validation_error_count(world: &EditorWorld, count: usize) -> Result<(), eyre::Report> {
    let errors = world.editor.state().errors();
    if errors.len() != count {
        return Err(eyre!("expected {count} errors, found {errors:?}"));
    }
    Ok(())
}

#[then("the host saw {count:usize} message changes")]
fn host_message_changes(world: &EditorWorld, count: usize) -> Result<(), eyre::Report> {
    let seen = world.editor.host().messages.len();
    if seen != count {
        return Err(eyre!("expected {count} message notifications, found {seen}"));
    }
    Ok(())
}

#[then("the editor is pristine")]
fn editor_pristine(world: &EditorWorld) -> Result<(), eyre::Report> {
    if !world.editor.is_pristine() {
        return Err(eyre!("editor has unsaved changes"));
    }
    Ok(())
}

#[then("sending is allowed")]
fn sending_allowed(world: &EditorWorld) -> Result<(), eyre::Report> {
    match world.editor.gate() {
        DispatchGate::Allowed => Ok(()),
        DispatchGate::Blocked(blocker) => Err(eyre!("sending blocked: {blocker}")),
    }
}

#[then(r#"sending is blocked with "{reason}""#)]
fn sending_blocked(world: &EditorWorld, reason: String) -> Result<(), eyre::Report> {
    let blocker = world
        .editor
        .gate()
        .blocker()
        .ok_or_else(|| eyre!("sending is allowed"))?;
    if blocker.to_string() != reason {
        return Err(eyre!("expected blocker {reason:?}, found {blocker:?}"));
    }
    Ok(())
}

#[then("the webhook received {count:usize} files")]
fn webhook_received_files(world: &EditorWorld, count: usize) -> Result<(), eyre::Report> {
    match &world.last_send {
        Some(Ok(report)) if report.attachments == count => {}
        Some(Ok(report)) => {
            return Err(eyre!("expected {count} attachments, found {}", report.attachments));
        }
        Some(Err(err)) => return Err(eyre!("send failed: {err}")),
        None => return Err(eyre!("nothing was sent")),
    }
    let requests = world.transport.requests();
    let [request] = requests.as_slice() else {
        return Err(eyre!("expected one request, found {}", requests.len()));
    };
    if request.files.len() != count {
        return Err(eyre!("expected {count} file parts, found {}", request.files.len()));
    }
    Ok(())
}

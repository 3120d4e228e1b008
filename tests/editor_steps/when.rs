//! When steps for editor BDD scenarios.

use super::world::{EditorWorld, run_async};
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::when;
use serde_json::json;

fn type_json(world: &mut EditorWorld, text: String) {
    world.editor.edit_json(text.clone());
    world.typed_json = Some(text);
}

#[when(r#"the content is set to "{content}""#)]
fn set_content(world: &mut EditorWorld, content: String) {
    world.editor.set_content(content);
}

#[when("the JSON text is replaced with an unclosed brace")]
fn type_unclosed_brace(world: &mut EditorWorld) {
    type_json(world, "{".to_owned());
}

#[when(r#"the JSON text is replaced with a message whose content is "{content}""#)]
fn type_message_with_content(world: &mut EditorWorld, content: String) {
    type_json(world, json!({ "content": content }).to_string());
}

#[when("the JSON text is replaced with a wrongly typed username")]
fn type_wrongly_typed_username(world: &mut EditorWorld) {
    type_json(world, r#"{ "username": 42 }"#.to_owned());
}

#[when("the JSON text is replaced with embeds that are not objects")]
fn type_non_object_embeds(world: &mut EditorWorld) {
    type_json(world, r#"{ "embeds": [1, "two"] }"#.to_owned());
}

#[when("the editor is cleared")]
fn clear_editor(world: &mut EditorWorld) {
    world.editor.clear_all();
}

#[when("a dispatch begins")]
fn begin_dispatch(world: &mut EditorWorld) -> Result<(), eyre::Report> {
    let ticket = world
        .editor
        .begin_dispatch()
        .map_err(|blocker| eyre!("dispatch refused: {blocker}"))?;
    world.ticket = Some(ticket);
    Ok(())
}

#[when("the dispatch completes")]
fn complete_dispatch(world: &mut EditorWorld) -> Result<(), eyre::Report> {
    let ticket = world.ticket.take().ok_or_else(|| eyre!("no dispatch in flight"))?;
    let outcome = run_async(world.dispatcher.execute(
        ticket.endpoint(),
        ticket.payload_json(),
        ticket.files(),
    ));
    world.editor.complete_dispatch(&outcome);
    outcome.map(|_| ()).wrap_err("dispatch failed")
}

#[when("the message is sent")]
fn send_message(world: &mut EditorWorld) {
    let result = run_async(world.editor.dispatch(&world.dispatcher));
    world.last_send = Some(result);
}

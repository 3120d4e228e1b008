//! Given steps for editor BDD scenarios.

use super::world::{ENDPOINT, EditorWorld};
use hookcraft::message::domain::Attachment;
use rstest_bdd_macros::given;

#[given("an empty editor")]
fn empty_editor(world: &mut EditorWorld) {
    world.editor.clear_all();
    world.editor.host_mut().messages.clear();
}

#[given(r#"an editor with content "{content}""#)]
fn editor_with_content(world: &mut EditorWorld, content: String) {
    world.editor.set_content(content);
}

#[given("the webhook endpoint is set")]
fn endpoint_set(world: &mut EditorWorld) {
    world.editor.set_endpoint(ENDPOINT);
}

#[given("the webhook endpoint is blank")]
fn endpoint_blank(world: &mut EditorWorld) {
    world.editor.set_endpoint("   ");
}

#[given("an empty file selection")]
fn empty_file_selection(world: &mut EditorWorld) {
    world.editor.select_files(Some(Vec::new()));
}

#[given(r#"the files "{first}" and "{second}" are selected"#)]
fn files_selected(world: &mut EditorWorld, first: String, second: String) {
    let files = [first, second]
        .into_iter()
        .map(|name| {
            let bytes = format!("contents of {name}").into_bytes();
            Attachment::new(name, bytes)
        })
        .collect();
    world.editor.select_files(Some(files));
}

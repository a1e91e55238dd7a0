//! Behavioral tests for the add-todo input.

use todokit::components::{AddInput, AddInputMsg, AddInputProps};
use todokit::{Key, Mounted, Tag, UiEvent};

#[test]
fn renders_the_default_placeholder_and_hooks() {
    let input = Mounted::<AddInput>::mount_default();

    let node = input.find("new-todo");
    assert_eq!(node.tag, Tag::Input);
    assert_eq!(node.class.as_deref(), Some("new-todo"));
    assert_eq!(node.placeholder.as_deref(), Some("What needs to be done?"));
    assert_eq!(node.value.as_deref(), Some(""));
}

#[test]
fn placeholder_prop_overrides_the_default() {
    let props = AddInputProps { placeholder: "Add something".to_owned() };
    let input = Mounted::<AddInput>::mount(props);

    assert_eq!(
        input.find("new-todo").placeholder.as_deref(),
        Some("Add something"),
    );
}

#[test]
fn typing_mirrors_into_the_value_without_emitting() {
    let mut input = Mounted::<AddInput>::mount_default();

    input.perform("new-todo", UiEvent::input("Buy gro"));
    assert_eq!(input.find("new-todo").value.as_deref(), Some("Buy gro"));

    input.perform("new-todo", UiEvent::input("Buy groceries"));
    assert_eq!(input.find("new-todo").value.as_deref(), Some("Buy groceries"));

    assert_eq!(input.emitted(), vec![]);
}

#[test]
fn enter_emits_the_trimmed_title_and_clears() {
    let mut input = Mounted::<AddInput>::mount_default();

    input.perform("new-todo", UiEvent::input("  New Task  "));
    input.perform("new-todo", UiEvent::KeyDown(Key::Enter));

    assert_eq!(input.emitted(), vec![AddInputMsg::Add("New Task".to_owned())]);
    assert_eq!(input.find("new-todo").value.as_deref(), Some(""));
}

#[test]
fn enter_on_an_empty_input_emits_nothing() {
    let mut input = Mounted::<AddInput>::mount_default();

    input.perform("new-todo", UiEvent::KeyDown(Key::Enter));

    assert_eq!(input.emitted(), vec![]);
    assert_eq!(input.find("new-todo").value.as_deref(), Some(""));
}

#[test]
fn whitespace_only_input_neither_emits_nor_clears() {
    let mut input = Mounted::<AddInput>::mount_default();

    input.perform("new-todo", UiEvent::input("   \t "));
    input.perform("new-todo", UiEvent::KeyDown(Key::Enter));

    assert_eq!(input.emitted(), vec![]);
    // The rejected entry stays in place, nothing is cleared.
    assert_eq!(input.find("new-todo").value.as_deref(), Some("   \t "));
}

#[test]
fn other_keys_never_submit() {
    let mut input = Mounted::<AddInput>::mount_default();

    input.perform("new-todo", UiEvent::input("task"));
    input.perform("new-todo", UiEvent::KeyDown(Key::other("a")));
    input.perform("new-todo", UiEvent::KeyDown(Key::other("Shift")));
    input.perform("new-todo", UiEvent::KeyDown(Key::Escape));

    assert_eq!(input.emitted(), vec![]);
    assert_eq!(input.find("new-todo").value.as_deref(), Some("task"));
}

#[test]
fn each_submission_emits_exactly_once() {
    let mut input = Mounted::<AddInput>::mount_default();

    input.perform("new-todo", UiEvent::input("one"));
    input.perform("new-todo", UiEvent::KeyDown(Key::Enter));
    // Enter again on the now-empty input.
    input.perform("new-todo", UiEvent::KeyDown(Key::Enter));

    assert_eq!(input.emitted(), vec![AddInputMsg::Add("one".to_owned())]);
}

#[test]
fn submissions_are_independent() {
    let mut input = Mounted::<AddInput>::mount_default();

    input.perform("new-todo", UiEvent::input("first"));
    input.perform("new-todo", UiEvent::KeyDown(Key::Enter));
    input.perform("new-todo", UiEvent::input("second"));
    input.perform("new-todo", UiEvent::KeyDown(Key::Enter));

    assert_eq!(
        input.emitted(),
        vec![
            AddInputMsg::Add("first".to_owned()),
            AddInputMsg::Add("second".to_owned()),
        ],
    );
}

#[test]
fn unicode_titles_pass_through_trimmed_but_unmodified() {
    let mut input = Mounted::<AddInput>::mount_default();

    input.perform("new-todo", UiEvent::input("  Koupit mléko 🥛  "));
    input.perform("new-todo", UiEvent::KeyDown(Key::Enter));

    assert_eq!(
        input.emitted(),
        vec![AddInputMsg::Add("Koupit mléko 🥛".to_owned())],
    );
}

//! File picker abstraction.
//!
//! The upload form state never touches DOM inputs. Each slot gets a
//! [`FilePicker`] to open or reset the native chooser, and the
//! [`HiddenFilePicker`] component reports picked files through a callback.

use leptos::html::{HtmlElement, Input};
use leptos::*;
use web_sys::File;

use super::asset::SlotKind;

/// A native file chooser.
pub trait FilePicker {
    /// Open the browser's file dialog.
    fn open(&self);
    /// Forget the current selection so picking the same file fires `change` again.
    fn clear(&self);
}

/// Picker backed by a hidden `<input type="file">`.
#[derive(Clone, Copy)]
pub struct HiddenFileInput {
    node: NodeRef<Input>,
}

impl HiddenFileInput {
    pub fn new() -> Self {
        Self {
            node: create_node_ref::<Input>(),
        }
    }

    pub fn node_ref(&self) -> NodeRef<Input> {
        self.node
    }

    /// The mounted input, if any. Unmounted and disposed inputs read as `None`.
    fn input(&self) -> Option<HtmlElement<Input>> {
        self.node.get_untracked()
    }

    /// First file carried by an input `change` event.
    fn selected_file(ev: &web_sys::Event) -> Option<File> {
        let input: web_sys::HtmlInputElement = event_target(ev);
        input.files().and_then(|files| files.get(0))
    }
}

impl Default for HiddenFileInput {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePicker for HiddenFileInput {
    fn open(&self) {
        match self.input() {
            Some(input) => {
                input.set_value("");
                input.click();
            }
            None => log::warn!("file input is not mounted"),
        }
    }

    fn clear(&self) {
        if let Some(input) = self.input() {
            input.set_value("");
        }
    }
}

/// The hidden `<input type="file">` behind a slot's picker.
#[component]
pub fn HiddenFilePicker(
    kind: SlotKind,
    picker: HiddenFileInput,
    #[prop(into)] on_select: Callback<File>,
) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        ev.prevent_default();
        if let Some(file) = HiddenFileInput::selected_file(&ev) {
            on_select.call(file);
        }
    };

    let node_ref = picker.node_ref();

    view! {
        <input
            type="file"
            class="hidden"
            id=kind.input_id()
            name=kind.field_name()
            accept=kind.accept()
            node_ref=node_ref
            on:change=on_change
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmounted_picker_is_noop() {
        let runtime = create_runtime();

        let picker = HiddenFileInput::new();
        picker.clear();
        picker.open();

        let (picker, disposer) = as_child_of_current_owner(|_| HiddenFileInput::new())(());
        drop(disposer);
        picker.clear();
        picker.open();
        assert!(picker.input().is_none());

        runtime.dispose();
    }
}

//! Close-on-outside-click behavior, shared by the params panel and the
//! select dropdowns.

use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use wasm_bindgen::JsCast;

use crate::dom::DocumentListener;

/// Reports pointer-down events that land outside the element `target_id`.
///
/// One `pointerdown` listener is attached to the document for the lifetime
/// of the calling component. It is re-registered whenever `is_open` flips,
/// so the handler always sees the value that was current at registration
/// time, and the guard is dropped on unmount. While `is_open` is false the
/// handler ignores every event.
///
/// The DOM closure runs outside the component scope, so it never touches
/// component state itself: hits are forwarded through a channel and drained
/// by a task owned by the scope, which then fires `on_outside`.
pub fn use_outside_click(
    target_id: String,
    is_open: ReadSignal<bool>,
    on_outside: EventHandler<()>,
) {
    let sender = use_hook(|| {
        let (tx, mut rx) = mpsc::unbounded::<()>();
        spawn(async move {
            while rx.next().await.is_some() {
                on_outside.call(());
            }
        });
        tx
    });

    let mut listener: Signal<Option<DocumentListener>> = use_signal(|| None);

    use_effect(move || {
        let open = is_open();
        // Detach the previous registration first so there is never a moment
        // with two live listeners.
        listener.write().take();

        let id = target_id.clone();
        let tx = sender.clone();
        listener.set(DocumentListener::attach("pointerdown", move |event| {
            if open && is_outside(&event, &id) {
                let _ = tx.unbounded_send(());
            }
        }));
    });

    use_drop(move || {
        listener.write().take();
    });
}

/// True when the element `element_id` exists and does not contain the event
/// target. An unresolvable element means we cannot prove the click was
/// outside, so it does not count.
fn is_outside(event: &web_sys::Event, element_id: &str) -> bool {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
    else {
        return false;
    };

    !event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| root.contains(Some(&node)))
}

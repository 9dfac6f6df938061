//! Document-level event listener with scoped cleanup.
//!
//! A listener attached through the raw DOM API outlives the component that
//! registered it unless something removes it again. [`DocumentListener`]
//! ties the registration to a Rust value: attaching returns a guard, and
//! dropping the guard detaches the listener and frees the JS closure.
//! Components keep the guard in a `Signal<Option<DocumentListener>>` so
//! replacing or clearing the signal is the release.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Guard over one document event listener; detaches on drop.
pub struct DocumentListener {
    document: web_sys::Document,
    event: &'static str,
    handler: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentListener {
    /// Attaches `handler` to the document for `event`.
    ///
    /// Returns `None` when no document is available (non-browser target),
    /// in which case nothing was attached.
    pub fn attach(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let handler: Closure<dyn FnMut(web_sys::Event)> = Closure::new(handler);
        document
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            document,
            event,
            handler,
        })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event,
            self.handler.as_ref().unchecked_ref(),
        );
    }
}

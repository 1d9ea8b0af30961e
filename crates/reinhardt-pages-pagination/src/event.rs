//! Platform-neutral click events.
//!
//! On WASM the handlers receive the real `web_sys::Event`; natively they get a
//! [`DummyEvent`] that records whether the default action was prevented.

use std::cell::Cell;
use std::sync::Arc;

/// The subset of DOM event behavior the pagination links rely on.
pub trait DomEvent {
	/// Cancels the browser's default action (following the `href`).
	fn prevent_default(&self);
}

#[cfg(target_arch = "wasm32")]
impl DomEvent for web_sys::Event {
	fn prevent_default(&self) {
		web_sys::Event::prevent_default(self);
	}
}

/// Stand-in event for server-side rendering and tests.
#[derive(Debug, Default)]
pub struct DummyEvent {
	default_prevented: Cell<bool>,
}

impl DummyEvent {
	/// Creates a new event whose default action has not been prevented.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns whether [`DomEvent::prevent_default`] was called.
	pub fn default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}

impl DomEvent for DummyEvent {
	fn prevent_default(&self) {
		self.default_prevented.set(true);
	}
}

/// DOM event kinds a view element can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// `click`
	Click,
}

impl EventType {
	/// Returns the DOM event name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Click => "click",
		}
	}
}

/// Type alias for event handler functions.
#[cfg(target_arch = "wasm32")]
pub type ViewEventHandler = Arc<dyn Fn(&dyn DomEvent) + 'static>;

/// Type alias for event handler functions (non-WASM version).
#[cfg(not(target_arch = "wasm32"))]
pub type ViewEventHandler = Arc<dyn Fn(&dyn DomEvent) + Send + Sync + 'static>;

//! Click-driven page changes.
//!
//! A click on a pagination link runs three steps:
//!
//! 1. The browser's default link navigation is prevented.
//! 2. The injected [`Navigator`] moves the URL to the link's href.
//!    [`BrowserNavigator`] pushes a history entry and falls back to a full
//!    page load when the History API is unavailable.
//! 3. The page-change callback receives the target page.
//!
//! Non-clickable links (the ellipsis, disabled controls) stop after step 1.
//! The component never stores the new page itself. The caller feeds it back
//! through the props on the next render.

use crate::callback::Callback;
use crate::error::NavigationError;
use crate::event::DomEvent;
use crate::link::ResolvedLink;
use crate::{debug_log, error_log};
use std::sync::Arc;

/// History state stored with each pushed entry.
pub const HISTORY_STATE: &str = "reinhardt-pages-pagination";

/// How a navigation was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
	/// A history entry was pushed without reloading
	PushState,
	/// The browser performed a full page load
	FullLoad,
	/// The URL was left untouched
	Skipped,
}

/// Capability to move the visible URL to a new path.
pub trait Navigator: Send + Sync {
	/// Navigates to `path`.
	fn navigate(&self, path: &str) -> Result<NavigationMode, NavigationError>;
}

/// Navigator backed by `window.history` and `window.location`.
///
/// Outside WASM there is no browser, so navigation is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
	/// Creates a new browser navigator.
	pub fn new() -> Self {
		Self
	}
}

#[cfg(target_arch = "wasm32")]
impl BrowserNavigator {
	fn push_state(window: &web_sys::Window, path: &str) -> Result<(), NavigationError> {
		let history = window
			.history()
			.map_err(|_| NavigationError::HistoryUnavailable)?;
		let title = window.document().map(|d| d.title()).unwrap_or_default();
		history
			.push_state_with_url(
				&wasm_bindgen::JsValue::from_str(HISTORY_STATE),
				&title,
				Some(path),
			)
			.map_err(|e| NavigationError::PushStateFailed(format!("{:?}", e)))
	}
}

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
	fn navigate(&self, path: &str) -> Result<NavigationMode, NavigationError> {
		let window = web_sys::window().ok_or(NavigationError::NoWindow)?;

		match Self::push_state(&window, path) {
			Ok(()) => Ok(NavigationMode::PushState),
			Err(err) => {
				debug_log!("{}; falling back to full navigation to {}", err, path);
				window
					.location()
					.set_href(path)
					.map_err(|e| NavigationError::AssignFailed(format!("{:?}", e)))?;
				Ok(NavigationMode::FullLoad)
			}
		}
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl Navigator for BrowserNavigator {
	fn navigate(&self, path: &str) -> Result<NavigationMode, NavigationError> {
		debug_log!("No browser available, skipping navigation to {}", path);
		Ok(NavigationMode::Skipped)
	}
}

/// Result of handling one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
	/// The link was not clickable; nothing happened
	Ignored,
	/// The callback was invoked with `page`
	Changed {
		/// Target page passed to the callback
		page: i64,
		/// How the URL was updated
		mode: NavigationMode,
	},
}

/// Handles clicks on resolved pagination links.
#[derive(Clone)]
pub struct NavigationHandler {
	navigator: Arc<dyn Navigator>,
	on_change: Callback<i64>,
}

impl std::fmt::Debug for NavigationHandler {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationHandler")
			.field("navigator", &"<navigator>")
			.field("on_change", &self.on_change)
			.finish()
	}
}

impl NavigationHandler {
	/// Creates a handler that navigates with `navigator` and reports to `on_change`.
	pub fn new(navigator: Arc<dyn Navigator>, on_change: Callback<i64>) -> Self {
		Self {
			navigator,
			on_change,
		}
	}

	/// Handles a click on `link`.
	///
	/// A failed navigation is logged and does not suppress the callback.
	pub fn handle_click(&self, link: &ResolvedLink, event: &dyn DomEvent) -> ClickOutcome {
		event.prevent_default();

		let page = match link.target {
			Some(page) if link.clickable => page,
			_ => return ClickOutcome::Ignored,
		};

		let mode = match self.navigator.navigate(&link.href) {
			Ok(mode) => mode,
			Err(err) => {
				error_log!("Navigation to {} failed: {}", link.href, err);
				NavigationMode::Skipped
			}
		};
		debug_log!("Page change to {} ({:?})", page, mode);

		self.on_change.call(page);
		ClickOutcome::Changed { page, mode }
	}
}

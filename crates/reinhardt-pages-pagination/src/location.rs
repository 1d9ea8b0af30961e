//! Ambient URL query string access.
//!
//! When a pagination control is given no explicit params, its links preserve
//! the current page's query string instead. That lookup goes through
//! [`LocationSource`] so SSR code can supply the request's query string and
//! tests can supply a fixed one.

/// Source of the current URL's query string.
pub trait LocationSource: Send + Sync {
	/// Returns the query string, with or without a leading `?`, if there is one.
	fn query_string(&self) -> Option<String>;
}

/// Reads `window.location.search`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl BrowserLocation {
	/// Creates a new browser location accessor.
	pub fn new() -> Self {
		Self
	}
}

#[cfg(target_arch = "wasm32")]
impl LocationSource for BrowserLocation {
	fn query_string(&self) -> Option<String> {
		let window = web_sys::window()?;
		window.location().search().ok().filter(|s| !s.is_empty())
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl LocationSource for BrowserLocation {
	fn query_string(&self) -> Option<String> {
		None
	}
}

/// A fixed query string, e.g. the one of the request being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocation {
	query: Option<String>,
}

impl StaticLocation {
	/// Creates a location with the given query string.
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: Some(query.into()),
		}
	}

	/// Creates a location without a query string.
	pub fn empty() -> Self {
		Self::default()
	}
}

impl LocationSource for StaticLocation {
	fn query_string(&self) -> Option<String> {
		self.query.clone()
	}
}

//! Test doubles for pagination navigation.
//!
//! ```ignore
//! use reinhardt_pages_pagination::testing::RecordingNavigator;
//!
//! let navigator = Arc::new(RecordingNavigator::new());
//! let pagination = Pagination::builder(props, on_change)
//!     .navigator(navigator.clone())
//!     .build();
//!
//! pagination.click(3, &DummyEvent::new());
//! assert_eq!(navigator.paths(), vec!["?page=4"]);
//! ```

use crate::error::NavigationError;
use crate::navigation::{NavigationMode, Navigator};
use std::sync::Mutex;

/// Navigator that records every requested path instead of touching a browser.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
	paths: Mutex<Vec<String>>,
	failure: Option<NavigationError>,
}

impl RecordingNavigator {
	/// Creates a navigator that reports every navigation as a history push.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a navigator that records paths but fails with `error`.
	pub fn failing(error: NavigationError) -> Self {
		Self {
			paths: Mutex::new(Vec::new()),
			failure: Some(error),
		}
	}

	/// Returns the recorded paths in order.
	pub fn paths(&self) -> Vec<String> {
		self.paths
			.lock()
			.map(|paths| paths.clone())
			.unwrap_or_default()
	}

	/// Returns the most recent path.
	pub fn last_path(&self) -> Option<String> {
		self.paths().pop()
	}
}

impl Navigator for RecordingNavigator {
	fn navigate(&self, path: &str) -> Result<NavigationMode, NavigationError> {
		if let Ok(mut paths) = self.paths.lock() {
			paths.push(path.to_string());
		}
		match &self.failure {
			Some(error) => Err(error.clone()),
			None => Ok(NavigationMode::PushState),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_records_paths() {
		let navigator = RecordingNavigator::new();
		assert_eq!(navigator.navigate("?page=2"), Ok(NavigationMode::PushState));
		assert_eq!(navigator.navigate("?page=3"), Ok(NavigationMode::PushState));

		assert_eq!(navigator.paths(), vec!["?page=2", "?page=3"]);
		assert_eq!(navigator.last_path().as_deref(), Some("?page=3"));
	}

	#[test]
	fn test_failing_navigator_still_records() {
		let navigator = RecordingNavigator::failing(NavigationError::HistoryUnavailable);
		assert_eq!(
			navigator.navigate("?page=2"),
			Err(NavigationError::HistoryUnavailable)
		);
		assert_eq!(navigator.paths(), vec!["?page=2"]);
	}
}

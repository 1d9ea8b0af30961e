//! Error types for reinhardt-pages-pagination

use thiserror::Error;

/// Error raised while moving the browser to a new page URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
	/// Window object not available
	#[error("Window object not available")]
	NoWindow,

	/// History API not available in this runtime
	#[error("History API not available")]
	HistoryUnavailable,

	/// `history.pushState` rejected the new entry
	#[error("pushState failed: {0}")]
	PushStateFailed(String),

	/// Assigning `location.href` failed
	#[error("Full page navigation failed: {0}")]
	AssignFailed(String),
}

/// Error raised while constructing props from hydration data.
#[derive(Debug, Error)]
pub enum PropsError {
	/// Missing required property
	#[error("Missing required property: {0}")]
	MissingProperty(String),

	/// Property present but unparsable
	#[error("Invalid value for property `{name}`: {value}")]
	InvalidProperty {
		/// Property name
		name: String,
		/// Raw value that failed to parse
		value: String,
	},

	/// Props JSON could not be decoded
	#[error("Invalid props JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// Error type for mounting views to the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("Document object not available")]
	NoDocument,
	/// Failed to create an element.
	#[error("Failed to create element")]
	CreateElementFailed,
	/// Failed to set an attribute.
	#[error("Failed to set attribute")]
	SetAttributeFailed,
	/// Failed to append a child element.
	#[error("Failed to append child")]
	AppendChildFailed,
	/// Failed to register an event listener.
	#[error("Failed to add event listener")]
	AddListenerFailed,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(NavigationError::NoWindow, "Window object not available")]
	#[case(NavigationError::HistoryUnavailable, "History API not available")]
	#[case(
		NavigationError::PushStateFailed("SecurityError".to_string()),
		"pushState failed: SecurityError"
	)]
	#[case(
		NavigationError::AssignFailed("blocked".to_string()),
		"Full page navigation failed: blocked"
	)]
	fn test_navigation_error_display(#[case] error: NavigationError, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}

	#[rstest]
	fn test_props_error_display() {
		assert_eq!(
			PropsError::MissingProperty("pages".to_string()).to_string(),
			"Missing required property: pages"
		);
		assert_eq!(
			PropsError::InvalidProperty {
				name: "page".to_string(),
				value: "abc".to_string(),
			}
			.to_string(),
			"Invalid value for property `page`: abc"
		);
	}

	#[rstest]
	fn test_props_error_from_json() {
		let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let err: PropsError = json_err.into();
		assert!(matches!(err, PropsError::Json(_)));
		assert!(err.to_string().starts_with("Invalid props JSON"));
	}
}

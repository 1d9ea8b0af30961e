//! Pagination component properties.
//!
//! [`PaginationProps`] is the caller-owned configuration. The component reads
//! it fresh on every render and keeps no copy of the page number of its own.
//!
//! Props can be built in code, decoded from JSON, or reconstructed from HTML
//! attributes during hydration:
//!
//! ```
//! use reinhardt_pages_pagination::PaginationProps;
//!
//! let props = PaginationProps::new(3, 12)
//!     .path("/articles")
//!     .param("tag", "rust")
//!     .outline(true)
//!     .color("primary");
//!
//! assert_eq!(props.additional_class(), "rails-pagination-outline-primary");
//! ```

use crate::error::PropsError;
use crate::range::RangeOptions;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Base CSS class of the list container.
pub const CLASS_PREFIX: &str = "rails-pagination";

/// Configuration of one pagination control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationProps {
	/// Current page, 1-indexed
	pub page: i64,
	/// Total page count
	pub pages: i64,
	/// Base path for generated links
	#[serde(default)]
	pub path: String,
	/// Query parameters to preserve; the ambient query string is used when empty
	#[serde(default)]
	pub params: BTreeMap<String, String>,
	/// Hide the `<<` / `>>` controls
	#[serde(default)]
	pub hide_end_arrows: bool,
	/// Hide the `Prev` / `Next` controls
	#[serde(default)]
	pub hide_nav_buttons: bool,
	/// Outline style variant
	#[serde(default)]
	pub outline: bool,
	/// Accent color name
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
}

impl PaginationProps {
	/// Creates props for `page` out of `pages` with every option at its default.
	pub fn new(page: i64, pages: i64) -> Self {
		Self {
			page,
			pages,
			..Self::default()
		}
	}

	/// Sets the base path for generated links.
	pub fn path(mut self, path: impl Into<String>) -> Self {
		self.path = path.into();
		self
	}

	/// Adds a query parameter to preserve.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());
		self
	}

	/// Replaces the preserved query parameters.
	pub fn params(mut self, params: BTreeMap<String, String>) -> Self {
		self.params = params;
		self
	}

	/// Sets whether the `<<` / `>>` controls are hidden.
	pub fn hide_end_arrows(mut self, hide: bool) -> Self {
		self.hide_end_arrows = hide;
		self
	}

	/// Sets whether the `Prev` / `Next` controls are hidden.
	pub fn hide_nav_buttons(mut self, hide: bool) -> Self {
		self.hide_nav_buttons = hide;
		self
	}

	/// Sets the outline style variant.
	pub fn outline(mut self, outline: bool) -> Self {
		self.outline = outline;
		self
	}

	/// Sets the accent color.
	pub fn color(mut self, color: impl Into<String>) -> Self {
		self.color = Some(color.into());
		self
	}

	/// Returns the options for the range builder.
	pub fn range_options(&self) -> RangeOptions {
		RangeOptions::new()
			.hide_nav_buttons(self.hide_nav_buttons)
			.hide_end_arrows(self.hide_end_arrows)
	}

	/// Returns the style variant class, or an empty string when neither
	/// `outline` nor `color` is set.
	pub fn additional_class(&self) -> String {
		let mut suffix = String::new();
		if self.outline {
			suffix.push_str("-outline");
		}
		if let Some(color) = self.color.as_deref().filter(|c| !c.is_empty()) {
			suffix.push('-');
			suffix.push_str(color);
		}

		if suffix.is_empty() {
			suffix
		} else {
			format!("{CLASS_PREFIX}{suffix}")
		}
	}

	/// Returns the full class attribute of the list container.
	pub fn container_class(&self) -> String {
		let additional = self.additional_class();
		if additional.is_empty() {
			CLASS_PREFIX.to_string()
		} else {
			format!("{CLASS_PREFIX} {additional}")
		}
	}

	/// Decodes props from JSON (camelCase keys).
	pub fn from_json(json: &str) -> Result<Self, PropsError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Reconstructs props from HTML attributes during hydration.
	///
	/// Attribute names are kebab-case (`hide-end-arrows`). Boolean attributes
	/// accept `true` / `false`, and an empty value counts as `true`. `params`
	/// is an urlencoded query string.
	pub fn from_attrs(attrs: &HashMap<String, String>) -> Result<Self, PropsError> {
		let params: BTreeMap<String, String> = match attrs.get("params") {
			Some(raw) => serde_urlencoded::from_str(raw.trim_start_matches('?')).map_err(|_| {
				PropsError::InvalidProperty {
					name: "params".to_string(),
					value: raw.clone(),
				}
			})?,
			None => BTreeMap::new(),
		};

		Ok(Self {
			page: required_int(attrs, "page")?,
			pages: required_int(attrs, "pages")?,
			path: attrs.get("path").cloned().unwrap_or_default(),
			params,
			hide_end_arrows: bool_attr(attrs, "hide-end-arrows")?,
			hide_nav_buttons: bool_attr(attrs, "hide-nav-buttons")?,
			outline: bool_attr(attrs, "outline")?,
			color: attrs.get("color").filter(|c| !c.is_empty()).cloned(),
		})
	}
}

fn required_int(attrs: &HashMap<String, String>, name: &str) -> Result<i64, PropsError> {
	let raw = attrs
		.get(name)
		.ok_or_else(|| PropsError::MissingProperty(name.to_string()))?;
	raw.trim()
		.parse()
		.map_err(|_| PropsError::InvalidProperty {
			name: name.to_string(),
			value: raw.clone(),
		})
}

fn bool_attr(attrs: &HashMap<String, String>, name: &str) -> Result<bool, PropsError> {
	match attrs.get(name).map(|v| v.trim()) {
		None | Some("false") => Ok(false),
		Some("") | Some("true") => Ok(true),
		Some(other) => Err(PropsError::InvalidProperty {
			name: name.to_string(),
			value: other.to_string(),
		}),
	}
}

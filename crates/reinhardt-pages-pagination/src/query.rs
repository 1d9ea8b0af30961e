//! Query string handling for generated page links.
//!
//! Links are built as `{path}?{params}&page={n}`. [`QueryParams`] keeps the
//! non-`page` parameters in their original order (duplicates included) so the
//! generated links change nothing but the page number.

use std::collections::BTreeMap;

/// Query parameter that carries the page number.
pub const PAGE_PARAM: &str = "page";

/// Ordered list of query string pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a query string, with or without the leading `?`.
	///
	/// Malformed input yields an empty list rather than an error, matching
	/// the browser's lenient `URLSearchParams` parsing.
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query).unwrap_or_default();
		Self { pairs }
	}

	/// Appends a pair.
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((key.into(), value.into()));
	}

	/// Removes every pair with the given key.
	pub fn remove(&mut self, key: &str) {
		self.pairs.retain(|(k, _)| k != key);
	}

	/// Returns the first value for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Returns the pairs in order.
	pub fn pairs(&self) -> &[(String, String)] {
		&self.pairs
	}

	/// Returns `true` when there are no pairs.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Serializes to `application/x-www-form-urlencoded` without a leading `?`.
	pub fn to_query_string(&self) -> String {
		// Serializing a list of string pairs cannot fail
		serde_urlencoded::to_string(&self.pairs).unwrap_or_default()
	}

	/// Returns a copy without the page parameter.
	pub fn without_page(mut self) -> Self {
		self.remove(PAGE_PARAM);
		self
	}
}

impl From<&BTreeMap<String, String>> for QueryParams {
	fn from(map: &BTreeMap<String, String>) -> Self {
		Self {
			pairs: map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
		}
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			pairs: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

/// Picks the parameters to preserve in page links.
///
/// Explicit parameters win when non-empty, otherwise the ambient query
/// string is used. The page parameter is stripped from either source.
pub fn preserved_params(explicit: &BTreeMap<String, String>, ambient: Option<&str>) -> QueryParams {
	let params = if explicit.is_empty() {
		ambient.map(QueryParams::parse).unwrap_or_default()
	} else {
		QueryParams::from(explicit)
	};
	params.without_page()
}

/// Builds the link prefix that a page number is appended to.
///
/// Yields `{path}?page=` without parameters and `{path}?{params}&page=` with them.
pub fn base_href(path: &str, params: &QueryParams) -> String {
	let query = params.to_query_string();
	if query.is_empty() {
		format!("{path}?{PAGE_PARAM}=")
	} else {
		format!("{path}?{query}&{PAGE_PARAM}=")
	}
}

/// Builds the full link for `page`.
pub fn page_href(base: &str, page: i64) -> String {
	format!("{base}{page}")
}

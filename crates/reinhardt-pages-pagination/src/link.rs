//! Link resolution for page tokens.
//!
//! Each [`PageToken`] becomes a [`ResolvedLink`] that knows its target page,
//! whether it can be clicked, whether it marks the current page, and the
//! href to navigate to.

use crate::query::page_href;
use crate::range::PageToken;

/// CSS class of the list item holding the current page.
pub const ACTIVE_CLASS: &str = "active";
/// CSS class of every other list item.
pub const INACTIVE_CLASS: &str = "inactive";
/// CSS class of links that cannot be clicked.
pub const DISABLED_CLASS: &str = "disabled";
/// CSS class of the ellipsis link.
pub const SEPARATOR_CLASS: &str = "separator";

/// A token with its navigation target resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
	/// Token this link was resolved from
	pub token: PageToken,
	/// Page the link leads to; `None` for the ellipsis
	pub target: Option<i64>,
	/// Whether clicking the link changes the page
	pub clickable: bool,
	/// Whether this link is the current page
	pub active: bool,
	/// Destination, empty when not clickable
	pub href: String,
}

impl ResolvedLink {
	/// Returns the displayed text.
	pub fn label(&self) -> String {
		self.token.label()
	}

	/// Returns the class of the enclosing list item.
	pub fn item_class(&self) -> &'static str {
		if self.active {
			ACTIVE_CLASS
		} else {
			INACTIVE_CLASS
		}
	}

	/// Returns the class attribute of the anchor.
	pub fn link_class(&self) -> String {
		let mut classes = Vec::with_capacity(2);
		if !self.clickable {
			classes.push(DISABLED_CLASS);
		}
		if self.is_separator() {
			classes.push(SEPARATOR_CLASS);
		}
		classes.join(" ")
	}

	/// Returns `true` for the non-interactive ellipsis.
	pub fn is_separator(&self) -> bool {
		self.token == PageToken::Ellipsis
	}
}

/// Resolves a single token for the current `page` out of `pages`.
///
/// `base_href` is the prefix produced by [`crate::query::base_href`].
pub fn resolve_link(token: PageToken, page: i64, pages: i64, base_href: &str) -> ResolvedLink {
	let (target, clickable) = match token {
		PageToken::Page(n) => (Some(n), true),
		PageToken::Prev => (Some(page.saturating_sub(1)), page > 1),
		PageToken::Next => (Some(page.saturating_add(1)), page < pages),
		PageToken::First => (Some(1), page != 1),
		PageToken::Last => (Some(pages), page != pages),
		PageToken::Ellipsis => (None, false),
	};

	let href = match target {
		Some(target) if clickable => page_href(base_href, target),
		_ => String::new(),
	};

	ResolvedLink {
		token,
		target,
		clickable,
		active: token == PageToken::Page(page),
		href,
	}
}

/// Resolves every token in order.
pub fn resolve_links(tokens: &[PageToken], page: i64, pages: i64, base_href: &str) -> Vec<ResolvedLink> {
	tokens
		.iter()
		.map(|token| resolve_link(*token, page, pages, base_href))
		.collect()
}

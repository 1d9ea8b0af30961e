//! Page range computation.
//!
//! [`build_range`] turns the current page and total page count into the
//! ordered list of [`PageToken`]s the control displays: a window of
//! [`WINDOW_RADIUS`] pages around the current one, both edges either filled in
//! or collapsed behind an ellipsis, and the directional controls.
//!
//! ```text
//! page = 50, pages = 100
//! << Prev 1 2 ... 47 48 49 50 51 52 53 ... 99 100 Next >>
//! ```
//!
//! Inputs outside `1 ..= pages` are not rejected. They produce whatever the
//! final filter leaves over, and never panic.

use std::fmt;

/// Number of pages shown on each side of the current page.
pub const WINDOW_RADIUS: i64 = 3;

/// Minimum gap between the window and an edge that collapses into an ellipsis.
pub const EDGE_THRESHOLD: i64 = 3;

/// One visual unit of the pagination list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
	/// A concrete page number
	Page(i64),
	/// Collapsed run of hidden pages
	Ellipsis,
	/// Previous page
	Prev,
	/// Next page
	Next,
	/// First page (`<<`)
	First,
	/// Last page (`>>`)
	Last,
}

impl PageToken {
	/// Returns the text displayed for this token.
	pub fn label(&self) -> String {
		match self {
			Self::Page(n) => n.to_string(),
			Self::Ellipsis => "...".to_string(),
			Self::Prev => "Prev".to_string(),
			Self::Next => "Next".to_string(),
			Self::First => "<<".to_string(),
			Self::Last => ">>".to_string(),
		}
	}

	/// Returns the page number for [`PageToken::Page`], `None` otherwise.
	pub fn page_number(&self) -> Option<i64> {
		match self {
			Self::Page(n) => Some(*n),
			_ => None,
		}
	}
}

impl fmt::Display for PageToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label())
	}
}

/// Which directional controls [`build_range`] adds around the page numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeOptions {
	/// Omit `Prev` / `Next`
	pub hide_nav_buttons: bool,
	/// Omit `First` / `Last`
	pub hide_end_arrows: bool,
}

impl RangeOptions {
	/// Options with every control visible.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether `Prev` / `Next` are hidden.
	pub fn hide_nav_buttons(mut self, hide: bool) -> Self {
		self.hide_nav_buttons = hide;
		self
	}

	/// Sets whether `First` / `Last` are hidden.
	pub fn hide_end_arrows(mut self, hide: bool) -> Self {
		self.hide_end_arrows = hide;
		self
	}
}

/// Builds the ordered token sequence for `page` out of `pages`.
///
/// # Example
///
/// ```
/// use reinhardt_pages_pagination::range::{PageToken, RangeOptions, build_range};
///
/// let tokens = build_range(3, 5, RangeOptions::new().hide_nav_buttons(true).hide_end_arrows(true));
/// assert_eq!(
///     tokens,
///     (1..=5).map(PageToken::Page).collect::<Vec<_>>()
/// );
/// ```
pub fn build_range(page: i64, pages: i64, options: RangeOptions) -> Vec<PageToken> {
	let mut tokens: Vec<PageToken> = Vec::with_capacity(17);

	let window_start = page.saturating_sub(WINDOW_RADIUS);
	let window_end = page.saturating_add(WINDOW_RADIUS);
	let mut n = window_start;
	loop {
		push_unique(&mut tokens, PageToken::Page(n));
		if n >= window_end {
			break;
		}
		n += 1;
	}

	// Right edge
	let last = window_end;
	if pages.saturating_sub(last) >= EDGE_THRESHOLD {
		tokens.push(PageToken::Ellipsis);
		tokens.push(PageToken::Page(pages.saturating_sub(1)));
		tokens.push(PageToken::Page(pages));
	} else {
		let mut n = last.saturating_add(1);
		while n <= pages {
			push_unique(&mut tokens, PageToken::Page(n));
			if n == i64::MAX {
				break;
			}
			n += 1;
		}
	}

	// Left edge
	let first = window_start;
	if first.saturating_sub(1) > EDGE_THRESHOLD {
		let mut head = vec![PageToken::Page(1), PageToken::Page(2), PageToken::Ellipsis];
		head.append(&mut tokens);
		tokens = head;
	} else {
		let mut n = first.saturating_sub(1);
		while n >= 1 {
			if !tokens.contains(&PageToken::Page(n)) {
				tokens.insert(0, PageToken::Page(n));
			}
			n -= 1;
		}
	}

	if !options.hide_nav_buttons {
		tokens.insert(0, PageToken::Prev);
		tokens.push(PageToken::Next);
	}

	if !options.hide_end_arrows {
		tokens.insert(0, PageToken::First);
		tokens.push(PageToken::Last);
	}

	tokens.retain(|token| match token {
		PageToken::Page(n) => *n > 0 && *n <= pages,
		_ => true,
	});

	tokens
}

fn push_unique(tokens: &mut Vec<PageToken>, token: PageToken) {
	if !tokens.contains(&token) {
		tokens.push(token);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn pages(range: std::ops::RangeInclusive<i64>) -> Vec<PageToken> {
		range.map(PageToken::Page).collect()
	}

	fn bare() -> RangeOptions {
		RangeOptions::new()
			.hide_nav_buttons(true)
			.hide_end_arrows(true)
	}

	#[rstest]
	fn test_collapses_both_sides() {
		use PageToken::*;

		let tokens = build_range(50, 100, bare());
		assert_eq!(
			tokens,
			vec![
				Page(1),
				Page(2),
				Ellipsis,
				Page(47),
				Page(48),
				Page(49),
				Page(50),
				Page(51),
				Page(52),
				Page(53),
				Ellipsis,
				Page(99),
				Page(100),
			]
		);
	}

	#[rstest]
	#[case(3, 5)]
	#[case(1, 5)]
	#[case(5, 5)]
	#[case(4, 7)]
	fn test_small_range_fully_filled(#[case] page: i64, #[case] total: i64) {
		let tokens = build_range(page, total, bare());
		assert_eq!(tokens, pages(1..=total));
	}

	#[rstest]
	fn test_first_page_collapses_right_only() {
		use PageToken::*;

		let tokens = build_range(1, 100, bare());
		assert_eq!(
			tokens,
			vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(99), Page(100)]
		);
	}

	#[rstest]
	fn test_last_page_collapses_left_only() {
		use PageToken::*;

		let tokens = build_range(100, 100, bare());
		assert_eq!(
			tokens,
			vec![Page(1), Page(2), Ellipsis, Page(97), Page(98), Page(99), Page(100)]
		);
	}

	#[rstest]
	// Gap of exactly 3 pages on the right collapses
	#[case(94, 100, true)]
	// Gap of 2 pages on the right is filled in
	#[case(95, 100, false)]
	fn test_right_edge_threshold(#[case] page: i64, #[case] total: i64, #[case] collapsed: bool) {
		let tokens = build_range(page, total, bare());
		let tail = &tokens[tokens.len() - 3..];
		assert_eq!(tail[0] == PageToken::Ellipsis, collapsed);
		assert_eq!(tokens.last(), Some(&PageToken::Page(total)));
	}

	#[rstest]
	// first candidate 4: gap of 3 before it is filled in
	#[case(7, false)]
	// first candidate 5: gap of 4 collapses
	#[case(8, true)]
	fn test_left_edge_threshold(#[case] page: i64, #[case] collapsed: bool) {
		let tokens = build_range(page, 100, bare());
		assert_eq!(tokens[2] == PageToken::Ellipsis, collapsed);
		assert_eq!(tokens[0], PageToken::Page(1));
	}

	#[rstest]
	fn test_controls_wrap_page_numbers() {
		use PageToken::*;

		let tokens = build_range(2, 3, RangeOptions::new());
		assert_eq!(
			tokens,
			vec![First, Prev, Page(1), Page(2), Page(3), Next, Last]
		);
	}

	#[rstest]
	#[case(false, false, true, true)]
	#[case(true, false, false, true)]
	#[case(false, true, true, false)]
	#[case(true, true, false, false)]
	fn test_control_flags_are_independent(
		#[case] hide_nav_buttons: bool,
		#[case] hide_end_arrows: bool,
		#[case] has_nav: bool,
		#[case] has_arrows: bool,
	) {
		let options = RangeOptions::new()
			.hide_nav_buttons(hide_nav_buttons)
			.hide_end_arrows(hide_end_arrows);
		let tokens = build_range(10, 20, options);

		assert_eq!(tokens.contains(&PageToken::Prev), has_nav);
		assert_eq!(tokens.contains(&PageToken::Next), has_nav);
		assert_eq!(tokens.contains(&PageToken::First), has_arrows);
		assert_eq!(tokens.contains(&PageToken::Last), has_arrows);
	}

	#[rstest]
	fn test_single_page() {
		use PageToken::*;

		let tokens = build_range(1, 1, RangeOptions::new());
		assert_eq!(tokens, vec![First, Prev, Page(1), Next, Last]);
	}

	#[rstest]
	#[case(0, 0)]
	#[case(1, 0)]
	#[case(-5, 10)]
	#[case(12, 10)]
	#[case(i64::MIN, i64::MAX)]
	#[case(i64::MAX, i64::MIN)]
	#[case(i64::MAX, i64::MAX)]
	fn test_degenerate_input_does_not_panic(#[case] page: i64, #[case] total: i64) {
		let tokens = build_range(page, total, RangeOptions::new());
		assert!(tokens.len() <= 17);
		for token in tokens {
			if let PageToken::Page(n) = token {
				assert!(n > 0 && n <= total);
			}
		}
	}

	#[rstest]
	fn test_page_beyond_total_keeps_tail() {
		use PageToken::*;

		let tokens = build_range(12, 10, bare());
		assert_eq!(tokens, vec![Page(1), Page(2), Ellipsis, Page(9), Page(10)]);
	}

	#[rstest]
	#[case(PageToken::Page(12), "12")]
	#[case(PageToken::Ellipsis, "...")]
	#[case(PageToken::Prev, "Prev")]
	#[case(PageToken::Next, "Next")]
	#[case(PageToken::First, "<<")]
	#[case(PageToken::Last, ">>")]
	fn test_token_label(#[case] token: PageToken, #[case] expected: &str) {
		assert_eq!(token.label(), expected);
		assert_eq!(token.to_string(), expected);
	}
}

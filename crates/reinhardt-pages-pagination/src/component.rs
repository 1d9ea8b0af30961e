//! The pagination component.
//!
//! [`Pagination`] renders an `<ul>` of page links for the current props:
//!
//! ```text
//! <ul class="rails-pagination">
//!   <li class="inactive"><a href="?page=1">&lt;&lt;</a></li>
//!   <li class="inactive"><a href="?page=49">Prev</a></li>
//!   ...
//!   <li class="active"><a href="?page=50">50</a></li>
//!   ...
//! </ul>
//! ```
//!
//! The page number belongs to the caller. After a click the component reports
//! the new page through its callback, and the caller passes it back with
//! [`Pagination::set_page`] (or new props) before the next render.

use crate::callback::Callback;
use crate::event::{DomEvent, EventType};
use crate::link::{ResolvedLink, resolve_links};
use crate::location::{BrowserLocation, LocationSource};
use crate::navigation::{BrowserNavigator, ClickOutcome, NavigationHandler, Navigator};
use crate::props::PaginationProps;
use crate::query::{base_href, preserved_params};
use crate::range::{PageToken, build_range};
use crate::view::{ElementView, View};
use std::sync::Arc;

/// Trait for renderable UI components.
pub trait Component: 'static {
	/// Renders the component to a View.
	fn render(&self) -> View;

	/// Returns the component's name for debugging and hydration.
	fn name() -> &'static str
	where
		Self: Sized;
}

/// Pagination link list.
#[derive(Debug, Clone)]
pub struct Pagination {
	props: PaginationProps,
	ambient_query: Option<String>,
	handler: NavigationHandler,
}

impl Pagination {
	/// Creates a pagination control with the platform's location and navigator.
	pub fn new(props: PaginationProps, on_change: Callback<i64>) -> Self {
		Self::builder(props, on_change).build()
	}

	/// Starts building a pagination control with injected capabilities.
	pub fn builder(props: PaginationProps, on_change: Callback<i64>) -> PaginationBuilder {
		PaginationBuilder {
			props,
			on_change,
			location: Arc::new(BrowserLocation::new()),
			navigator: Arc::new(BrowserNavigator::new()),
		}
	}

	/// Returns the current props.
	pub fn props(&self) -> &PaginationProps {
		&self.props
	}

	/// Replaces the props. The ambient query string stays as captured.
	pub fn set_props(&mut self, props: PaginationProps) {
		self.props = props;
	}

	/// Updates the current page.
	pub fn set_page(&mut self, page: i64) {
		self.props.page = page;
	}

	/// Returns the ambient query string captured at construction.
	pub fn ambient_query(&self) -> Option<&str> {
		self.ambient_query.as_deref()
	}

	/// Returns the tokens for the current props.
	pub fn tokens(&self) -> Vec<PageToken> {
		build_range(
			self.props.page,
			self.props.pages,
			self.props.range_options(),
		)
	}

	/// Returns the prefix that page numbers are appended to.
	pub fn base_href(&self) -> String {
		let params = preserved_params(&self.props.params, self.ambient_query.as_deref());
		base_href(&self.props.path, &params)
	}

	/// Returns the resolved links for the current props.
	pub fn links(&self) -> Vec<ResolvedLink> {
		resolve_links(
			&self.tokens(),
			self.props.page,
			self.props.pages,
			&self.base_href(),
		)
	}

	/// Handles a click on the link at `index` in [`Pagination::links`].
	///
	/// Out-of-range indices are ignored.
	pub fn click(&self, index: usize, event: &dyn DomEvent) -> ClickOutcome {
		match self.links().get(index) {
			Some(link) => self.handler.handle_click(link, event),
			None => ClickOutcome::Ignored,
		}
	}

	/// Mounts the rendered list under `parent`.
	#[cfg(target_arch = "wasm32")]
	pub fn mount(&self, parent: &web_sys::Element) -> Result<(), crate::error::MountError> {
		self.render().mount(parent)
	}

	fn render_link(&self, link: ResolvedLink) -> ElementView {
		let mut anchor = ElementView::new("a").attr("href", link.href.clone());
		let class = link.link_class();
		if !class.is_empty() {
			anchor = anchor.attr("class", class);
		}

		let handler = self.handler.clone();
		let label = link.label();
		let item_class = link.item_class();
		anchor = anchor
			.on(
				EventType::Click,
				Arc::new(move |event: &dyn DomEvent| {
					handler.handle_click(&link, event);
				}),
			)
			.child(label);

		ElementView::new("li").attr("class", item_class).child(anchor)
	}
}

impl Component for Pagination {
	fn render(&self) -> View {
		let items = self
			.links()
			.into_iter()
			.map(|link| self.render_link(link));

		ElementView::new("ul")
			.attr("class", self.props.container_class())
			.children(items)
			.into()
	}

	fn name() -> &'static str {
		"Pagination"
	}
}

/// Builder for [`Pagination`] with injectable location and navigator.
pub struct PaginationBuilder {
	props: PaginationProps,
	on_change: Callback<i64>,
	location: Arc<dyn LocationSource>,
	navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for PaginationBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PaginationBuilder")
			.field("props", &self.props)
			.finish_non_exhaustive()
	}
}

impl PaginationBuilder {
	/// Sets the source of the ambient query string.
	pub fn location(mut self, location: Arc<dyn LocationSource>) -> Self {
		self.location = location;
		self
	}

	/// Sets the navigator used on click.
	pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
		self.navigator = navigator;
		self
	}

	/// Builds the component, reading the ambient query string once.
	pub fn build(self) -> Pagination {
		Pagination {
			ambient_query: self.location.query_string(),
			handler: NavigationHandler::new(self.navigator, self.on_change),
			props: self.props,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::event::DummyEvent;
	use crate::location::StaticLocation;
	use crate::navigation::NavigationMode;
	use crate::testing::RecordingNavigator;
	use rstest::rstest;
	use std::sync::Mutex;

	fn recording(
		props: PaginationProps,
		query: Option<&str>,
	) -> (Pagination, Arc<RecordingNavigator>, Arc<Mutex<Vec<i64>>>) {
		let navigator = Arc::new(RecordingNavigator::new());
		let calls = Arc::new(Mutex::new(Vec::new()));
		let location = match query {
			Some(q) => StaticLocation::new(q),
			None => StaticLocation::empty(),
		};
		let pagination = Pagination::builder(
			props,
			Callback::new({
				let calls = Arc::clone(&calls);
				move |page: i64| calls.lock().unwrap().push(page)
			}),
		)
		.location(Arc::new(location))
		.navigator(navigator.clone())
		.build();
		(pagination, navigator, calls)
	}

	#[rstest]
	fn test_render_single_page() {
		let (pagination, _, _) = recording(PaginationProps::new(1, 1), None);

		assert_eq!(
			pagination.render().render_to_string(),
			concat!(
				"<ul class=\"rails-pagination\">",
				"<li class=\"inactive\"><a href=\"\" class=\"disabled\">&lt;&lt;</a></li>",
				"<li class=\"inactive\"><a href=\"\" class=\"disabled\">Prev</a></li>",
				"<li class=\"active\"><a href=\"?page=1\">1</a></li>",
				"<li class=\"inactive\"><a href=\"\" class=\"disabled\">Next</a></li>",
				"<li class=\"inactive\"><a href=\"\" class=\"disabled\">&gt;&gt;</a></li>",
				"</ul>",
			)
		);
	}

	#[rstest]
	fn test_render_styles_and_separator() {
		let props = PaginationProps::new(50, 100)
			.hide_end_arrows(true)
			.hide_nav_buttons(true)
			.outline(true)
			.color("primary")
			.path("/items");
		let (pagination, _, _) = recording(props, None);

		let html = pagination.render().render_to_string();
		assert!(html.starts_with(
			"<ul class=\"rails-pagination rails-pagination-outline-primary\">"
		));
		assert!(html.contains(
			"<li class=\"inactive\"><a href=\"\" class=\"disabled separator\">...</a></li>"
		));
		assert!(html.contains("<li class=\"active\"><a href=\"/items?page=50\">50</a></li>"));
	}

	#[rstest]
	fn test_ambient_query_preserved_without_params() {
		let (pagination, _, _) = recording(
			PaginationProps::new(2, 5).path("/search"),
			Some("?q=rust&page=2&sort=new"),
		);

		assert_eq!(pagination.ambient_query(), Some("?q=rust&page=2&sort=new"));
		assert_eq!(pagination.base_href(), "/search?q=rust&sort=new&page=");
	}

	#[rstest]
	fn test_explicit_params_override_ambient_query() {
		let (pagination, _, _) = recording(
			PaginationProps::new(2, 5).param("status", "open"),
			Some("?q=rust"),
		);

		assert_eq!(pagination.base_href(), "?status=open&page=");
	}

	#[rstest]
	fn test_click_reports_page_and_navigates() {
		let (pagination, navigator, calls) = recording(PaginationProps::new(3, 10), None);
		let links = pagination.links();
		let next = links
			.iter()
			.position(|l| l.token == PageToken::Next)
			.unwrap();

		let event = DummyEvent::new();
		let outcome = pagination.click(next, &event);

		assert!(event.default_prevented());
		assert_eq!(
			outcome,
			ClickOutcome::Changed {
				page: 4,
				mode: NavigationMode::PushState
			}
		);
		assert_eq!(navigator.paths(), vec!["?page=4"]);
		assert_eq!(*calls.lock().unwrap(), vec![4]);
	}

	#[rstest]
	fn test_click_out_of_range_index_is_ignored() {
		let (pagination, navigator, calls) = recording(PaginationProps::new(1, 1), None);

		assert_eq!(pagination.click(99, &DummyEvent::new()), ClickOutcome::Ignored);
		assert!(navigator.paths().is_empty());
		assert!(calls.lock().unwrap().is_empty());
	}

	#[rstest]
	fn test_rendered_anchor_dispatches_click() {
		let (pagination, navigator, calls) = recording(
			PaginationProps::new(1, 3)
				.hide_end_arrows(true)
				.hide_nav_buttons(true),
			None,
		);
		let view = pagination.render();
		let list = view.as_element().unwrap();
		let third_anchor = list
			.child_elements()
			.nth(2)
			.and_then(|li| li.child_elements().next())
			.unwrap();

		assert_eq!(third_anchor.tag_name(), "a");
		assert_eq!(third_anchor.attr_value("href"), Some("?page=3"));
		assert_eq!(third_anchor.dispatch(EventType::Click, &DummyEvent::new()), 1);
		assert_eq!(navigator.paths(), vec!["?page=3"]);
		assert_eq!(*calls.lock().unwrap(), vec![3]);
	}

	#[rstest]
	fn test_set_page_rerenders_from_new_value() {
		let (mut pagination, _, _) = recording(PaginationProps::new(1, 5), None);
		pagination.set_page(4);

		let active: Vec<PageToken> = pagination
			.links()
			.into_iter()
			.filter(|l| l.active)
			.map(|l| l.token)
			.collect();
		assert_eq!(active, vec![PageToken::Page(4)]);
	}

	#[rstest]
	fn test_set_props_keeps_captured_query() {
		let (mut pagination, _, _) = recording(PaginationProps::new(1, 5), Some("q=x"));
		pagination.set_props(PaginationProps::new(2, 8).path("/p"));

		assert_eq!(pagination.props().pages, 8);
		assert_eq!(pagination.base_href(), "/p?q=x&page=");
	}

	#[rstest]
	fn test_component_name() {
		assert_eq!(Pagination::name(), "Pagination");
	}
}

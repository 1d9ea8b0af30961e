//! Reinhardt Pages Pagination - page link component
//!
//! A pagination control for reinhardt-pages: given the current page, the total
//! page count and a page-change callback, it computes which page links to show,
//! renders them as a list, and turns clicks into History API navigation.
//!
//! ## Architecture
//!
//! - [`range`]: page window and ellipsis collapsing (`build_range`)
//! - [`link`]: target page, clickability and href per token
//! - [`query`]: query string preservation for generated links
//! - [`navigation`]: click handling through an injectable [`Navigator`]
//! - [`location`]: injectable access to the ambient query string
//! - [`component`]: the [`Pagination`] component tying it together
//! - [`view`]: HTML string rendering and (WASM) DOM mounting
//!
//! ## Example
//!
//! ```
//! use reinhardt_pages_pagination::{
//!     Callback, Component, DummyEvent, PageToken, Pagination, PaginationProps,
//! };
//! use std::sync::{Arc, Mutex};
//!
//! let requested = Arc::new(Mutex::new(Vec::new()));
//! let props = PaginationProps::new(50, 100).path("/articles");
//! let mut pagination = Pagination::new(props, Callback::new({
//!     let requested = Arc::clone(&requested);
//!     move |page: i64| requested.lock().unwrap().push(page)
//! }));
//!
//! let html = pagination.render().render_to_string();
//! assert!(html.contains("<li class=\"active\"><a href=\"/articles?page=50\">50</a></li>"));
//!
//! let next = pagination
//!     .links()
//!     .iter()
//!     .position(|link| link.token == PageToken::Next)
//!     .unwrap();
//! pagination.click(next, &DummyEvent::new());
//! assert_eq!(*requested.lock().unwrap(), vec![51]);
//!
//! // The page belongs to the caller
//! pagination.set_page(51);
//! assert!(pagination.render().render_to_string().contains("<li class=\"active\"><a href=\"/articles?page=51\">51</a></li>"));
//! ```

#![warn(missing_docs)]

pub mod callback;
pub mod component;
pub mod error;
pub mod event;
pub mod link;
pub mod location;
pub mod logging;
pub mod navigation;
pub mod props;
pub mod query;
pub mod range;
pub mod testing;
pub mod view;

pub use callback::Callback;
pub use component::{Component, Pagination, PaginationBuilder};
pub use error::{MountError, NavigationError, PropsError};
pub use event::{DomEvent, DummyEvent, EventType};
pub use link::ResolvedLink;
pub use location::{BrowserLocation, LocationSource, StaticLocation};
pub use navigation::{BrowserNavigator, ClickOutcome, NavigationHandler, NavigationMode, Navigator};
pub use props::PaginationProps;
pub use range::{EDGE_THRESHOLD, PageToken, RangeOptions, WINDOW_RADIUS, build_range};
pub use view::{ElementView, View};

// Logging macros are exported via #[macro_export]
// Users can access them as: reinhardt_pages_pagination::debug_log!, etc.

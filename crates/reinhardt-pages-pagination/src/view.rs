//! View tree for rendering the pagination control.
//!
//! A [`View`] renders to an HTML string on the server and, on WASM, mounts
//! into the DOM with its click handlers attached.

#[cfg(target_arch = "wasm32")]
use crate::error::MountError;
use crate::event::{DomEvent, EventType, ViewEventHandler};
use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug)]
pub enum View {
	/// A DOM element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
}

/// Represents a DOM element in the view tree.
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<View>,
	event_handlers: Vec<(EventType, ViewEventHandler)>,
}

impl std::fmt::Debug for ElementView {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ElementView")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("event_handlers_count", &self.event_handlers.len())
			.finish()
	}
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
			event_handlers: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl Into<View>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl Into<View>>) -> Self {
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Adds an event handler.
	pub fn on(mut self, event_type: EventType, handler: ViewEventHandler) -> Self {
		self.event_handlers.push((event_type, handler));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the value of the named attribute.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child views that are elements.
	pub fn child_elements(&self) -> impl Iterator<Item = &ElementView> {
		self.children.iter().filter_map(View::as_element)
	}

	/// Runs every handler registered for `event_type`; returns how many ran.
	pub fn dispatch(&self, event_type: EventType, event: &dyn DomEvent) -> usize {
		let mut fired = 0;
		for (kind, handler) in &self.event_handlers {
			if *kind == event_type {
				handler(event);
				fired += 1;
			}
		}
		fired
	}
}

impl View {
	/// Returns the element, if this view is one.
	pub fn as_element(&self) -> Option<&ElementView> {
		match self {
			Self::Element(el) => Some(el),
			Self::Text(_) => None,
		}
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in &el.attrs {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape::encode_double_quoted_attribute(value));
					output.push('"');
				}

				output.push('>');
				for child in &el.children {
					child.render_to_string_inner(output);
				}
				output.push_str("</");
				output.push_str(el.tag_name());
				output.push('>');
			}
			View::Text(text) => {
				output.push_str(&html_escape::encode_text(text));
			}
		}
	}

	/// Mounts the view under `parent`, attaching event listeners.
	#[cfg(target_arch = "wasm32")]
	pub fn mount(self, parent: &web_sys::Element) -> Result<(), MountError> {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;

		match self {
			View::Element(el) => {
				let element = document
					.create_element(&el.tag)
					.map_err(|_| MountError::CreateElementFailed)?;

				for (name, value) in &el.attrs {
					element
						.set_attribute(name, value)
						.map_err(|_| MountError::SetAttributeFailed)?;
				}

				for (event_type, handler) in el.event_handlers {
					let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
						handler(&event)
					});
					element
						.add_event_listener_with_callback(
							event_type.as_str(),
							closure.as_ref().unchecked_ref(),
						)
						.map_err(|_| MountError::AddListenerFailed)?;
					// Listener lives as long as the element
					closure.forget();
				}

				for child in el.children {
					child.mount(&element)?;
				}

				parent
					.append_child(&element)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			View::Text(text) => {
				let text_node = document.create_text_node(&text);
				parent
					.append_child(&text_node)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
		}

		Ok(())
	}
}

impl From<ElementView> for View {
	fn from(el: ElementView) -> Self {
		View::Element(el)
	}
}

impl From<String> for View {
	fn from(text: String) -> Self {
		View::Text(Cow::Owned(text))
	}
}

impl From<&'static str> for View {
	fn from(text: &'static str) -> Self {
		View::Text(Cow::Borrowed(text))
	}
}

//! Callback wrapper for the page-change handler.
//!
//! [`Callback`] wraps a function in an `Arc` so the pagination component and
//! every rendered link can share one handler without cloning the closure.
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_pages_pagination::Callback;
//!
//! let on_change = Callback::new(|page: i64| {
//!     info_log!("Switched to page {}", page);
//! });
//! ```

use std::sync::Arc;

/// A type-safe, cloneable callback wrapper.
///
/// ## Type Parameters
///
/// - `Args`: The argument type the callback receives (defaults to the page number)
/// - `Ret`: The return type of the callback (defaults to `()`)
// Callback struct with conditional Send + Sync bounds for non-WASM targets
#[cfg(target_arch = "wasm32")]
pub struct Callback<Args = i64, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + 'static>,
}

/// A type-safe, cloneable callback wrapper (server-side version).
///
/// This version requires `Send + Sync` bounds so SSR code can share the
/// component across threads.
#[cfg(not(target_arch = "wasm32"))]
pub struct Callback<Args = i64, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

#[cfg(target_arch = "wasm32")]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args> Callback<Args, ()> {
	/// Creates a callback that ignores its argument.
	pub fn noop() -> Self
	where
		Args: 'static,
	{
		Self::new(|_| {})
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

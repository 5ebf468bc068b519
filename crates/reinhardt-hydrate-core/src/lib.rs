//! # Reinhardt Hydrate Core
//!
//! Helpers that let a server-rendered page embed client-side UI components.
//!
//! A page asks a [`RenderEnvironment`] to materialize a named component with a
//! props payload, and receives pre-escaped markup (and optionally the
//! component's bootstrap script) to splice into its output.
//!
//! ## Operations
//!
//! | Helper | Output |
//! |--------|--------|
//! | [`ComponentHelpers::render`] | Component HTML |
//! | [`ComponentHelpers::render_by_route`] | HTML for the component routed at a path |
//! | [`ComponentHelpers::render_with_init`] | Component HTML, newline, `<script>` for that component |
//! | [`ComponentHelpers::render_init_script`] | `<script>` initializing every component rendered so far |
//!
//! ## Example
//!
//! ```rust,ignore
//! use reinhardt_hydrate_core::{ComponentHelpers, RenderOptions, RequestContext};
//! use std::sync::Arc;
//!
//! let helpers = ComponentHelpers::new(environment, RequestContext::new("/inbox"));
//!
//! let html = helpers.render(
//!     "Greeter",
//!     &serde_json::json!({ "name": "Ada" }),
//!     &RenderOptions::new().container_id("greet1"),
//! )?;
//! let script = helpers.render_init_script()?;
//! ```
//!
//! The environment is injected rather than looked up, so tests can substitute
//! a fake implementation of the [`RenderEnvironment`] trait.

pub mod environment;
pub mod error;
pub mod helpers;
pub mod markup;
pub mod options;
pub mod request;

pub use environment::{ComponentHandle, RenderEnvironment};
pub use error::{HydrateError, HydrateResult};
pub use helpers::{ComponentHelpers, LINE_SEPARATOR};
pub use markup::{
	SafeString, TagBuilder, escape_html_attr, escape_script_content, is_valid_element_name,
};
pub use options::{RenderOptions, RouteOptions};
pub use request::RequestContext;

//! # Reinhardt Hydrate Tera
//!
//! Exposes [`ComponentHelpers`] to Tera templates as global functions.
//!
//! | Function | Helper |
//! |----------|--------|
//! | `component(name, props?, tag?, container_id?)` | `render` |
//! | `component_with_init(name, props?, tag?, container_id?)` | `render_with_init` |
//! | `route_component(props?, url?, tag?, container_id?)` | `render_by_route` |
//! | `component_init_script()` | `render_init_script` |
//!
//! The functions return pre-escaped markup, so templates don't need `| safe`:
//!
//! ```html
//! <body>
//!   {{ component(name="Greeter", props=user, container_id="greet1") }}
//!   {{ route_component(tag="main") }}
//!   {{ component_init_script() }}
//! </body>
//! ```
//!
//! Helpers are bound to one request, so the functions are registered on a
//! per-request copy of the shared [`Tera`] instance. [`render_page`] does
//! both steps.

pub mod functions;

pub use functions::{
	ComponentFunction, ComponentWithInitFunction, InitScriptFunction, RouteComponentFunction,
	register_functions,
};

use reinhardt_hydrate_core::ComponentHelpers;
use std::sync::Arc;
use tera::{Context, Tera};

/// Renders `template` with the component functions of one request.
///
/// `tera` is left untouched; functions are registered on a clone.
pub fn render_page(
	tera: &Tera,
	template: &str,
	context: &Context,
	helpers: Arc<ComponentHelpers>,
) -> tera::Result<String> {
	let mut tera = tera.clone();
	register_functions(&mut tera, helpers);
	tera.render(template, context)
}

//! Tera functions backed by [`ComponentHelpers`].

use reinhardt_hydrate_core::{ComponentHelpers, HydrateResult, RenderOptions, RouteOptions, SafeString};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tera::{Function, Tera};

type Args = HashMap<String, Value>;

/// `component(name, props?, tag?, container_id?)`
pub struct ComponentFunction {
	helpers: Arc<ComponentHelpers>,
}

/// `component_with_init(name, props?, tag?, container_id?)`
pub struct ComponentWithInitFunction {
	helpers: Arc<ComponentHelpers>,
}

/// `route_component(props?, url?, tag?, container_id?)`
pub struct RouteComponentFunction {
	helpers: Arc<ComponentHelpers>,
}

/// `component_init_script()`
pub struct InitScriptFunction {
	helpers: Arc<ComponentHelpers>,
}

/// Registers the component functions on `tera`.
pub fn register_functions(tera: &mut Tera, helpers: Arc<ComponentHelpers>) {
	tracing::trace!(path = helpers.request().path(), "registering component functions");
	tera.register_function(
		"component",
		ComponentFunction {
			helpers: Arc::clone(&helpers),
		},
	);
	tera.register_function(
		"component_with_init",
		ComponentWithInitFunction {
			helpers: Arc::clone(&helpers),
		},
	);
	tera.register_function(
		"route_component",
		RouteComponentFunction {
			helpers: Arc::clone(&helpers),
		},
	);
	tera.register_function("component_init_script", InitScriptFunction { helpers });
}

impl Function for ComponentFunction {
	fn call(&self, args: &Args) -> tera::Result<Value> {
		let name = required_str(args, "component", "name")?;
		let props = props_arg(args);
		let options = render_options(args, "component")?;
		markup("component", self.helpers.render(name, &props, &options))
	}

	fn is_safe(&self) -> bool {
		true
	}
}

impl Function for ComponentWithInitFunction {
	fn call(&self, args: &Args) -> tera::Result<Value> {
		let name = required_str(args, "component_with_init", "name")?;
		let props = props_arg(args);
		let options = render_options(args, "component_with_init")?;
		markup(
			"component_with_init",
			self.helpers.render_with_init(name, &props, &options),
		)
	}

	fn is_safe(&self) -> bool {
		true
	}
}

impl Function for RouteComponentFunction {
	fn call(&self, args: &Args) -> tera::Result<Value> {
		const FUNCTION: &str = "route_component";

		let props = props_arg(args);
		let mut options = RouteOptions::new();
		if let Some(url) = optional_str(args, FUNCTION, "url")? {
			options = options.url(url);
		}
		if let Some(tag) = optional_str(args, FUNCTION, "tag")? {
			options = options.tag(tag);
		}
		if let Some(id) = optional_str(args, FUNCTION, "container_id")? {
			options = options.container_id(id);
		}
		markup(FUNCTION, self.helpers.render_by_route(&props, &options))
	}

	fn is_safe(&self) -> bool {
		true
	}
}

impl Function for InitScriptFunction {
	fn call(&self, _args: &Args) -> tera::Result<Value> {
		markup("component_init_script", self.helpers.render_init_script())
	}

	fn is_safe(&self) -> bool {
		true
	}
}

fn render_options(args: &Args, function: &str) -> tera::Result<RenderOptions> {
	let mut options = RenderOptions::new();
	if let Some(tag) = optional_str(args, function, "tag")? {
		options = options.tag(tag);
	}
	if let Some(id) = optional_str(args, function, "container_id")? {
		options = options.container_id(id);
	}
	Ok(options)
}

/// Missing props render as an empty object.
fn props_arg(args: &Args) -> Value {
	args.get("props")
		.cloned()
		.unwrap_or_else(|| Value::Object(Map::new()))
}

fn required_str<'a>(args: &'a Args, function: &str, key: &str) -> tera::Result<&'a str> {
	optional_str(args, function, key)?.ok_or_else(|| {
		tera::Error::msg(format!(
			"Function `{function}` was called without a `{key}` argument"
		))
	})
}

fn optional_str<'a>(args: &'a Args, function: &str, key: &str) -> tera::Result<Option<&'a str>> {
	match args.get(key) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s.as_str())),
		Some(other) => Err(tera::Error::msg(format!(
			"Function `{function}` received {key}={other} but `{key}` can only be a string"
		))),
	}
}

fn markup(function: &str, result: HydrateResult<SafeString>) -> tera::Result<Value> {
	result
		.map(|html| Value::String(html.into_string()))
		.map_err(|e| tera::Error::chain(format!("Function `{function}` failed"), e))
}

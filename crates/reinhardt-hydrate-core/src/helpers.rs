//! Component helpers for page templates.
//!
//! [`ComponentHelpers`] is a thin facade over an injected
//! [`RenderEnvironment`]: it converts props to JSON, applies the optional
//! container tag override and wraps the environment's output as
//! [`SafeString`] markup. Errors from the environment are returned unchanged.

use crate::environment::{ComponentHandle, RenderEnvironment};
use crate::error::{HydrateError, HydrateResult};
use crate::markup::{SafeString, TagBuilder};
use crate::options::{RenderOptions, RouteOptions};
use crate::request::RequestContext;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Separator placed between a component's HTML and its script block.
pub const LINE_SEPARATOR: &str = "\n";

/// Renders components into server-rendered pages.
///
/// One instance serves one request: it carries the request context, and the
/// environment it holds decides what [`render_init_script`] aggregates.
///
/// [`render_init_script`]: ComponentHelpers::render_init_script
#[derive(Clone)]
pub struct ComponentHelpers {
	environment: Arc<dyn RenderEnvironment>,
	request: RequestContext,
}

impl std::fmt::Debug for ComponentHelpers {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComponentHelpers")
			.field("request", &self.request)
			.finish_non_exhaustive()
	}
}

impl ComponentHelpers {
	/// Creates helpers bound to an environment and the current request.
	pub fn new(environment: Arc<dyn RenderEnvironment>, request: RequestContext) -> Self {
		Self {
			environment,
			request,
		}
	}

	/// Returns the rendering environment.
	pub fn environment(&self) -> &Arc<dyn RenderEnvironment> {
		&self.environment
	}

	/// Returns the request context.
	pub fn request(&self) -> &RequestContext {
		&self.request
	}

	/// Renders a component's HTML.
	///
	/// # Examples
	///
	/// ```rust,ignore
	/// let html = helpers.render(
	///     "Greeter",
	///     &json!({ "name": "Ada" }),
	///     &RenderOptions::new().container_id("greet1"),
	/// )?;
	/// ```
	pub fn render<T>(
		&self,
		component_name: &str,
		props: &T,
		options: &RenderOptions,
	) -> HydrateResult<SafeString>
	where
		T: Serialize + ?Sized,
	{
		let handle = self.create_handle(component_name, props, options)?;
		Ok(SafeString::new(handle.render_html()?))
	}

	/// Renders the component routed at `options.url`, or at the current
	/// request path when no url is given.
	pub fn render_by_route<T>(&self, props: &T, options: &RouteOptions) -> HydrateResult<SafeString>
	where
		T: Serialize + ?Sized,
	{
		let url = options.url.as_deref().unwrap_or_else(|| self.request.path());
		let props = serde_json::to_value(props).map_err(|source| HydrateError::RouteProps {
			url: url.to_string(),
			source,
		})?;
		let html = self.environment.routed_html_for_url(
			url,
			&props,
			options.effective_tag(),
			options.container_id.as_deref(),
		)?;
		Ok(SafeString::new(html))
	}

	/// Renders a component's HTML followed by a script block that initializes
	/// that component alone.
	///
	/// Useful for self-contained partials that are not followed by
	/// [`render_init_script`](Self::render_init_script).
	pub fn render_with_init<T>(
		&self,
		component_name: &str,
		props: &T,
		options: &RenderOptions,
	) -> HydrateResult<SafeString>
	where
		T: Serialize + ?Sized,
	{
		let handle = self.create_handle(component_name, props, options)?;
		let html = handle.render_html()?;
		let script = script_block(handle.render_script()?);
		Ok(SafeString::new(format!("{html}{LINE_SEPARATOR}{script}")))
	}

	/// Renders a script block initializing every component the environment
	/// has created so far.
	pub fn render_init_script(&self) -> HydrateResult<SafeString> {
		let script = self.environment.init_script()?;
		Ok(SafeString::new(script_block(script)))
	}

	fn create_handle<T>(
		&self,
		component_name: &str,
		props: &T,
		options: &RenderOptions,
	) -> HydrateResult<Box<dyn ComponentHandle>>
	where
		T: Serialize + ?Sized,
	{
		let props = to_props(component_name, props)?;
		let mut handle = self.environment.create_component(
			component_name,
			&props,
			options.container_id.as_deref(),
		)?;
		if let Some(tag) = options.effective_tag() {
			handle.set_container_tag(tag);
		}
		Ok(handle)
	}
}

fn to_props<T>(component: &str, props: &T) -> HydrateResult<Value>
where
	T: Serialize + ?Sized,
{
	serde_json::to_value(props).map_err(|source| HydrateError::Props {
		component: component.to_string(),
		source,
	})
}

fn script_block(script: String) -> String {
	TagBuilder::new("script").inner_html(script).to_html()
}

#[cfg(test)]
mod tests {
	use super::*;
	use mockall::mock;
	use parking_lot::Mutex;
	use rstest::*;
	use serde_json::json;
	use std::collections::BTreeMap;

	mock! {
		pub Handle {}

		impl ComponentHandle for Handle {
			fn component_name(&self) -> &str;
			fn container_id(&self) -> &str;
			fn container_tag(&self) -> &str;
			fn set_container_tag(&mut self, tag: &str);
			fn render_html(&self) -> HydrateResult<String>;
			fn render_script(&self) -> HydrateResult<String>;
		}
	}

	#[derive(Debug, Clone, PartialEq)]
	enum Call {
		Create {
			name: String,
			props: Value,
			container_id: Option<String>,
		},
		Route {
			url: String,
			props: Value,
			html_tag: Option<String>,
			container_id: Option<String>,
		},
		InitScript,
	}

	#[derive(Default)]
	struct FakeEnvironment {
		calls: Mutex<Vec<Call>>,
		handle: Mutex<Option<MockHandle>>,
	}

	impl FakeEnvironment {
		fn with_handle(handle: MockHandle) -> Self {
			Self {
				calls: Mutex::new(Vec::new()),
				handle: Mutex::new(Some(handle)),
			}
		}

		fn calls(&self) -> Vec<Call> {
			self.calls.lock().clone()
		}
	}

	impl RenderEnvironment for FakeEnvironment {
		fn create_component(
			&self,
			name: &str,
			props: &Value,
			container_id: Option<&str>,
		) -> HydrateResult<Box<dyn ComponentHandle>> {
			self.calls.lock().push(Call::Create {
				name: name.to_string(),
				props: props.clone(),
				container_id: container_id.map(str::to_string),
			});
			self.handle
				.lock()
				.take()
				.map(|h| Box::new(h) as Box<dyn ComponentHandle>)
				.ok_or_else(|| HydrateError::ComponentNotFound(name.to_string()))
		}

		fn routed_html_for_url(
			&self,
			url: &str,
			props: &Value,
			html_tag: Option<&str>,
			container_id: Option<&str>,
		) -> HydrateResult<String> {
			self.calls.lock().push(Call::Route {
				url: url.to_string(),
				props: props.clone(),
				html_tag: html_tag.map(str::to_string),
				container_id: container_id.map(str::to_string),
			});
			Ok(format!("<div>route {url}</div>"))
		}

		fn init_script(&self) -> HydrateResult<String> {
			self.calls.lock().push(Call::InitScript);
			Ok("mount(a);\nmount(b);".to_string())
		}
	}

	fn helpers(env: &Arc<FakeEnvironment>, path: &str) -> ComponentHelpers {
		ComponentHelpers::new(env.clone(), RequestContext::new(path))
	}

	#[fixture]
	fn greeter_handle() -> MockHandle {
		let mut handle = MockHandle::new();
		handle
			.expect_render_html()
			.times(1)
			.returning(|| Ok("<div id=\"greet1\">Hello, Ada</div>".to_string()));
		handle
	}

	#[rstest]
	fn test_render_forwards_exact_arguments(mut greeter_handle: MockHandle) {
		greeter_handle.expect_set_container_tag().never();
		let env = Arc::new(FakeEnvironment::with_handle(greeter_handle));

		let html = helpers(&env, "/")
			.render(
				"Greeter",
				&json!({ "name": "Ada" }),
				&RenderOptions::new().container_id("greet1"),
			)
			.unwrap();

		assert_eq!(html.as_str(), "<div id=\"greet1\">Hello, Ada</div>");
		assert_eq!(
			env.calls(),
			vec![Call::Create {
				name: "Greeter".to_string(),
				props: json!({ "name": "Ada" }),
				container_id: Some("greet1".to_string()),
			}]
		);
	}

	#[rstest]
	fn test_render_overrides_tag(mut greeter_handle: MockHandle) {
		greeter_handle
			.expect_set_container_tag()
			.withf(|tag| tag == "span")
			.times(1)
			.return_const(());
		let env = Arc::new(FakeEnvironment::with_handle(greeter_handle));

		helpers(&env, "/")
			.render("Greeter", &json!({}), &RenderOptions::new().tag("span"))
			.unwrap();
	}

	#[rstest]
	fn test_render_empty_tag_keeps_default(mut greeter_handle: MockHandle) {
		greeter_handle.expect_set_container_tag().never();
		let env = Arc::new(FakeEnvironment::with_handle(greeter_handle));

		helpers(&env, "/")
			.render("Greeter", &json!({}), &RenderOptions::new().tag(""))
			.unwrap();
	}

	#[rstest]
	fn test_render_serializes_typed_props(mut greeter_handle: MockHandle) {
		#[derive(Serialize)]
		struct Props {
			name: &'static str,
			tags: BTreeMap<&'static str, u32>,
		}

		greeter_handle.expect_set_container_tag().never();
		let env = Arc::new(FakeEnvironment::with_handle(greeter_handle));
		let props = Props {
			name: "Ada",
			tags: BTreeMap::from([("admin", 1)]),
		};

		helpers(&env, "/")
			.render("Greeter", &props, &RenderOptions::new())
			.unwrap();

		assert_eq!(
			env.calls(),
			vec![Call::Create {
				name: "Greeter".to_string(),
				props: json!({ "name": "Ada", "tags": { "admin": 1 } }),
				container_id: None,
			}]
		);
	}

	#[rstest]
	fn test_render_props_serialization_failure() {
		let env = Arc::new(FakeEnvironment::default());
		let props = BTreeMap::from([((1, 2), "tuple keys are not valid JSON keys")]);

		let err = helpers(&env, "/")
			.render("Broken", &props, &RenderOptions::new())
			.unwrap_err();

		assert!(matches!(err, HydrateError::Props { ref component, .. } if component == "Broken"));
		assert!(env.calls().is_empty());
	}

	#[rstest]
	fn test_render_by_route_props_serialization_failure() {
		let env = Arc::new(FakeEnvironment::default());
		let props = BTreeMap::from([((1, 2), "tuple keys are not valid JSON keys")]);

		let err = helpers(&env, "/inbox/7")
			.render_by_route(&props, &RouteOptions::new())
			.unwrap_err();

		assert!(matches!(err, HydrateError::RouteProps { ref url, .. } if url == "/inbox/7"));
		assert!(err.to_string().starts_with("failed to serialize props for route '/inbox/7'"));
		assert!(env.calls().is_empty());
	}

	#[rstest]
	fn test_render_propagates_environment_error() {
		let env = Arc::new(FakeEnvironment::default());

		let err = helpers(&env, "/")
			.render("Missing", &json!(null), &RenderOptions::new())
			.unwrap_err();

		assert!(matches!(err, HydrateError::ComponentNotFound(ref name) if name == "Missing"));
	}

	#[rstest]
	fn test_render_with_init_appends_handle_script(mut greeter_handle: MockHandle) {
		greeter_handle.expect_set_container_tag().never();
		greeter_handle
			.expect_render_script()
			.times(1)
			.returning(|| Ok("mount(\"Greeter\");".to_string()));
		let env = Arc::new(FakeEnvironment::with_handle(greeter_handle));

		let html = helpers(&env, "/")
			.render_with_init("Greeter", &json!({}), &RenderOptions::new())
			.unwrap();

		assert_eq!(
			html.as_str(),
			"<div id=\"greet1\">Hello, Ada</div>\n<script>mount(\"Greeter\");</script>"
		);
		// The per-component script never touches the aggregate.
		assert!(!env.calls().contains(&Call::InitScript));
	}

	#[rstest]
	fn test_render_init_script_wraps_aggregate() {
		let env = Arc::new(FakeEnvironment::default());

		let script = helpers(&env, "/").render_init_script().unwrap();

		assert_eq!(script.as_str(), "<script>mount(a);\nmount(b);</script>");
		assert_eq!(env.calls(), vec![Call::InitScript]);
	}

	#[rstest]
	#[case::default_path(RouteOptions::new(), "/inbox/7?")]
	#[case::explicit_url(RouteOptions::new().url("/about"), "/about")]
	fn test_render_by_route_url(#[case] options: RouteOptions, #[case] expected_url: &str) {
		let env = Arc::new(FakeEnvironment::default());

		let html = helpers(&env, "/inbox/7?")
			.render_by_route(&json!({ "user": 1 }), &options)
			.unwrap();

		assert_eq!(html.as_str(), format!("<div>route {expected_url}</div>"));
		assert_eq!(
			env.calls(),
			vec![Call::Route {
				url: expected_url.to_string(),
				props: json!({ "user": 1 }),
				html_tag: None,
				container_id: None,
			}]
		);
	}

	#[rstest]
	fn test_render_by_route_forwards_tag_and_container() {
		let env = Arc::new(FakeEnvironment::default());

		helpers(&env, "/")
			.render_by_route(
				&json!(null),
				&RouteOptions::new().tag("main").container_id("app"),
			)
			.unwrap();

		assert_eq!(
			env.calls(),
			vec![Call::Route {
				url: "/".to_string(),
				props: Value::Null,
				html_tag: Some("main".to_string()),
				container_id: Some("app".to_string()),
			}]
		);
	}

	#[rstest]
	fn test_environment_accessor_returns_injected_instance() {
		let env = Arc::new(FakeEnvironment::default());
		let helpers = helpers(&env, "/");
		let injected: Arc<dyn RenderEnvironment> = env.clone();

		assert!(Arc::ptr_eq(helpers.environment(), &injected));
		assert_eq!(helpers.request().path(), "/");
	}
}

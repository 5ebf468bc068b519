//! The rendering environment seam.
//!
//! [`ComponentHelpers`](crate::ComponentHelpers) never renders anything itself.
//! It forwards every call to a [`RenderEnvironment`], which owns component
//! definitions, container id generation and the bookkeeping needed to produce
//! the aggregate initialization script.

use crate::error::HydrateResult;
use serde_json::Value;

/// A component instance created by a [`RenderEnvironment`].
pub trait ComponentHandle: Send {
	/// Name the component was created with.
	fn component_name(&self) -> &str;

	/// Identifier of the container element.
	fn container_id(&self) -> &str;

	/// Tag of the container element.
	fn container_tag(&self) -> &str;

	/// Overrides the container element's tag.
	fn set_container_tag(&mut self, tag: &str);

	/// Renders the component's HTML, wrapped in its container element.
	fn render_html(&self) -> HydrateResult<String>;

	/// Renders the client-side initialization code for this component only.
	fn render_script(&self) -> HydrateResult<String>;
}

/// Service that instantiates and renders components.
///
/// Implementations decide how long created handles are tracked for
/// [`init_script`](RenderEnvironment::init_script); the default environment
/// tracks them for exactly one request.
pub trait RenderEnvironment: Send + Sync {
	/// Creates a component instance.
	///
	/// When `container_id` is `None` the environment generates one.
	fn create_component(
		&self,
		name: &str,
		props: &Value,
		container_id: Option<&str>,
	) -> HydrateResult<Box<dyn ComponentHandle>>;

	/// Renders the markup of the component routed at `url`.
	fn routed_html_for_url(
		&self,
		url: &str,
		props: &Value,
		html_tag: Option<&str>,
		container_id: Option<&str>,
	) -> HydrateResult<String>;

	/// Returns the initialization code for every component created so far.
	fn init_script(&self) -> HydrateResult<String>;
}

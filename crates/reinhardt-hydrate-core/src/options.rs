//! Optional parameters of the component helpers.
//!
//! Every field is optional. `None` always means "let the environment decide":
//! the component keeps its default container tag, and the environment
//! generates a container id.

/// Options for [`ComponentHelpers::render`](crate::ComponentHelpers::render)
/// and [`ComponentHelpers::render_with_init`](crate::ComponentHelpers::render_with_init).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
	/// Tag of the element wrapping the component. An empty tag is treated as
	/// unset.
	pub html_tag: Option<String>,
	/// Id of the wrapping element.
	pub container_id: Option<String>,
}

impl RenderOptions {
	/// Creates options with every field unset.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the wrapping element's tag.
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.html_tag = Some(tag.into());
		self
	}

	/// Sets the wrapping element's id.
	pub fn container_id(mut self, id: impl Into<String>) -> Self {
		self.container_id = Some(id.into());
		self
	}

	/// Returns the tag override, if any. Empty tags yield `None`.
	pub fn effective_tag(&self) -> Option<&str> {
		non_empty(self.html_tag.as_deref())
	}
}

/// Options for [`ComponentHelpers::render_by_route`](crate::ComponentHelpers::render_by_route).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
	/// Path to resolve. Defaults to the current request path.
	pub url: Option<String>,
	/// Tag of the element wrapping the routed component.
	pub html_tag: Option<String>,
	/// Id of the wrapping element.
	pub container_id: Option<String>,
}

impl RouteOptions {
	/// Creates options with every field unset.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the path to resolve.
	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	/// Sets the wrapping element's tag.
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.html_tag = Some(tag.into());
		self
	}

	/// Sets the wrapping element's id.
	pub fn container_id(mut self, id: impl Into<String>) -> Self {
		self.container_id = Some(id.into());
		self
	}

	/// Returns the tag override, if any. Empty tags yield `None`.
	pub fn effective_tag(&self) -> Option<&str> {
		non_empty(self.html_tag.as_deref())
	}
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_render_options_default_is_unset() {
		let options = RenderOptions::default();
		assert!(options.html_tag.is_none());
		assert!(options.container_id.is_none());
		assert_eq!(options.effective_tag(), None);
	}

	#[rstest]
	fn test_render_options_builder() {
		let options = RenderOptions::new().tag("section").container_id("main");
		assert_eq!(options.effective_tag(), Some("section"));
		assert_eq!(options.container_id.as_deref(), Some("main"));
	}

	#[rstest]
	fn test_empty_tag_is_ignored() {
		assert_eq!(RenderOptions::new().tag("").effective_tag(), None);
		assert_eq!(RouteOptions::new().tag("").effective_tag(), None);
	}

	#[rstest]
	fn test_route_options_builder() {
		let options = RouteOptions::new().url("/about").tag("main").container_id("app");
		assert_eq!(options.url.as_deref(), Some("/about"));
		assert_eq!(options.effective_tag(), Some("main"));
		assert_eq!(options.container_id.as_deref(), Some("app"));
	}
}

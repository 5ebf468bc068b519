//! Server-side component definitions.

use reinhardt_hydrate_core::HydrateResult;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A component that can render itself to HTML on the server.
///
/// The returned HTML is the component's inner markup; the environment wraps it
/// in the container element the client hydrates.
///
/// Closures taking `&serde_json::Value` implement this trait:
///
/// ```
/// use reinhardt_hydrate_core::HydrateResult;
/// use reinhardt_hydrate_env::ServerComponent;
///
/// let badge = |props: &serde_json::Value| -> HydrateResult<String> {
///     Ok(format!("<b>{}</b>", props["count"]))
/// };
/// assert_eq!(badge.render(&serde_json::json!({ "count": 3 })).unwrap(), "<b>3</b>");
/// ```
pub trait ServerComponent: Send + Sync {
	/// Renders the component's inner HTML for the given props.
	fn render(&self, props: &Value) -> HydrateResult<String>;
}

impl<F> ServerComponent for F
where
	F: Fn(&Value) -> HydrateResult<String> + Send + Sync,
{
	fn render(&self, props: &Value) -> HydrateResult<String> {
		self(props)
	}
}

/// Components available to the environment, keyed by name.
///
/// Built once at startup and shared read-only between requests.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
	components: HashMap<String, Arc<dyn ServerComponent>>,
}

impl std::fmt::Debug for ComponentRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComponentRegistry")
			.field("components", &self.names())
			.finish()
	}
}

impl ComponentRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a component, replacing any previous one with the same name.
	pub fn register<C>(&mut self, name: impl Into<String>, component: C)
	where
		C: ServerComponent + 'static,
	{
		self.components.insert(name.into(), Arc::new(component));
	}

	/// Builder form of [`register`](Self::register).
	pub fn component<C>(mut self, name: impl Into<String>, component: C) -> Self
	where
		C: ServerComponent + 'static,
	{
		self.register(name, component);
		self
	}

	/// Looks up a component.
	pub fn get(&self, name: &str) -> Option<Arc<dyn ServerComponent>> {
		self.components.get(name).cloned()
	}

	/// Returns whether a component is registered under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.components.contains_key(name)
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Number of registered components.
	pub fn len(&self) -> usize {
		self.components.len()
	}

	/// Returns whether there are no registered components.
	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_hydrate_core::HydrateError;
	use rstest::rstest;
	use serde_json::json;

	struct Counter;

	impl ServerComponent for Counter {
		fn render(&self, props: &Value) -> HydrateResult<String> {
			let count = props["count"]
				.as_i64()
				.ok_or_else(|| HydrateError::render("Counter", "count must be an integer"))?;
			Ok(format!("<span>{count}</span>"))
		}
	}

	#[rstest]
	fn test_register_and_get() {
		let registry = ComponentRegistry::new().component("Counter", Counter);

		let counter = registry.get("Counter").unwrap();
		assert_eq!(counter.render(&json!({ "count": 2 })).unwrap(), "<span>2</span>");
		assert!(registry.contains("Counter"));
		assert!(registry.get("Clock").is_none());
	}

	#[rstest]
	fn test_component_error_is_returned() {
		let registry = ComponentRegistry::new().component("Counter", Counter);

		let err = registry
			.get("Counter")
			.unwrap()
			.render(&json!({ "count": "many" }))
			.unwrap_err();
		assert!(matches!(err, HydrateError::Render { .. }));
	}

	#[rstest]
	fn test_register_replaces_existing() {
		let mut registry = ComponentRegistry::new();
		registry.register("Title", |_: &Value| -> HydrateResult<String> {
			Ok("first".to_string())
		});
		registry.register("Title", |_: &Value| -> HydrateResult<String> {
			Ok("second".to_string())
		});

		assert_eq!(registry.len(), 1);
		assert_eq!(registry.get("Title").unwrap().render(&json!(null)).unwrap(), "second");
	}

	#[rstest]
	fn test_names_are_sorted() {
		let registry = ComponentRegistry::new()
			.component("Zeta", Counter)
			.component("Alpha", Counter);

		assert_eq!(registry.names(), vec!["Alpha", "Zeta"]);
		assert!(!registry.is_empty());
		assert!(ComponentRegistry::new().is_empty());
	}
}

//! Per-request rendering environment.

use crate::component::{ComponentRegistry, ServerComponent};
use crate::routes::{RouteTable, route_props};
use crate::settings::HydrateSettings;
use parking_lot::Mutex;
use reinhardt_hydrate_core::{
	ComponentHandle, HydrateError, HydrateResult, RenderEnvironment, TagBuilder,
	escape_script_content, is_valid_element_name,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Attribute naming the component on its container element.
pub const COMPONENT_ATTR: &str = "data-rh-component";

/// Separator between component scripts in the aggregate script.
const SCRIPT_SEPARATOR: &str = "\n";

/// A component recorded for the aggregate initialization script.
#[derive(Debug, Clone)]
struct MountedComponent {
	name: String,
	props: Value,
	container_id: String,
}

/// Components created so far and the container ids they occupy.
#[derive(Debug, Default)]
struct MountLog {
	components: Vec<MountedComponent>,
	ids: HashSet<String>,
}

/// Rendering environment for a single request.
///
/// Every component created through it (directly or through a route) is
/// recorded, and [`init_script`](RenderEnvironment::init_script) initializes
/// all of them. Create one per request with
/// [`EnvironmentFactory::for_request`](crate::EnvironmentFactory::for_request).
pub struct RequestEnvironment {
	settings: Arc<HydrateSettings>,
	registry: Arc<ComponentRegistry>,
	routes: Arc<RouteTable>,
	next_id: AtomicU64,
	mounted: Mutex<MountLog>,
}

impl std::fmt::Debug for RequestEnvironment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RequestEnvironment")
			.field("settings", &self.settings)
			.field("mounted", &self.mounted.lock().components.len())
			.finish_non_exhaustive()
	}
}

impl RequestEnvironment {
	/// Creates an environment with no recorded components.
	pub fn new(
		settings: Arc<HydrateSettings>,
		registry: Arc<ComponentRegistry>,
		routes: Arc<RouteTable>,
	) -> Self {
		Self {
			settings,
			registry,
			routes,
			next_id: AtomicU64::new(0),
			mounted: Mutex::new(MountLog::default()),
		}
	}

	/// Returns the settings in use.
	pub fn settings(&self) -> &HydrateSettings {
		&self.settings
	}

	/// Names of the components created so far, in creation order.
	pub fn mounted_components(&self) -> Vec<String> {
		self.mounted
			.lock()
			.components
			.iter()
			.map(|m| m.name.clone())
			.collect()
	}

	/// Next generated id not already used in this request.
	fn generate_container_id(&self, used: &HashSet<String>) -> String {
		loop {
			let n = self.next_id.fetch_add(1, Ordering::Relaxed);
			let id = format!("{}{}", self.settings.container_id_prefix, n);
			if !used.contains(&id) {
				return id;
			}
		}
	}
}

impl RenderEnvironment for RequestEnvironment {
	fn create_component(
		&self,
		name: &str,
		props: &Value,
		container_id: Option<&str>,
	) -> HydrateResult<Box<dyn ComponentHandle>> {
		let Some(component) = self.registry.get(name) else {
			tracing::warn!(component = name, "component is not registered");
			return Err(HydrateError::ComponentNotFound(name.to_string()));
		};

		let mut mounted = self.mounted.lock();
		let container_id = match container_id {
			Some(id) => {
				if mounted.ids.contains(id) {
					tracing::warn!(component = name, container_id = id, "container id is already in use");
				}
				id.to_string()
			}
			None => self.generate_container_id(&mounted.ids),
		};
		tracing::debug!(component = name, container_id = %container_id, "created component");

		mounted.ids.insert(container_id.clone());
		mounted.components.push(MountedComponent {
			name: name.to_string(),
			props: props.clone(),
			container_id: container_id.clone(),
		});
		drop(mounted);

		Ok(Box::new(ComponentInstance {
			name: name.to_string(),
			props: props.clone(),
			container_id,
			container_tag: self.settings.default_container_tag.clone(),
			mount_function: self.settings.mount_function.clone(),
			component,
		}))
	}

	fn routed_html_for_url(
		&self,
		url: &str,
		props: &Value,
		html_tag: Option<&str>,
		container_id: Option<&str>,
	) -> HydrateResult<String> {
		let Some(matched) = self.routes.resolve(url) else {
			tracing::warn!(url, "no route matches url");
			return Err(HydrateError::RouteNotFound(url.to_string()));
		};
		tracing::debug!(url, component = matched.component, "resolved route");

		let props = route_props(url, props, &matched.params);
		let mut handle = self.create_component(matched.component, &props, container_id)?;
		if let Some(tag) = html_tag {
			handle.set_container_tag(tag);
		}
		handle.render_html()
	}

	fn init_script(&self) -> HydrateResult<String> {
		let mounted = self.mounted.lock();
		tracing::debug!(components = mounted.components.len(), "building initialization script");

		let scripts = mounted
			.components
			.iter()
			.map(|m| {
				mount_script(
					&self.settings.mount_function,
					&m.name,
					&m.props,
					&m.container_id,
				)
			})
			.collect::<HydrateResult<Vec<_>>>()?;
		Ok(scripts.join(SCRIPT_SEPARATOR))
	}
}

/// A component created by a [`RequestEnvironment`].
pub struct ComponentInstance {
	name: String,
	props: Value,
	container_id: String,
	container_tag: String,
	mount_function: String,
	component: Arc<dyn ServerComponent>,
}

impl std::fmt::Debug for ComponentInstance {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComponentInstance")
			.field("name", &self.name)
			.field("container_id", &self.container_id)
			.field("container_tag", &self.container_tag)
			.finish_non_exhaustive()
	}
}

impl ComponentHandle for ComponentInstance {
	fn component_name(&self) -> &str {
		&self.name
	}

	fn container_id(&self) -> &str {
		&self.container_id
	}

	fn container_tag(&self) -> &str {
		&self.container_tag
	}

	fn set_container_tag(&mut self, tag: &str) {
		self.container_tag = tag.to_string();
	}

	fn render_html(&self) -> HydrateResult<String> {
		if !is_valid_element_name(&self.container_tag) {
			return Err(HydrateError::render(
				&self.name,
				format!("`{}` is not a valid element name", self.container_tag),
			));
		}
		let inner = self.component.render(&self.props)?;
		Ok(TagBuilder::new(self.container_tag.as_str())
			.attr("id", self.container_id.as_str())
			.attr(COMPONENT_ATTR, self.name.as_str())
			.inner_html(inner)
			.to_html())
	}

	fn render_script(&self) -> HydrateResult<String> {
		mount_script(
			&self.mount_function,
			&self.name,
			&self.props,
			&self.container_id,
		)
	}
}

/// Builds `mount("Name", {props}, "container-id");`.
fn mount_script(
	mount_function: &str,
	name: &str,
	props: &Value,
	container_id: &str,
) -> HydrateResult<String> {
	Ok(format!(
		"{mount_function}({}, {}, {});",
		script_json(name, name)?,
		script_json(name, props)?,
		script_json(name, container_id)?,
	))
}

/// Encodes a value as JSON that is safe inside a `<script>` element.
fn script_json<T>(component: &str, value: &T) -> HydrateResult<String>
where
	T: Serialize + ?Sized,
{
	serde_json::to_string(value)
		.map(|json| escape_script_content(&json))
		.map_err(|e| HydrateError::render(component, e.to_string()))
}

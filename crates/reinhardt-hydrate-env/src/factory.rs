//! Shared factory producing per-request environments.

use crate::component::ComponentRegistry;
use crate::environment::RequestEnvironment;
use crate::routes::RouteTable;
use crate::settings::HydrateSettings;
use reinhardt_hydrate_core::{ComponentHelpers, RequestContext};
use std::sync::Arc;

/// Holds the state shared by all requests and hands out a fresh
/// [`RequestEnvironment`] for each one.
///
/// Cloning is cheap; clones share the same settings, registry and routes.
#[derive(Debug, Clone)]
pub struct EnvironmentFactory {
	settings: Arc<HydrateSettings>,
	registry: Arc<ComponentRegistry>,
	routes: Arc<RouteTable>,
}

impl EnvironmentFactory {
	/// Creates a factory with an empty route table.
	pub fn new(settings: HydrateSettings, registry: ComponentRegistry) -> Self {
		Self {
			settings: Arc::new(settings),
			registry: Arc::new(registry),
			routes: Arc::new(RouteTable::new()),
		}
	}

	/// Sets the routes used by `render_by_route`.
	pub fn with_routes(mut self, routes: RouteTable) -> Self {
		self.routes = Arc::new(routes);
		self
	}

	/// Settings shared by every request.
	pub fn settings(&self) -> &HydrateSettings {
		&self.settings
	}

	/// Components available to every request.
	pub fn registry(&self) -> &ComponentRegistry {
		&self.registry
	}

	/// Routes used by `render_by_route`.
	pub fn routes(&self) -> &RouteTable {
		&self.routes
	}

	/// Creates an environment for one request.
	pub fn for_request(&self) -> Arc<RequestEnvironment> {
		Arc::new(RequestEnvironment::new(
			Arc::clone(&self.settings),
			Arc::clone(&self.registry),
			Arc::clone(&self.routes),
		))
	}

	/// Creates helpers bound to a new environment and the given request.
	pub fn helpers(&self, request: RequestContext) -> ComponentHelpers {
		tracing::trace!(path = request.path(), "creating component helpers");
		ComponentHelpers::new(self.for_request(), request)
	}
}

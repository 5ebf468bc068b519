//! # Reinhardt Hydrate Environment
//!
//! The default [`RenderEnvironment`](reinhardt_hydrate_core::RenderEnvironment)
//! for `reinhardt-hydrate`.
//!
//! ## Architecture
//!
//! ```text
//! startup:      HydrateSettings + ComponentRegistry + RouteTable
//!                              │
//!                              ▼
//!                      EnvironmentFactory        (shared, read-only)
//!                              │ for_request()
//!                              ▼
//! per request:         RequestEnvironment        (tracks created components)
//!                              │
//!                              ▼
//!                       ComponentHelpers         (used by page templates)
//! ```
//!
//! Components created through a [`RequestEnvironment`] are recorded until the
//! environment is dropped, so `render_init_script` covers exactly the
//! components of one request.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_hydrate_core::{HydrateResult, RenderOptions, RequestContext};
//! use reinhardt_hydrate_env::{ComponentRegistry, EnvironmentFactory, HydrateSettings};
//! use serde_json::{Value, json};
//!
//! let registry = ComponentRegistry::new().component(
//!     "Greeter",
//!     |props: &Value| -> HydrateResult<String> {
//!         Ok(format!("Hello, {}", props["name"].as_str().unwrap_or("stranger")))
//!     },
//! );
//! let factory = EnvironmentFactory::new(HydrateSettings::default(), registry);
//!
//! let helpers = factory.helpers(RequestContext::new("/"));
//! let html = helpers
//!     .render("Greeter", &json!({ "name": "Ada" }), &RenderOptions::new().container_id("greet1"))
//!     .unwrap();
//! assert_eq!(
//!     html.as_str(),
//!     r#"<div id="greet1" data-rh-component="Greeter">Hello, Ada</div>"#
//! );
//! ```

pub mod component;
pub mod environment;
pub mod factory;
pub mod pattern;
pub mod routes;
pub mod settings;

pub use component::{ComponentRegistry, ServerComponent};
pub use environment::{ComponentInstance, RequestEnvironment};
pub use factory::EnvironmentFactory;
pub use pattern::{PathPattern, PatternError};
pub use routes::{RouteMatch, RouteTable};
pub use settings::{HydrateSettings, SettingsError};

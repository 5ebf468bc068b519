//! # Reinhardt Hydrate
//!
//! Embed client-side UI components in server-rendered Reinhardt pages.
//!
//! A page renders a component on the server, sends its HTML, and later emits a
//! script that lets the client take over ("hydrate") the same markup.
//!
//! ## Crates
//!
//! - `reinhardt-hydrate-core` - [`ComponentHelpers`] and the
//!   [`RenderEnvironment`] trait it depends on
//! - `reinhardt-hydrate-env` - default environment: component registry,
//!   route table, settings
//! - `reinhardt-hydrate-tera` - Tera template functions
//!
//! ## Feature Flags
//!
//! - `environment` - the default environment ([`env`])
//! - `templates` - Tera integration ([`templates`])
//! - `full` (default) - both
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "environment")]
//! # fn main() -> Result<(), reinhardt_hydrate::HydrateError> {
//! use reinhardt_hydrate::prelude::*;
//! use serde_json::{Value, json};
//!
//! let registry = ComponentRegistry::new().component(
//!     "Counter",
//!     |props: &Value| -> HydrateResult<String> { Ok(format!("<b>{}</b>", props["count"])) },
//! );
//! let factory = EnvironmentFactory::new(HydrateSettings::default(), registry);
//!
//! // One set of helpers per request
//! let helpers = factory.helpers(RequestContext::new("/"));
//! let html = helpers.render("Counter", &json!({ "count": 3 }), &RenderOptions::new())?;
//! let script = helpers.render_init_script()?;
//!
//! assert_eq!(html.as_str(), r#"<div id="rh-0" data-rh-component="Counter"><b>3</b></div>"#);
//! assert_eq!(
//!     script.as_str(),
//!     r#"<script>ReinhardtHydrate.mount("Counter", {"count":3}, "rh-0");</script>"#
//! );
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "environment"))]
//! # fn main() {}
//! ```

pub use reinhardt_hydrate_core::{
	ComponentHandle, ComponentHelpers, HydrateError, HydrateResult, LINE_SEPARATOR,
	RenderEnvironment, RenderOptions, RequestContext, RouteOptions, SafeString, TagBuilder,
	escape_html_attr, escape_script_content, is_valid_element_name,
};

/// Default rendering environment.
#[cfg(feature = "environment")]
pub mod env {
	pub use reinhardt_hydrate_env::{
		ComponentInstance, ComponentRegistry, EnvironmentFactory, HydrateSettings, PathPattern,
		PatternError, RequestEnvironment, RouteMatch, RouteTable, ServerComponent, SettingsError,
		routes::route_props,
	};
}

/// Tera template integration.
#[cfg(feature = "templates")]
pub mod templates {
	pub use reinhardt_hydrate_tera::{register_functions, render_page};
}

pub mod prelude {
	pub use crate::{
		ComponentHandle, ComponentHelpers, HydrateError, HydrateResult, RenderEnvironment,
		RenderOptions, RequestContext, RouteOptions, SafeString,
	};

	pub use serde::{Deserialize, Serialize};

	#[cfg(feature = "environment")]
	pub use crate::env::{
		ComponentRegistry, EnvironmentFactory, HydrateSettings, RouteTable, ServerComponent,
	};

	#[cfg(feature = "templates")]
	pub use crate::templates::{register_functions, render_page};
}

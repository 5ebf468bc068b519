//! Route table mapping URL paths to components.

use crate::pattern::{PathPattern, PatternError};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Props key holding the resolved url.
pub const LOCATION_KEY: &str = "location";

/// Props key holding the captured route parameters.
pub const PARAMS_KEY: &str = "params";

/// Props key holding caller props that are not a JSON object.
pub const DATA_KEY: &str = "data";

#[derive(Debug, Clone)]
struct Route {
	pattern: PathPattern,
	component: String,
}

/// Ordered list of routes. The first matching route wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	routes: Vec<Route>,
}

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
	/// Component rendered for the route.
	pub component: &'a str,
	/// Parameters captured from the path.
	pub params: BTreeMap<String, String>,
}

impl RouteTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a route.
	pub fn add(&mut self, pattern: &str, component: impl Into<String>) -> Result<(), PatternError> {
		self.routes.push(Route {
			pattern: PathPattern::new(pattern)?,
			component: component.into(),
		});
		Ok(())
	}

	/// Builder form of [`add`](Self::add).
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_hydrate_env::RouteTable;
	///
	/// let routes = RouteTable::new()
	///     .route("/", "Home")?
	///     .route("/users/{id}/", "UserDetail")?;
	///
	/// let matched = routes.resolve("/users/7/?tab=posts").unwrap();
	/// assert_eq!(matched.component, "UserDetail");
	/// assert_eq!(matched.params["id"], "7");
	/// # Ok::<(), reinhardt_hydrate_env::PatternError>(())
	/// ```
	pub fn route(mut self, pattern: &str, component: impl Into<String>) -> Result<Self, PatternError> {
		self.add(pattern, component)?;
		Ok(self)
	}

	/// Resolves a url. Query string and fragment are ignored when matching.
	pub fn resolve(&self, url: &str) -> Option<RouteMatch<'_>> {
		let path = strip_query(url);
		self.routes.iter().find_map(|route| {
			route.pattern.matches(path).map(|params| RouteMatch {
				component: route.component.as_str(),
				params,
			})
		})
	}

	/// Number of routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns whether there are no routes.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

fn strip_query(url: &str) -> &str {
	url.find(['?', '#']).map_or(url, |end| &url[..end])
}

/// Builds the props passed to a routed component.
///
/// Object props are extended with [`LOCATION_KEY`] and [`PARAMS_KEY`]; keys
/// the caller already set are kept. Other non-null props are moved under
/// [`DATA_KEY`].
pub fn route_props(url: &str, props: &Value, params: &BTreeMap<String, String>) -> Value {
	let mut object = match props {
		Value::Object(map) => map.clone(),
		Value::Null => Map::new(),
		other => {
			let mut map = Map::new();
			map.insert(DATA_KEY.to_string(), other.clone());
			map
		}
	};
	object
		.entry(LOCATION_KEY)
		.or_insert_with(|| Value::String(url.to_string()));
	object.entry(PARAMS_KEY).or_insert_with(|| {
		Value::Object(
			params
				.iter()
				.map(|(k, v)| (k.clone(), Value::String(v.clone())))
				.collect(),
		)
	});
	Value::Object(object)
}

//! Error types for component rendering.

use thiserror::Error;

/// Result type for component rendering operations.
pub type HydrateResult<T> = Result<T, HydrateError>;

/// Errors raised while rendering components.
///
/// Apart from [`HydrateError::Props`] and [`HydrateError::RouteProps`], every
/// variant originates in a [`RenderEnvironment`](crate::RenderEnvironment) and reaches the caller
/// unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HydrateError {
	/// No component is registered under the requested name.
	#[error("component not found: {0}")]
	ComponentNotFound(String),

	/// No route matches the requested path.
	#[error("no route matches path: {0}")]
	RouteNotFound(String),

	/// Props could not be converted to JSON.
	#[error("failed to serialize props for component '{component}': {source}")]
	Props {
		/// Component the props were meant for.
		component: String,
		/// Underlying serialization error.
		#[source]
		source: serde_json::Error,
	},

	/// Props for a routed component could not be converted to JSON.
	#[error("failed to serialize props for route '{url}': {source}")]
	RouteProps {
		/// Url the props were meant for.
		url: String,
		/// Underlying serialization error.
		#[source]
		source: serde_json::Error,
	},

	/// A component failed while producing its markup or script.
	#[error("failed to render component '{component}': {message}")]
	Render {
		/// Component name.
		component: String,
		/// Error message.
		message: String,
	},

	/// Any other environment failure.
	#[error("environment error: {0}")]
	Environment(String),
}

impl HydrateError {
	/// Creates a [`HydrateError::Render`] for the given component.
	pub fn render(component: impl Into<String>, message: impl Into<String>) -> Self {
		Self::Render {
			component: component.into(),
			message: message.into(),
		}
	}
}

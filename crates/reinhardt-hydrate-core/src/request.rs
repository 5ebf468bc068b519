//! Request information needed by the helpers.

/// The parts of the inbound request the helpers depend on.
///
/// Supplied by the calling layer so that route rendering never reaches for
/// ambient request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
	path: String,
}

impl RequestContext {
	/// Creates a context for the given request path.
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into() }
	}

	/// Builds a context from a request URI. Only the path is kept.
	pub fn from_uri(uri: &http::Uri) -> Self {
		Self::new(uri.path())
	}

	/// Builds a context from request parts.
	pub fn from_parts(parts: &http::request::Parts) -> Self {
		Self::from_uri(&parts.uri)
	}

	/// Returns the request path exactly as received.
	pub fn path(&self) -> &str {
		&self.path
	}
}

impl Default for RequestContext {
	fn default() -> Self {
		Self::new("/")
	}
}

impl<B> From<&http::Request<B>> for RequestContext {
	fn from(request: &http::Request<B>) -> Self {
		Self::from_uri(request.uri())
	}
}

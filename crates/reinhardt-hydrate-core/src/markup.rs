//! Markup primitives.
//!
//! Provides the pre-escaped [`SafeString`] returned by every helper and a
//! small [`TagBuilder`] for wrapping content in an element.

use std::fmt;

/// Markup that has already been escaped.
///
/// Helpers return this type so templates can splice the value verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SafeString(String);

impl SafeString {
	/// Wraps already-escaped markup.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_hydrate_core::SafeString;
	///
	/// let safe = SafeString::new("<b>Bold</b>");
	/// assert_eq!(safe.as_str(), "<b>Bold</b>");
	/// ```
	pub fn new(s: impl Into<String>) -> Self {
		SafeString(s.into())
	}

	/// Returns the markup.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the wrapper.
	pub fn into_string(self) -> String {
		self.0
	}
}

impl From<String> for SafeString {
	fn from(s: String) -> Self {
		SafeString(s)
	}
}

impl From<&str> for SafeString {
	fn from(s: &str) -> Self {
		SafeString(s.to_string())
	}
}

impl AsRef<str> for SafeString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SafeString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Builds a single HTML element.
///
/// Attribute values are escaped; inner HTML is written verbatim.
///
/// # Examples
///
/// ```
/// use reinhardt_hydrate_core::TagBuilder;
///
/// let tag = TagBuilder::new("script").inner_html("init();");
/// assert_eq!(tag.to_html(), "<script>init();</script>");
/// ```
#[derive(Debug, Clone)]
pub struct TagBuilder {
	tag: String,
	attrs: Vec<(String, String)>,
	inner_html: String,
}

impl TagBuilder {
	/// Starts an element with the given tag name.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			inner_html: String::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Sets the inner HTML.
	pub fn inner_html(mut self, html: impl Into<String>) -> Self {
		self.inner_html = html.into();
		self
	}

	/// Returns the tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Renders the element.
	pub fn to_html(&self) -> String {
		let mut html = String::with_capacity(self.inner_html.len() + self.tag.len() * 2 + 5);
		html.push('<');
		html.push_str(&self.tag);
		for (name, value) in &self.attrs {
			html.push(' ');
			html.push_str(name);
			html.push_str("=\"");
			html.push_str(&escape_html_attr(value));
			html.push('"');
		}
		html.push('>');
		html.push_str(&self.inner_html);
		html.push_str("</");
		html.push_str(&self.tag);
		html.push('>');
		html
	}
}

impl fmt::Display for TagBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_html())
	}
}

/// Escapes a string for use in a double-quoted HTML attribute value.
pub fn escape_html_attr(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('"', "&quot;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

/// Returns whether `tag` can be written as an element name: an ASCII letter
/// followed by ASCII letters, digits or `-`.
pub fn is_valid_element_name(tag: &str) -> bool {
	tag.starts_with(|c: char| c.is_ascii_alphabetic())
		&& tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Escapes content for embedding inside a `<script>` element.
///
/// `</` becomes `<\/`, which JavaScript reads identically but HTML parsers no
/// longer treat as a closing tag.
pub fn escape_script_content(s: &str) -> String {
	s.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_safe_string_display_is_verbatim() {
		let safe = SafeString::from("<div>&amp;</div>");
		assert_eq!(safe.to_string(), "<div>&amp;</div>");
		assert_eq!(safe.into_string(), "<div>&amp;</div>");
	}

	#[rstest]
	fn test_tag_builder_without_attributes() {
		let html = TagBuilder::new("script").inner_html("a < b").to_html();
		assert_eq!(html, "<script>a < b</script>");
	}

	#[rstest]
	fn test_tag_builder_escapes_attribute_values() {
		let html = TagBuilder::new("span")
			.attr("title", "\"quoted\" & <b>")
			.inner_html("x")
			.to_html();
		assert_eq!(
			html,
			"<span title=\"&quot;quoted&quot; &amp; &lt;b&gt;\">x</span>"
		);
	}

	#[rstest]
	fn test_tag_builder_empty_inner_html() {
		assert_eq!(TagBuilder::new("script").to_html(), "<script></script>");
	}

	#[rstest]
	#[case("hello", "hello")]
	#[case("a&b", "a&amp;b")]
	#[case("a\"b", "a&quot;b")]
	#[case("<x>", "&lt;x&gt;")]
	fn test_escape_html_attr(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_html_attr(input), expected);
	}

	#[rstest]
	#[case("div", true)]
	#[case("app-island", true)]
	#[case("h1", true)]
	#[case("", false)]
	#[case("1div", false)]
	#[case("di v", false)]
	#[case("img src=x onerror=alert(1)", false)]
	#[case("<div>", false)]
	fn test_is_valid_element_name(#[case] tag: &str, #[case] valid: bool) {
		assert_eq!(is_valid_element_name(tag), valid);
	}

	#[rstest]
	fn test_escape_script_content() {
		assert_eq!(
			escape_script_content(r#"{"s":"</script><script>"}"#),
			r#"{"s":"<\/script><script>"}"#
		);
		assert_eq!(escape_script_content("plain"), "plain");
	}
}

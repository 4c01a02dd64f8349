use std::collections::BTreeSet;

use crate::Placeholders;

const MARKER_OPEN: char = '{';
const MARKER_CLOSE: char = '}';

/// Result of filling a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillResult {
	/// The template with every known marker replaced.
	pub content: String,
	/// Number of markers that were replaced.
	pub replaced: usize,
	/// Keys of well-formed markers that had no placeholder, sorted and
	/// deduplicated. These markers are left in `content` untouched.
	pub unmatched: Vec<String>,
}

impl FillResult {
	pub fn has_unmatched(&self) -> bool {
		!self.unmatched.is_empty()
	}
}

/// Characters allowed between `{` and `}`. This is the alphabet produced by
/// [`sanitize_key`](crate::sanitize_key).
fn is_marker_key(key: &str) -> bool {
	!key.is_empty() && key.chars().all(|ch| ch.is_alphanumeric() || ch == '-')
}

/// Replace every `{key}` marker in `template` whose key has a placeholder.
///
/// Markers with unknown keys stay as they are. Braces that do not enclose a
/// valid key are copied verbatim.
///
/// ```rust
/// use mdfill_core::Placeholders;
/// use mdfill_core::extract_outline;
/// use mdfill_core::fill_template;
///
/// let map = extract_outline("### Name\n**Ada**\n");
/// let result = fill_template("Hello {name}, {missing}", &Placeholders::from_outline(&map));
/// assert_eq!(result.content, "Hello Ada, {missing}");
/// assert_eq!(result.unmatched, vec!["missing".to_string()]);
/// ```
pub fn fill_template(template: &str, placeholders: &Placeholders) -> FillResult {
	let mut content = String::with_capacity(template.len());
	let mut replaced = 0;
	let mut unmatched = BTreeSet::new();
	let mut rest = template;

	while let Some(open) = rest.find(MARKER_OPEN) {
		content.push_str(&rest[..open]);
		let after_open = &rest[open + MARKER_OPEN.len_utf8()..];

		let candidate = after_open
			.find(MARKER_CLOSE)
			.map(|close| (close, &after_open[..close]))
			.filter(|(_, key)| is_marker_key(key));

		let Some((close, key)) = candidate else {
			content.push(MARKER_OPEN);
			rest = after_open;
			continue;
		};

		if let Some(text) = placeholders.text(key) {
			tracing::debug!(key, "replacing marker");
			content.push_str(text);
			replaced += 1;
		} else {
			content.push(MARKER_OPEN);
			content.push_str(key);
			content.push(MARKER_CLOSE);
			unmatched.insert(key.to_string());
		}

		rest = &after_open[close + MARKER_CLOSE.len_utf8()..];
	}

	content.push_str(rest);

	FillResult {
		content,
		replaced,
		unmatched: unmatched.into_iter().collect(),
	}
}

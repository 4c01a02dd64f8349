use serde::Serialize;

const BOLD_DELIMITER: &str = "**";
const ITALIC_DELIMITER: &str = "*";

/// Styling guessed from the emphasis delimiters of a value.
///
/// The guess is made from delimiter counts alone, not from where the spans
/// begin and end. Unbalanced or nested delimiters give unreliable results and
/// the style always applies to the whole value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmphasisStyle {
	pub bold: bool,
	pub italic: bool,
}

impl EmphasisStyle {
	/// Inspect `text` before its delimiters are stripped.
	///
	/// Bold needs at least two `**`. Italic needs at least two `*` and no
	/// `**` at all, so a bold value is never also italic.
	pub fn detect(text: &str) -> Self {
		let doubled = text.matches(BOLD_DELIMITER).count();
		let single = text.matches(ITALIC_DELIMITER).count();

		Self {
			bold: doubled >= 2,
			italic: single >= 2 && doubled == 0,
		}
	}

	pub fn is_plain(&self) -> bool {
		!self.bold && !self.italic
	}
}

/// Remove `**` and `*` delimiters so the text can be placed into a target
/// that does not understand markdown emphasis.
pub fn strip_emphasis(text: &str) -> String {
	text.replace(BOLD_DELIMITER, "").replace(ITALIC_DELIMITER, "")
}

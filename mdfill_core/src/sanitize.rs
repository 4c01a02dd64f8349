/// Turn arbitrary heading or label text into a kebab-case placeholder key.
///
/// The text is case folded, every character other than a letter, digit, space,
/// underscore, or hyphen is dropped, the result is trimmed, and then each run
/// of spaces and each underscore becomes a hyphen.
///
/// ```rust
/// use mdfill_core::sanitize_key;
///
/// assert_eq!(sanitize_key("Field, A!"), "field-a");
/// assert_eq!(sanitize_key("  Snake_Case  Name "), "snake-case-name");
/// assert_eq!(sanitize_key("Straße"), sanitize_key("STRASSE"));
/// ```
pub fn sanitize_key(text: &str) -> String {
	let folded: String = fold_case(text)
		.chars()
		.filter(|ch| ch.is_alphanumeric() || matches!(ch, ' ' | '_' | '-'))
		.collect();

	let mut key = String::with_capacity(folded.len());
	let mut in_spaces = false;
	for ch in folded.trim().chars() {
		match ch {
			' ' => {
				if !in_spaces {
					key.push('-');
				}
				in_spaces = true;
			}
			'_' => {
				key.push('-');
				in_spaces = false;
			}
			_ => {
				key.push(ch);
				in_spaces = false;
			}
		}
	}

	key
}

/// Lowercase `text`, then apply the full case foldings where a lowercase
/// letter still has a distinct folded form. Only letters that occur in
/// ordinary prose are covered: sharp s, final and variant Greek letters, long
/// s, and the Latin ligatures.
fn fold_case(text: &str) -> String {
	let lower = text.to_lowercase();
	let mut folded = String::with_capacity(lower.len());

	for ch in lower.chars() {
		match ch {
			'ß' => folded.push_str("ss"),
			'ſ' => folded.push('s'),
			'ς' => folded.push('σ'),
			'ϐ' => folded.push('β'),
			'ϑ' => folded.push('θ'),
			'ϕ' => folded.push('φ'),
			'ϖ' => folded.push('π'),
			'ϰ' => folded.push('κ'),
			'ϱ' => folded.push('ρ'),
			'ϵ' => folded.push('ε'),
			'ﬀ' => folded.push_str("ff"),
			'ﬁ' => folded.push_str("fi"),
			'ﬂ' => folded.push_str("fl"),
			'ﬃ' => folded.push_str("ffi"),
			'ﬄ' => folded.push_str("ffl"),
			'ﬅ' | 'ﬆ' => folded.push_str("st"),
			_ => folded.push(ch),
		}
	}

	folded
}

/// Prepend the active section prefix to a key. An empty prefix leaves the key
/// as it is.
pub fn qualify_key(prefix: &str, key: &str) -> String {
	if prefix.is_empty() {
		key.to_string()
	} else {
		format!("{prefix}-{key}")
	}
}

/// Glyph that replaces a leading `-` or `+` list marker.
pub const DEFAULT_BULLET: &str = "•";

/// Rewrite list markers in an accumulated entry value.
///
/// Each line that starts with `-` or `+` has that first character replaced by
/// `bullet`. The rest of the line is left untouched and other lines pass
/// through unchanged. Nested lists are not recognised.
///
/// ```rust
/// use mdfill_core::DEFAULT_BULLET;
/// use mdfill_core::process_value;
///
/// assert_eq!(process_value("- first\n+ second\n", DEFAULT_BULLET), "• first\n• second\n");
/// ```
pub fn process_value(value: &str, bullet: &str) -> String {
	value
		.split('\n')
		.map(|line| {
			match line.strip_prefix(['-', '+']) {
				Some(rest) => format!("{bullet}{rest}"),
				None => line.to_string(),
			}
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Marker that opens a section heading. Every entry heading also starts with
/// this marker, so it is only tested after [`ENTRY_MARKER`].
pub const SECTION_MARKER: &str = "##";
/// Marker that opens an entry heading.
pub const ENTRY_MARKER: &str = "###";
/// Marker that opens a definition line.
pub const DEFINITION_MARKER: char = ':';

/// The kind of a single trimmed outline line.
///
/// Borrowed text is the line with its marker removed and is not trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
	/// `## Section` — sets the key prefix for everything that follows.
	SectionHeading(&'a str),
	/// `### Entry` — opens a multi-line entry.
	EntryHeading(&'a str),
	/// `: value` — a one-line value labelled by the line above it.
	Definition(&'a str),
	/// Anything else, including blank lines.
	PlainText,
}

/// Classify a line that has already been trimmed.
///
/// Entry headings are tested before section headings because `###` also
/// begins with `##`. Definitions are tested before section headings as well,
/// so a line such as `:## x` is a definition.
pub fn classify_line(line: &str) -> LineKind<'_> {
	if let Some(text) = line.strip_prefix(ENTRY_MARKER) {
		LineKind::EntryHeading(text)
	} else if let Some(rest) = line.strip_prefix(DEFINITION_MARKER) {
		LineKind::Definition(rest)
	} else if let Some(text) = line.strip_prefix(SECTION_MARKER) {
		LineKind::SectionHeading(text)
	} else {
		LineKind::PlainText
	}
}

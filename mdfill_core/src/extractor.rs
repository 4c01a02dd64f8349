use std::collections::BTreeMap;

use derive_more::Deref;
use derive_more::DerefMut;
use serde::Serialize;

use crate::LineKind;
use crate::MdfillError;
use crate::MdfillResult;
use crate::classify_line;
use crate::config::MdfillConfig;
use crate::process_value;
use crate::qualify_key;
use crate::sanitize_key;
use crate::value::DEFAULT_BULLET;

/// Placeholder keys mapped to their resolved values.
///
/// Writing a key that already exists replaces the earlier value. The map is
/// ordered only so that dumps are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deref, DerefMut)]
#[serde(transparent)]
pub struct OutlineMap(BTreeMap<String, String>);

impl OutlineMap {
	pub fn new() -> Self {
		Self::default()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OutlineMap {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}

/// Options for a single scan.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
	/// Glyph used in place of `-` and `+` list markers.
	pub bullet: String,
	/// Turn every [`ExtractDiagnostic`] into an error instead of skipping the
	/// offending line.
	pub strict: bool,
}

impl Default for ExtractOptions {
	fn default() -> Self {
		Self {
			bullet: DEFAULT_BULLET.to_string(),
			strict: false,
		}
	}
}

impl From<&MdfillConfig> for ExtractOptions {
	fn from(config: &MdfillConfig) -> Self {
		Self {
			bullet: config.bullet.clone(),
			strict: config.strict,
		}
	}
}

/// A line that was skipped, or used with an empty label, during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractDiagnostic {
	/// A `:` line with nothing after the colon.
	MalformedDefinition { line: usize },
	/// A `:` line whose preceding line has no usable label text. The value is
	/// still written under the bare section prefix.
	MissingDefinitionLabel { line: usize },
}

impl ExtractDiagnostic {
	/// 1-indexed line number of the skipped line.
	pub fn line(&self) -> usize {
		match self {
			Self::MalformedDefinition { line } | Self::MissingDefinitionLabel { line } => *line,
		}
	}

	pub fn message(&self) -> String {
		match self {
			Self::MalformedDefinition { .. } => "definition has no value".to_string(),
			Self::MissingDefinitionLabel { .. } => {
				"definition has no label on the line above".to_string()
			}
		}
	}
}

impl From<ExtractDiagnostic> for MdfillError {
	fn from(diagnostic: ExtractDiagnostic) -> Self {
		match diagnostic {
			ExtractDiagnostic::MalformedDefinition { line } => Self::MalformedDefinition { line },
			ExtractDiagnostic::MissingDefinitionLabel { line } => {
				Self::MissingDefinitionLabel { line }
			}
		}
	}
}

/// The outcome of a scan with diagnostics collected.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
	pub map: OutlineMap,
	pub diagnostics: Vec<ExtractDiagnostic>,
}

/// State carried from one line to the next during a single forward pass.
struct Scanner<'a> {
	bullet: &'a str,
	/// Sanitized text of the most recent section heading.
	prefix: String,
	/// Key of the open entry. Empty when no entry is open.
	current_key: String,
	/// Lines collected for the open entry, each followed by `\n`.
	current_value: String,
	previous_line: &'a str,
	map: OutlineMap,
	diagnostics: Vec<ExtractDiagnostic>,
}

impl<'a> Scanner<'a> {
	fn new(bullet: &'a str) -> Self {
		Self {
			bullet,
			prefix: String::new(),
			current_key: String::new(),
			current_value: String::new(),
			previous_line: "",
			map: OutlineMap::new(),
			diagnostics: vec![],
		}
	}

	fn scan(mut self, content: &'a str) -> Extraction {
		for (index, raw) in content.lines().enumerate() {
			let line = raw.trim();

			match classify_line(line) {
				LineKind::EntryHeading(text) => self.open_entry(text),
				LineKind::Definition(rest) => self.define(rest, index + 1),
				LineKind::SectionHeading(text) => self.open_section(text),
				LineKind::PlainText => self.append(line),
			}

			self.previous_line = line;
		}

		self.flush();
		tracing::debug!(entries = self.map.len(), "finished outline scan");
		for (key, value) in self.map.iter() {
			tracing::debug!("{key}: {value}");
		}

		Extraction {
			map: self.map,
			diagnostics: self.diagnostics,
		}
	}

	/// Commit the open entry, if any, into the map.
	fn flush(&mut self) {
		if self.current_key.is_empty() {
			return;
		}

		let value = process_value(&self.current_value, self.bullet);
		tracing::debug!(key = %self.current_key, "flushing entry");
		self.map
			.insert(self.current_key.clone(), value.trim().to_string());
	}

	fn open_entry(&mut self, heading: &str) {
		tracing::debug!(heading, "found entry heading");
		let key = sanitize_key(heading);
		tracing::debug!(%key, "sanitized entry key");

		self.flush();
		self.current_key = qualify_key(&self.prefix, &key);
		tracing::debug!(key = %self.current_key, "kebab entry key");
		self.current_value.clear();
	}

	fn open_section(&mut self, heading: &str) {
		tracing::debug!(heading, "found section heading");

		self.flush();
		self.current_key.clear();
		self.current_value.clear();
		self.prefix = sanitize_key(heading);
		tracing::debug!(prefix = %self.prefix, "sanitized section prefix");
	}

	/// A definition writes straight into the map and leaves any open entry
	/// alone.
	fn define(&mut self, rest: &str, line: usize) {
		let value = rest.trim();
		if value.is_empty() {
			self.diagnostics
				.push(ExtractDiagnostic::MalformedDefinition { line });
			return;
		}

		let label = sanitize_key(self.previous_line);
		if label.is_empty() {
			self.diagnostics
				.push(ExtractDiagnostic::MissingDefinitionLabel { line });
		}

		let key = qualify_key(&self.prefix, &label);
		tracing::debug!(%key, "found definition");
		self.map.insert(key, value.to_string());
	}

	fn append(&mut self, line: &str) {
		if self.current_key.is_empty() {
			return;
		}

		tracing::trace!(key = %self.current_key, line, "appending line");
		self.current_value.push_str(line);
		self.current_value.push('\n');
	}
}

/// Extract placeholder values from an outline document using the default
/// options.
///
/// This never fails. Lines that cannot be used are skipped.
///
/// ```rust
/// use mdfill_core::extract_outline;
///
/// let map = extract_outline("## Section One\n### Field A\nHello\n");
/// assert_eq!(map["section-one-field-a"], "Hello");
/// ```
pub fn extract_outline(content: &str) -> OutlineMap {
	Scanner::new(DEFAULT_BULLET).scan(content).map
}

/// Extract placeholder values and collect diagnostics for skipped lines.
///
/// With [`ExtractOptions::strict`] set, the first diagnostic is returned as an
/// error instead.
pub fn extract_outline_with_options(
	content: &str,
	options: &ExtractOptions,
) -> MdfillResult<Extraction> {
	let extraction = Scanner::new(&options.bullet).scan(content);

	if options.strict {
		if let Some(diagnostic) = extraction.diagnostics.first() {
			return Err(diagnostic.clone().into());
		}
	}

	Ok(extraction)
}

use std::collections::BTreeMap;

use derive_more::Deref;
use serde::Serialize;

use crate::EmphasisStyle;
use crate::MdfillResult;
use crate::OutlineMap;
use crate::strip_emphasis;

/// A value ready for a template: emphasis delimiters removed, with the
/// guessed styling kept alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
	pub text: String,
	#[serde(flatten)]
	pub style: EmphasisStyle,
}

impl Placeholder {
	pub fn new(raw: &str) -> Self {
		Self {
			text: strip_emphasis(raw),
			style: EmphasisStyle::detect(raw),
		}
	}
}

/// The full set of placeholders handed to [`fill_template`](crate::fill_template).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deref)]
#[serde(transparent)]
pub struct Placeholders(BTreeMap<String, Placeholder>);

impl Placeholders {
	pub fn from_outline(map: &OutlineMap) -> Self {
		Self(
			map.iter()
				.map(|(key, value)| (key.clone(), Placeholder::new(value)))
				.collect(),
		)
	}

	/// Look up the text for a key.
	pub fn text(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(|placeholder| placeholder.text.as_str())
	}

	pub fn to_json_pretty(&self) -> MdfillResult<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::MdfillError;
use crate::MdfillResult;
use crate::value::DEFAULT_BULLET;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["mdfill.toml", ".mdfill.toml", ".config/mdfill.toml"];

/// Configuration loaded from an `mdfill.toml` file.
///
/// ```toml
/// bullet = "•"
/// strict = false
///
/// [output]
/// extension = "html"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct MdfillConfig {
	/// Glyph that replaces `-` and `+` list markers in entry values.
	#[serde(default = "default_bullet")]
	pub bullet: String,
	/// When true, malformed definition lines abort the run instead of being
	/// skipped.
	#[serde(default)]
	pub strict: bool,
	/// Output file settings.
	#[serde(default)]
	pub output: OutputConfig,
}

impl Default for MdfillConfig {
	fn default() -> Self {
		Self {
			bullet: default_bullet(),
			strict: false,
			output: OutputConfig::default(),
		}
	}
}

fn default_bullet() -> String {
	DEFAULT_BULLET.to_string()
}

/// Controls where the filled document is written when no explicit output path
/// is given.
///
/// ```toml
/// [output]
/// extension = "txt"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
	/// Extension for the default output path. When absent, the template's
	/// extension is used.
	#[serde(default)]
	pub extension: Option<String>,
}

impl MdfillConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no candidate exists.
	pub fn load(root: &Path) -> MdfillResult<Option<MdfillConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config: MdfillConfig =
			toml::from_str(&content).map_err(|e| MdfillError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to defaults when none exists.
	pub fn load_or_default(root: &Path) -> MdfillResult<MdfillConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Compute the output path used when none is given: the markdown path with
	/// its extension swapped for the configured one, or for the template's.
	///
	/// The result never points at the markdown file or at the template. When
	/// it would, `.filled` is inserted before the extension.
	pub fn default_output_path(&self, markdown: &Path, template: &Path) -> PathBuf {
		let extension = self
			.output
			.extension
			.as_deref()
			.map(|ext| ext.trim_start_matches('.'))
			.or_else(|| template.extension().and_then(|ext| ext.to_str()))
			.unwrap_or_default();

		let output = markdown.with_extension(extension);
		if output != markdown && output != template {
			return output;
		}

		if extension.is_empty() {
			markdown.with_extension("filled")
		} else {
			markdown.with_extension(format!("filled.{extension}"))
		}
	}
}

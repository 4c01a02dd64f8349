use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MdfillError {
	#[error(transparent)]
	#[diagnostic(code(mdfill::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read `{path}`: {reason}")]
	#[diagnostic(
		code(mdfill::read_input),
		help("check that the file exists and is valid UTF-8 text")
	)]
	ReadInput { path: String, reason: String },

	#[error("failed to write `{path}`: {reason}")]
	#[diagnostic(code(mdfill::write_output))]
	WriteOutput { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mdfill::config_parse),
		help("check that mdfill.toml is valid TOML with `bullet`, `strict`, and [output] keys")
	)]
	ConfigParse(String),

	#[error("definition on line {line} has no value")]
	#[diagnostic(
		code(mdfill::malformed_definition),
		help("write the value after the colon, e.g. `: some value`, or disable strict mode")
	)]
	MalformedDefinition { line: usize },

	#[error("definition on line {line} has no label on the line above it")]
	#[diagnostic(
		code(mdfill::missing_definition_label),
		help("put the label text on the line directly above the `:` line")
	)]
	MissingDefinitionLabel { line: usize },

	#[error("failed to serialize placeholders: {0}")]
	#[diagnostic(code(mdfill::json))]
	Json(#[from] serde_json::Error),
}

pub type MdfillResult<T> = Result<T, MdfillError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ExsyncError;
use crate::ExsyncResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["exsync.toml", ".exsync.toml", ".config/exsync.toml"];

/// The heading that separates the readme introduction from its examples.
pub const DEFAULT_MARKER: &str = "## Examples";
pub const DEFAULT_README: &str = "README.md";
pub const DEFAULT_OUTPUT: &str = "src/Examples.elm";
pub const DEFAULT_MODULE: &str = "Examples";
pub const DEFAULT_DOC_TEST_COMMAND: &str = "elm-doc-test";
pub const DEFAULT_TEST_COMMAND: &str = "elm-test";

/// Configuration loaded from an `exsync.toml` file.
///
/// Every key is optional. Relative paths resolve against the project root.
///
/// ```toml
/// readme = "README.md"
/// marker = "## Examples"
/// output = "src/Examples.elm"
/// module = "Examples"
/// working_directory = "."
///
/// [commands]
/// doc_test = ["elm-doc-test"]
/// test = ["elm-test"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExsyncConfig {
	/// The readme to read the examples from.
	pub readme: PathBuf,
	/// Everything after the first occurrence of this string is embedded into
	/// the generated module.
	pub marker: String,
	/// Where the generated module is written. Always overwritten.
	pub output: PathBuf,
	/// Name used in the generated module declaration.
	pub module: String,
	/// Directory the commands run in. Defaults to the project root.
	pub working_directory: Option<PathBuf>,
	pub commands: CommandsConfig,
}

impl Default for ExsyncConfig {
	fn default() -> Self {
		Self {
			readme: PathBuf::from(DEFAULT_README),
			marker: DEFAULT_MARKER.to_string(),
			output: PathBuf::from(DEFAULT_OUTPUT),
			module: DEFAULT_MODULE.to_string(),
			working_directory: None,
			commands: CommandsConfig::default(),
		}
	}
}

/// The two commands run after the module is generated, each given as a
/// program followed by its arguments.
///
/// ```toml
/// [commands]
/// doc_test = ["elm-doc-test"]
/// test = ["elm-test", "--fuzz", "50"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CommandsConfig {
	pub doc_test: Vec<String>,
	pub test: Vec<String>,
}

impl Default for CommandsConfig {
	fn default() -> Self {
		Self {
			doc_test: vec![DEFAULT_DOC_TEST_COMMAND.to_string()],
			test: vec![DEFAULT_TEST_COMMAND.to_string()],
		}
	}
}

impl ExsyncConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ExsyncResult<Option<ExsyncConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config: ExsyncConfig =
			toml::from_str(&content).map_err(|e| ExsyncError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}
}

use std::path::Path;
use std::path::PathBuf;

use crate::ExsyncConfig;
use crate::ExsyncResult;

/// A project root together with its effective configuration.
///
/// The root is always passed in explicitly. Every relative path in the
/// configuration resolves against it.
#[derive(Debug, Clone)]
pub struct ProjectContext {
	pub root: PathBuf,
	pub config: ExsyncConfig,
	/// The config file the configuration was loaded from, if any.
	pub config_path: Option<PathBuf>,
}

impl ProjectContext {
	/// Load the configuration discovered at `root`, falling back to the
	/// defaults when no config file exists.
	pub fn load(root: &Path) -> ExsyncResult<Self> {
		let config_path = ExsyncConfig::resolve_path(root);
		let config = ExsyncConfig::load(root)?.unwrap_or_default();

		Ok(Self {
			root: root.to_path_buf(),
			config,
			config_path,
		})
	}

	pub fn new(root: impl Into<PathBuf>, config: ExsyncConfig) -> Self {
		Self {
			root: root.into(),
			config,
			config_path: None,
		}
	}

	pub fn readme_path(&self) -> PathBuf {
		self.root.join(&self.config.readme)
	}

	pub fn output_path(&self) -> PathBuf {
		self.root.join(&self.config.output)
	}

	pub fn working_directory(&self) -> PathBuf {
		match &self.config.working_directory {
			Some(dir) => self.root.join(dir),
			None => self.root.clone(),
		}
	}
}

use miette::Diagnostic;
use thiserror::Error;

use crate::Step;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ExsyncError {
	#[error(transparent)]
	#[diagnostic(code(exsync::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to {action} `{path}`")]
	#[diagnostic(
		code(exsync::file_access),
		help("check that the path exists and that its parent directory is writable")
	)]
	FileAccess {
		action: FileAction,
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to start the {step} command `{program}`")]
	#[diagnostic(
		code(exsync::process_invocation),
		help("make sure `{program}` is installed and available on your PATH")
	)]
	ProcessInvocation {
		step: Step,
		program: String,
		#[source]
		source: std::io::Error,
	},

	#[error("the {0} command is empty")]
	#[diagnostic(
		code(exsync::empty_command),
		help("set `[commands]` in exsync.toml to a program followed by its arguments")
	)]
	EmptyCommand(Step),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(exsync::config_parse),
		help("check that exsync.toml is valid TOML with optional top-level keys and a [commands] section")
	)]
	ConfigParse(String),
}

/// The file operation that failed in [`ExsyncError::FileAccess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
	Read,
	Write,
}

impl std::fmt::Display for FileAction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Read => f.write_str("read"),
			Self::Write => f.write_str("write"),
		}
	}
}

pub type ExsyncResult<T> = Result<T, ExsyncError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;

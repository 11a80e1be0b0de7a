use std::path::Path;
use std::path::PathBuf;

use crate::ExsyncConfig;
use crate::ExsyncError;
use crate::ExsyncResult;
use crate::FileAction;
use crate::GeneratedModule;
use crate::RunReport;
use crate::generate_from_source;
use crate::project::ProjectContext;
use crate::run_commands;

/// Result of comparing the generated module on disk with a fresh rendering.
#[derive(Debug, Clone)]
pub struct CheckResult {
	pub path: PathBuf,
	/// The content currently on disk, or `None` when the file is missing.
	/// Invalid UTF-8 is replaced lossily.
	pub current: Option<String>,
	pub expected: String,
	/// Whether the bytes on disk equal `expected`.
	pub up_to_date: bool,
}

impl CheckResult {
	/// Returns `true` when the file on disk matches the readme.
	pub fn is_ok(&self) -> bool {
		self.up_to_date
	}
}

fn read_readme(path: &Path) -> ExsyncResult<String> {
	std::fs::read_to_string(path).map_err(|source| {
		ExsyncError::FileAccess {
			action: FileAction::Read,
			path: path.display().to_string(),
			source,
		}
	})
}

fn render_from_readme(
	readme_path: &Path,
	config: &ExsyncConfig,
) -> ExsyncResult<GeneratedModule> {
	let source = read_readme(readme_path)?;
	let module = generate_from_source(&source, &config.marker, &config.module);
	tracing::debug!(
		readme = %readme_path.display(),
		examples_bytes = module.examples.len(),
		"extracted examples"
	);

	Ok(module)
}

/// Read the project readme and render the generated module without writing
/// it.
pub fn generate_module(ctx: &ProjectContext) -> ExsyncResult<GeneratedModule> {
	render_from_readme(&ctx.readme_path(), &ctx.config)
}

/// Overwrite `path` with the module content. The parent directory must
/// already exist.
pub fn write_module(path: &Path, module: &GeneratedModule) -> ExsyncResult<()> {
	std::fs::write(path, &module.content).map_err(|source| {
		ExsyncError::FileAccess {
			action: FileAction::Write,
			path: path.display().to_string(),
			source,
		}
	})?;
	tracing::info!(path = %path.display(), "wrote generated module");

	Ok(())
}

fn read_existing(path: &Path) -> ExsyncResult<Option<Vec<u8>>> {
	match std::fs::read(path) {
		Ok(content) => Ok(Some(content)),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
		Err(source) => {
			Err(ExsyncError::FileAccess {
				action: FileAction::Read,
				path: path.display().to_string(),
				source,
			})
		}
	}
}

/// Compare the generated module on disk with what the readme currently
/// produces. Nothing is written.
pub fn check_module(ctx: &ProjectContext) -> ExsyncResult<CheckResult> {
	let module = generate_module(ctx)?;
	let path = ctx.output_path();
	let current = read_existing(&path)?;
	let up_to_date = current.as_deref() == Some(module.content.as_bytes());

	Ok(CheckResult {
		path,
		current: current.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()),
		expected: module.content,
		up_to_date,
	})
}

/// Regenerate the module and overwrite it. Returns `true` when the content
/// on disk changed.
pub fn sync_module(ctx: &ProjectContext) -> ExsyncResult<bool> {
	let module = generate_module(ctx)?;
	let path = ctx.output_path();
	let changed = read_existing(&path)?.as_deref() != Some(module.content.as_bytes());
	write_module(&path, &module)?;

	Ok(changed)
}

fn generate_write_and_run(
	readme_path: &Path,
	output_path: &Path,
	working_directory: &Path,
	config: &ExsyncConfig,
) -> ExsyncResult<RunReport> {
	let module = render_from_readme(readme_path, config)?;
	write_module(output_path, &module)?;
	run_commands(&config.commands, working_directory)
}

/// Extract the readme examples into the generated module at `output_path`,
/// then run the default doc-test and test commands in `working_directory`.
///
/// Uses the default marker, module name and commands. The returned report
/// holds both exit statuses; a failing doc-test run does not stop the test
/// run.
pub fn extract_and_run(
	readme_path: &Path,
	output_path: &Path,
	working_directory: &Path,
) -> ExsyncResult<RunReport> {
	generate_write_and_run(
		readme_path,
		output_path,
		working_directory,
		&ExsyncConfig::default(),
	)
}

/// Like [`extract_and_run`], using the paths, marker, module name and
/// commands configured for the project.
pub fn extract_and_run_project(ctx: &ProjectContext) -> ExsyncResult<RunReport> {
	generate_write_and_run(
		&ctx.readme_path(),
		&ctx.output_path(),
		&ctx.working_directory(),
		&ctx.config,
	)
}

use std::fmt;
use std::path::Path;
use std::process::Command;
use std::process::ExitStatus;

use crate::CommandsConfig;
use crate::ExsyncError;
use crate::ExsyncResult;

/// One of the two commands run after the module is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
	/// Runs the code samples embedded in documentation comments.
	DocTest,
	/// Runs the project's full test suite.
	Test,
}

impl Step {
	/// Both steps in the order they run.
	pub const ALL: [Step; 2] = [Step::DocTest, Step::Test];
}

impl fmt::Display for Step {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DocTest => f.write_str("doc-test"),
			Self::Test => f.write_str("test"),
		}
	}
}

/// The exit status of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
	pub step: Step,
	/// The command line that was run, program first.
	pub command: Vec<String>,
	pub status: ExitStatus,
}

impl StepOutcome {
	pub fn is_success(&self) -> bool {
		self.status.success()
	}

	/// The exit code to report for this step. A process killed by a signal
	/// has no code and reports `1`.
	pub fn exit_code(&self) -> i32 {
		if self.is_success() {
			0
		} else {
			self.status.code().filter(|code| *code != 0).unwrap_or(1)
		}
	}
}

/// The outcome of running both steps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunReport {
	pub outcomes: Vec<StepOutcome>,
}

impl RunReport {
	/// `true` when every step exited successfully.
	pub fn is_success(&self) -> bool {
		self.outcomes.iter().all(StepOutcome::is_success)
	}

	/// The earliest step that failed. This decides the overall result even
	/// when later steps fail too.
	pub fn first_failure(&self) -> Option<&StepOutcome> {
		self.outcomes.iter().find(|outcome| !outcome.is_success())
	}

	/// `0` on success, otherwise the exit code of the first failing step.
	pub fn exit_code(&self) -> i32 {
		self.first_failure().map_or(0, StepOutcome::exit_code)
	}

	pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
		self.outcomes.iter().find(|outcome| outcome.step == step)
	}
}

impl CommandsConfig {
	/// The configured command line for `step`.
	pub fn for_step(&self, step: Step) -> &[String] {
		match step {
			Step::DocTest => &self.doc_test,
			Step::Test => &self.test,
		}
	}
}

/// Run a single step in `working_directory`, inheriting the standard streams,
/// and wait for it to finish.
pub fn run_step(
	step: Step,
	command: &[String],
	working_directory: &Path,
) -> ExsyncResult<StepOutcome> {
	let Some((program, args)) = command.split_first() else {
		return Err(ExsyncError::EmptyCommand(step));
	};

	tracing::debug!(
		%step,
		command = %command.join(" "),
		cwd = %working_directory.display(),
		"running command"
	);

	let status = Command::new(program)
		.args(args)
		.current_dir(working_directory)
		.status()
		.map_err(|source| {
			ExsyncError::ProcessInvocation {
				step,
				program: program.clone(),
				source,
			}
		})?;

	if status.success() {
		tracing::info!(%step, "command succeeded");
	} else {
		tracing::warn!(%step, %status, "command failed");
	}

	Ok(StepOutcome {
		step,
		command: command.to_vec(),
		status,
	})
}

/// Run the doc-test command and then the test command.
///
/// The test command runs even when the doc-test command fails; the report
/// keeps both statuses and [`RunReport::first_failure`] decides the overall
/// result. A command that cannot be started aborts immediately, and an empty
/// command is rejected before anything runs.
pub fn run_commands(
	commands: &CommandsConfig,
	working_directory: &Path,
) -> ExsyncResult<RunReport> {
	if let Some(step) = Step::ALL
		.into_iter()
		.find(|step| commands.for_step(*step).is_empty())
	{
		return Err(ExsyncError::EmptyCommand(step));
	}

	let mut report = RunReport::default();

	for step in Step::ALL {
		let outcome = run_step(step, commands.for_step(step), working_directory)?;
		report.outcomes.push(outcome);
	}

	Ok(report)
}

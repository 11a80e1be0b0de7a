use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Keep readme examples under test by generating a doc-test module from them.",
	long_about = "exsync copies everything after the `## Examples` heading of your readme into a \
	              generated module (`src/Examples.elm` by default), then runs the doc-test tool \
	              followed by the test runner.\n\nBoth commands always run. The exit status is the \
	              first failing command's exit status. Exit status 1 also \
	              means a stale `--check` or a command killed by a signal, and exit status 2 also \
	              means exsync itself failed (unreadable readme, unwritable module, a command \
	              that could not start, invalid config).\n\nQuick start:\n  exsync               \
	              Generate the module and run both commands\n  exsync --check       Verify the \
	              generated module is up to date\n  exsync --generate-only  Write the module \
	              without running anything"
)]
pub struct ExsyncCli {
	/// Path to the project root directory.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,

	/// Write the generated module without running the doc-test and test
	/// commands.
	#[arg(long, default_value_t = false, conflicts_with = "check")]
	pub generate_only: bool,

	/// Check that the generated module is up to date with the readme.
	///
	/// Nothing is written and no command is run. Exits with a non-zero
	/// status code when the module is stale or missing, which makes it a
	/// good fit for CI pipelines.
	#[arg(long, default_value_t = false)]
	pub check: bool,

	/// Show a line diff between the generated module on disk and the
	/// expected content. Only used with `--check`.
	#[arg(long, default_value_t = false, requires = "check")]
	pub diff: bool,
}

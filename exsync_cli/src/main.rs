use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use exsync_cli::ExsyncCli;
use exsync_core::ExsyncError;
use exsync_core::RunReport;
use exsync_core::check_module;
use exsync_core::extract_and_run_project;
use exsync_core::project::ProjectContext;
use exsync_core::sync_module;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

/// Environment variable that overrides the log filter.
const LOG_ENV: &str = "EXSYNC_LOG";

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = ExsyncCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_logging(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = if args.check {
		run_check(&args)
	} else if args.generate_only {
		run_generate(&args).map(|()| 0)
	} else {
		run_all(&args)
	};

	match result {
		Ok(code) => process::exit(code),
		Err(e) => {
			let report: miette::Report = e.into();
			eprintln!("{report:?}");
			process::exit(2);
		}
	}
}

/// Install the stderr subscriber. `EXSYNC_LOG` takes precedence over
/// `--verbose`.
fn init_logging(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_ansi(use_color)
		.with_target(verbose)
		.with_writer(std::io::stderr)
		.try_init();
}

fn resolve_root(args: &ExsyncCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_project(args: &ExsyncCli) -> Result<ProjectContext, ExsyncError> {
	let root = resolve_root(args);
	let ctx = ProjectContext::load(&root)?;

	if args.verbose {
		let config = ctx
			.config_path
			.as_deref()
			.map_or_else(|| "none".to_string(), |path| make_relative(path, &root));
		println!("Resolved config: {config}");
		println!("Readme: {}", make_relative(&ctx.readme_path(), &root));
		println!("Output: {}", make_relative(&ctx.output_path(), &root));
	}

	Ok(ctx)
}

fn run_generate(args: &ExsyncCli) -> Result<(), ExsyncError> {
	let ctx = load_project(args)?;
	let root = resolve_root(args);
	let rel = make_relative(&ctx.output_path(), &root);

	if sync_module(&ctx)? {
		println!("Generated {rel}.");
	} else {
		println!("{rel} is already up to date.");
	}

	Ok(())
}

/// Returns the exit code: `0` when the module is current, `1` when stale.
fn run_check(args: &ExsyncCli) -> Result<i32, ExsyncError> {
	let ctx = load_project(args)?;
	let root = resolve_root(args);
	let result = check_module(&ctx)?;
	let rel = make_relative(&result.path, &root);

	if result.is_ok() {
		println!("Check passed: {rel} is up to date.");
		return Ok(0);
	}

	match &result.current {
		Some(current) => {
			eprintln!("Check failed: {rel} is out of date.");
			if args.diff {
				print_diff(current, &result.expected);
			}
		}
		None => eprintln!("Check failed: {rel} does not exist."),
	}
	eprintln!("Run `exsync --generate-only` to fix.");

	Ok(1)
}

fn run_all(args: &ExsyncCli) -> Result<i32, ExsyncError> {
	let ctx = load_project(args)?;
	let report = extract_and_run_project(&ctx)?;
	print_report(&report);

	Ok(report.exit_code())
}

fn print_report(report: &RunReport) {
	let Some(failure) = report.first_failure() else {
		println!("{}", colored!("All commands passed.", green));
		return;
	};

	for outcome in &report.outcomes {
		if !outcome.is_success() {
			eprintln!(
				"{} {} command `{}` failed ({})",
				colored!("error:", red),
				outcome.step,
				outcome.command.join(" "),
				outcome.status
			);
		}
	}

	if report.outcomes.iter().filter(|o| !o.is_success()).count() > 1 {
		eprintln!(
			"{} exiting with the status of the first failure ({})",
			colored!("note:", yellow),
			failure.step
		);
	}
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}

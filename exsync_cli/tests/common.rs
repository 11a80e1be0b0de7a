use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn exsync_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("exsync"));
	cmd.env("NO_COLOR", "1").env_remove("EXSYNC_LOG");
	cmd
}

/// Create a readme and the `src` directory the generated module lives in.
pub fn write_project(root: &Path, readme: &str, config: &str) -> std::io::Result<()> {
	std::fs::write(root.join("README.md"), readme)?;
	std::fs::create_dir_all(root.join("src"))?;
	if !config.is_empty() {
		std::fs::write(root.join("exsync.toml"), config)?;
	}
	Ok(())
}

mod common;

use exsync_core::AnyEmptyResult;

#[test]
fn verbose_reports_dot_exsync_toml() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), "## Examples\n", "")?;
	std::fs::write(tmp.path().join(".exsync.toml"), "")?;

	common::exsync_cmd()
		.arg("--check")
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.stdout(predicates::str::contains("Resolved config: .exsync.toml"));

	Ok(())
}

#[test]
fn verbose_reports_dot_config_exsync_toml() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), "## Examples\n", "")?;
	std::fs::create_dir_all(tmp.path().join(".config"))?;
	std::fs::write(tmp.path().join(".config/exsync.toml"), "")?;

	common::exsync_cmd()
		.arg("--check")
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.stdout(predicates::str::contains("Resolved config: .config/exsync.toml"));

	Ok(())
}

#[test]
fn configured_paths_are_used() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("tests"))?;
	std::fs::write(tmp.path().join("DOCS.md"), "intro\n# Usage\nfoo\n")?;
	std::fs::write(
		tmp.path().join("exsync.toml"),
		"readme = \"DOCS.md\"\nmarker = \"# Usage\"\noutput = \"tests/Docs.elm\"\nmodule = \
		 \"Docs\"\n",
	)?;

	common::exsync_cmd()
		.arg("--generate-only")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let module = std::fs::read_to_string(tmp.path().join("tests/Docs.elm"))?;
	assert!(module.starts_with("\nmodule Docs exposing (..)\n"));
	assert!(module.contains("{-|\n\nfoo\n\n-}"));

	Ok(())
}

#[test]
fn invalid_config_exits_with_diagnostic() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("exsync.toml"), "readme = [1, 2]\n")?;

	common::exsync_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("exsync::config_parse"));

	Ok(())
}

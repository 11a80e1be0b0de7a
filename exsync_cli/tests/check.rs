mod common;

use exsync_core::AnyEmptyResult;

const README: &str = "# Maths\n\n## Examples\n\n    add 1 2\n    --> 3\n";

#[test]
fn check_fails_when_module_is_missing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), README, "")?;

	common::exsync_cmd()
		.arg("--check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("does not exist"));

	assert!(!tmp.path().join("src/Examples.elm").exists());

	Ok(())
}

#[test]
fn check_passes_after_generate() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), README, "")?;

	common::exsync_cmd()
		.arg("--generate-only")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	common::exsync_cmd()
		.arg("--check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Check passed"));

	Ok(())
}

#[test]
fn check_with_diff_shows_changes_without_writing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), README, "")?;

	common::exsync_cmd()
		.arg("--generate-only")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let before = std::fs::read_to_string(tmp.path().join("src/Examples.elm"))?;
	std::fs::write(
		tmp.path().join("README.md"),
		"# Maths\n\n## Examples\n\n    add 2 2\n    --> 4\n",
	)?;

	common::exsync_cmd()
		.arg("--check")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("out of date"))
		.stderr(predicates::str::contains("-    add 1 2"))
		.stderr(predicates::str::contains("+    add 2 2"));

	let after = std::fs::read_to_string(tmp.path().join("src/Examples.elm"))?;
	assert_eq!(before, after);

	Ok(())
}

#[test]
fn diff_requires_check() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::exsync_cmd()
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure();

	Ok(())
}

#[test]
fn help_explains_shared_exit_statuses() -> AnyEmptyResult {
	common::exsync_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicates::str::contains("Exit status 1 also"))
		.stdout(predicates::str::contains("exit status 2 also"));

	Ok(())
}

mod common;

use similar_asserts::assert_eq;
use tagstub_core::AnyEmptyResult;

#[test]
fn init_creates_sample_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::tagstub_cmd();
	cmd.env("NO_COLOR", "1")
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created tagstub.toml"))
		.stdout(predicates::str::contains("Next steps:"));

	let content = std::fs::read_to_string(tmp.path().join("tagstub.toml"))?;
	assert!(content.contains("# [rename]"));
	assert!(content.contains("# [elements.Component]"));

	Ok(())
}

#[test]
fn init_is_a_noop_when_config_exists() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("tagstub.toml"), "[rename]\n")?;

	let mut cmd = common::tagstub_cmd();
	cmd.env("NO_COLOR", "1")
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("tagstub.toml"))?,
		"[rename]\n"
	);

	Ok(())
}

#[test]
fn init_sample_config_keeps_default_behavior() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::tagstub_cmd();
	cmd.env("NO_COLOR", "1")
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let mut cmd = common::tagstub_cmd();
	let output = cmd
		.env("NO_COLOR", "1")
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.write_stdin("<abstract type=\"string\">")
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	assert_eq!(
		String::from_utf8(output)?,
		"ICMSElement abstractText = Model.Element(\"abstract\");\n"
	);

	Ok(())
}

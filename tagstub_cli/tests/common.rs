use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn tagstub_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("tagstub"));
	cmd.env("NO_COLOR", "1");
	cmd
}

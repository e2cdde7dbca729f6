use assert_cmd::Command;

pub fn mensa_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mensa").unwrap();
    cmd.env_remove("MENSA_ROOT");
    cmd
}

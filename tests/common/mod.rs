use assert_cmd::Command;

pub fn provtag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("provtag").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

use assert_cmd::Command;

pub fn utm_cmd() -> Command {
    let mut cmd = Command::cargo_bin("utm").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

use assert_cmd::Command;

pub fn upkeep_cmd() -> Command {
    let mut cmd = Command::cargo_bin("upkeep").unwrap();
    cmd.env_remove("UPKEEP_DIR");
    cmd.env_remove("UPKEEP_IDENTITY");
    cmd.env_remove("UPKEEP_LOG");
    cmd
}

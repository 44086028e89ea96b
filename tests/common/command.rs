use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::create_dir_all(dir.path().join(".git").join("objects"))
        .expect("Failed to create object store");
    std::fs::create_dir_all(dir.path().join(".git").join("refs").join("heads"))
        .expect("Failed to create refs directory");
    dir
}

pub fn run_objtree_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("objtree").expect("Failed to find objtree binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn tagsmith_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagsmith").unwrap();
    cmd.env_remove("TAGSMITH_ROOT");
    cmd.env_remove("TAGSMITH_SYMBOL");
    cmd.env_remove("TAGSMITH_LOG");
    cmd
}

/// Copy the fixture category files into a workspace's catalog directory
#[allow(dead_code)]
pub fn install_fixture_categories(root: &Path) {
    let source = Path::new("tests").join("fixtures").join("categories");
    let target = root.join("categories");
    fs::create_dir_all(&target).unwrap();
    for entry in fs::read_dir(source).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), target.join(entry.file_name())).unwrap();
    }
}

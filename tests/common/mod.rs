#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn brag_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("brag").unwrap();
    cmd.env_remove("BRAG_DATA_DIR");
    cmd.env_remove("BRAG_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd.env("BRAG_CONFIG", data_dir.join("no-such-config.toml"));
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

/// Write raw lines into a day file, bypassing the encoder.
pub fn write_day_file(root: &Path, date: &str, lines: &[&str]) {
    let mut parts = date.split('-');
    let (year, month, day) = (
        parts.next().unwrap(),
        parts.next().unwrap(),
        parts.next().unwrap(),
    );
    let dir = root.join(year).join(month);
    fs::create_dir_all(&dir).unwrap();

    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(dir.join(format!("{}.jsonl", day)), contents).unwrap();
}

pub fn line(content: &str, timestamp: &str) -> String {
    format!(
        r#"{{"content": "{}", "timestamp": "{}", "tags": [], "project": null}}"#,
        content, timestamp
    )
}

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use whimsy::WordPool;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn whimsy_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_whimsy"))
}

/// A `whimsy` invocation with the environment knobs cleared.
pub fn whimsy_command<I, S>(args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = Command::new(whimsy_binary());
    cmd.args(args).env_remove("WHIMSY_PARTS").env_remove("WHIMSY_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn load_json(path: &Path) -> Result<Value> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}

/// Check that `name` is `parts` distinct pool words joined by hyphens.
pub fn assert_well_formed(name: &str, parts: usize, pool: &WordPool) {
    let segments: Vec<&str> = name.split('-').collect();
    assert_eq!(segments.len(), parts, "wrong part count in '{name}'");
    for segment in &segments {
        assert!(pool.contains(segment), "'{segment}' in '{name}' is not a catalog word");
    }
    let unique: BTreeSet<&str> = segments.iter().copied().collect();
    assert_eq!(unique.len(), parts, "repeated part in '{name}'");
}

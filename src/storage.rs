use anyhow::{Context, Result};
use dirs::data_local_dir;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::model::{AppState, Task};

fn base_dir() -> PathBuf {
    let mut base = data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push("taskdeck");
    base
}

pub fn tasks_path() -> PathBuf {
    let mut base = base_dir();
    base.push("tasks.json");
    base
}

pub fn state_path() -> PathBuf {
    let mut base = base_dir();
    base.push("state.json");
    base
}

/// Returns `None` when the slot is absent or malformed; the caller
/// falls back to the seed set instead of crashing on corruption.
pub fn load_tasks(path: &Path) -> Option<Vec<Task>> {
    let bytes = fs::read(path).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create data dir {}", dir.display()))?;
    }
    let bytes = serde_json::to_vec_pretty(tasks).context("serialize tasks")?;
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

pub fn load_state(path: &Path) -> AppState {
    let Ok(bytes) = fs::read(path) else {
        return AppState::default();
    };
    serde_json::from_slice(&bytes).unwrap_or_default()
}

pub fn save_state(path: &Path, state: &AppState) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create data dir {}", dir.display()))?;
    }
    let bytes = serde_json::to_vec_pretty(state).context("serialize state")?;
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

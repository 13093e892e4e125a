//! Where textfield keeps its files
//!
//! ```text
//! <config>/textfield/
//!   textfield.yaml      FieldConfig defaults
//!   styles/<id>.yaml    user styles, shadowing the builtin ones
//!   logs/textfield.log  daily-rotated debug log
//! ```
//!
//! `<config>` is `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS, and
//! `%APPDATA%` on Windows.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "textfield";

fn platform_config_root() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        env::var_os("APPDATA").map(PathBuf::from)
    } else {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    }
}

pub fn config_dir() -> Option<PathBuf> {
    platform_config_root().map(|root| root.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join("textfield.yaml"))
}

pub fn styles_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("styles"))
}

/// User style file for `id`, if one has been installed
pub fn user_style_file(id: &str) -> Option<PathBuf> {
    let path = styles_dir()?.join(format!("{}.yaml", id));
    path.is_file().then_some(path)
}

pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("logs"))
}

pub(crate) fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or("No config directory available")?;
    ensure_dir(&logs)?;
    Ok(logs)
}

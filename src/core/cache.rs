//! File locations and helpers for saved league snapshots.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Root of the on-disk cache: `<cache_dir>/fpl-league`.
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("fpl-league")
}

/// Path: `<cache_dir>/fpl-league/snapshot_{league_id}_gw{gameweek}.json`
pub fn snapshot_path(league_id: u32, gameweek: u16) -> PathBuf {
    cache_root().join(format!("snapshot_{}_gw{}.json", league_id, gameweek))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

use std::path::{Path, PathBuf};
use tracing::warn;

/// File key for a team logo. Separators that are not valid in file names
/// (the "/" in "NJ/NY Gotham FC") become ":".
pub fn logo_key(team: &str) -> String {
    team.replace(['/', '\\'], ":")
}

pub fn logo_path(logo_dir: &Path, team: &str) -> PathBuf {
    logo_dir.join(format!("{}.png", logo_key(team)))
}

/// Resolves the logo for `team`, warning when it is missing.
pub fn find_logo(logo_dir: &Path, team: &str) -> Option<PathBuf> {
    let path = logo_path(logo_dir, team);
    if path.is_file() {
        Some(path)
    } else {
        warn!("Logo for {} not found at '{}'.", team, path.display());
        None
    }
}

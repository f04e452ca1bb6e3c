//! Input path helpers

use std::path::{Path, PathBuf};

/// Where the sampler's output is read from by default
pub const DEFAULT_POINTS_PATH: &str = "~/raytracer/points.txt";

/// Replace a leading `~` with the user's home directory.
///
/// Only a bare `~` or a `~/` prefix is expanded; `~user` forms and paths
/// without a tilde are returned unchanged, as is everything when `HOME` is
/// not set.
pub fn expand_home<P: AsRef<Path>>(path: P) -> PathBuf {
    expand_with(path.as_ref(), std::env::var_os("HOME").map(PathBuf::from))
}

fn expand_with(path: &Path, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };

    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

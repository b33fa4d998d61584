//! Path helpers for the Zellij sandbox, where the host filesystem lives under
//! `/host`.

use std::path::PathBuf;

/// Returns the data directory for countrydir files (trace output).
///
/// Resolves to `/host/.local/share/zellij/countrydir`. `/host` is the cwd of the
/// last focused terminal, usually the user's home directory.
///
/// ```
/// use countrydir::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/countrydir"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("countrydir")
}

/// Maps a leading `~` to the sandbox `/host` prefix.
///
/// ```
/// use countrydir::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_is_only_expanded_at_the_start() {
        assert_eq!(expand_tilde("~user/file"), "~user/file");
        assert_eq!(expand_tilde("dir/~/file"), "dir/~/file");
        assert_eq!(expand_tilde("~/a/~/b"), "/host/a/~/b");
    }

    #[test]
    fn data_dir_is_under_zellij_share() {
        assert!(get_data_dir().ends_with("zellij/countrydir"));
    }
}

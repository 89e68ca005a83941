//! Paths inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host filesystem under `/host`, which normally resolves to
//! the directory Zellij was started from (usually the user's home).

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory for the plugin's own files, such as exported traces.
///
/// Resolves to `~/.local/share/zellij/customer-pane` on the host when Zellij
/// runs from the home directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("customer-pane")
}

/// Rewrites a leading `~` to the sandbox `/host` mount.
///
/// Only a bare `~` or a `~/` prefix is rewritten; `~user` paths and every
/// other path are returned as given.
///
/// # Example
///
/// ```rust
/// use customer_pane::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("/etc/dusk.toml"), "/etc/dusk.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/customer-pane")
        );
    }

    #[test]
    fn tilde_maps_to_host() {
        assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
        assert_eq!(expand_tilde("~"), "/host");
    }

    #[test]
    fn other_paths_are_untouched() {
        assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
        assert_eq!(expand_tilde("~alice/theme.toml"), "~alice/theme.toml");
        assert_eq!(expand_tilde("relative/~/x"), "relative/~/x");
    }
}

use std::path::PathBuf;

/// Get the base data directory following the XDG Base Directory Specification.
/// Returns `$XDG_DATA_HOME/quadro` or `~/.local/share/quadro`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data).join("quadro");
    }

    let home = std::env::var("HOME").expect("HOME environment variable must be set");
    PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("quadro")
}

/// Get the logs directory path.
/// Returns `{data_dir}/logs`.
pub fn get_log_dir() -> PathBuf {
    get_data_dir().join("logs")
}

/// Get the directory holding the persisted board collections.
/// Returns `{data_dir}/board`.
pub fn get_board_dir() -> PathBuf {
    get_data_dir().join("board")
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &PathBuf) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_structure() {
        let data = get_data_dir();
        assert!(data.ends_with("quadro"));

        let logs = get_log_dir();
        assert!(logs.ends_with("logs"));

        let board = get_board_dir();
        assert!(board.ends_with("board"));
    }
}

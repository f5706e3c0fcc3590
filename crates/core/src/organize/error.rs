use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while placing a single file.
///
/// The engine catches these at the file's own boundary and turns them into
/// result entries; they never abort sibling placements.
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to check destination {path}: {source}")]
    ExistenceCheckFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to hard-link {source_path} to {dest_path}: {source}")]
    LinkFailed {
        source_path: PathBuf,
        dest_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {source_path} to {dest_path}: {source}")]
    MoveFailed {
        source_path: PathBuf,
        dest_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_paths() {
        let err = OrganizeError::SourceNotFound {
            path: PathBuf::from("/downloads/missing.mkv"),
        };
        assert_eq!(err.to_string(), "Source file not found: /downloads/missing.mkv");

        let err = OrganizeError::LinkFailed {
            source_path: PathBuf::from("/downloads/a.mkv"),
            dest_path: PathBuf::from("/library/a.mkv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/downloads/a.mkv"));
        assert!(message.contains("/library/a.mkv"));
    }
}

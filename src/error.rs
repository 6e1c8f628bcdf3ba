//! Error type for the few fallible edges (assets and link launching)

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to open {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("Asset not found: {}", .0.display())]
    MissingAsset(PathBuf),
}

impl PortfolioError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PortfolioError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = PortfolioError::io(
            "/tmp/resume.pdf",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/resume.pdf"));
        assert!(msg.contains("denied"));

        let err = PortfolioError::MissingAsset(PathBuf::from("/tmp/shiva.jpg"));
        assert_eq!(err.to_string(), "Asset not found: /tmp/shiva.jpg");
    }

    #[test]
    fn launch_error_names_url() {
        let err = PortfolioError::Launch {
            url: "https://github.com/shivaram-2004".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "no browser"),
        };
        assert!(err.to_string().starts_with("Failed to open https://github.com/shivaram-2004"));
    }
}

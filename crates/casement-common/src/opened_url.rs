//! URLs handed to the shell by the OS ("open this link with casement").

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::CasementError;

/// An inbound "open URL" event. Immutable; carries no identity beyond its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenedUrl {
    pub scheme: String,
    pub authority: String,
    /// Scheme-specific path, percent-decoded.
    pub path: String,
    pub query: Option<String>,
}

impl OpenedUrl {
    pub fn new(authority: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            scheme: String::new(),
            authority: authority.into(),
            path: path.into(),
            query: None,
        }
    }

    /// Parse a raw URL such as `casement://file/home/me/notes.txt`.
    pub fn parse(raw: &str) -> Result<Self, CasementError> {
        let parsed = url::Url::parse(raw)
            .map_err(|e| CasementError::Other(format!("invalid url '{raw}': {e}")))?;

        let path = urlencoding::decode(parsed.path())
            .map_err(|e| CasementError::Other(format!("invalid url path in '{raw}': {e}")))?
            .into_owned();

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            authority: parsed.host_str().unwrap_or_default().to_string(),
            path,
            query: parsed.query().map(str::to_string),
        })
    }

    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Local file reference for the URL path.
    ///
    /// On Windows a leading slash before a drive letter (`/C:/x`) is dropped.
    pub fn to_file_path(&self) -> PathBuf {
        let bytes = self.path.as_bytes();
        let has_drive = bytes.len() >= 3
            && bytes[0] == b'/'
            && bytes[1].is_ascii_alphabetic()
            && bytes[2] == b':';
        if cfg!(windows) && has_drive {
            PathBuf::from(&self.path[1..])
        } else {
            PathBuf::from(&self.path)
        }
    }
}

impl fmt::Display for OpenedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}://", self.scheme)?;
        }
        write!(f, "{}{}", self.authority, self.path)?;
        if let Some(ref query) = self.query {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

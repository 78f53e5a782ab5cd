//! Git repository references and directory-name derivation.
//!
//! A [`GitRepoRef`] couples a URL with the local directory name derived
//! from it. The derivation happens exactly once, at construction; every
//! consumer (ignore entries, `.gitmodules`, clone destination) reuses the
//! same value, so the three can never drift apart.

use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::identifiers::AppName;

/// Which repository a reference points at, in the multi-repository layout.
///
/// The order of the variants is the clone order: UI before protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoRole {
    /// The primary application repository, cloned at the destination.
    App,
    /// The user-interface repository, cloned under `apps/`.
    Ui,
    /// The protocol/schema repository, cloned under `apps/`.
    Proto,
}

impl RepoRole {
    /// Suffix appended to the app name in the conventional URL:
    /// `<host>:<org>/<app><suffix>.git`.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::App => "",
            Self::Ui => "_ui",
            Self::Proto => "_proto",
        }
    }
}

/// A git URL plus the directory name derived from its trailing
/// `/<name>.git` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRepoRef {
    url: String,
    dir_name: String,
}

impl GitRepoRef {
    /// Parse a URL, deriving the local directory name.
    ///
    /// The rule is fixed: the last `/`-delimited path segment with a
    /// trailing `.git` removed. URLs with query strings or unusual hosting
    /// paths are out of scope and fail here.
    pub fn parse(url: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedGitUrl {
            url: url.to_string(),
        };

        // scp-style URLs (`git@host:org/name.git`) have no scheme; the
        // final segment sits after the last `/` either way.
        let tail = url.rsplit('/').next().ok_or_else(malformed)?;
        let name = tail.strip_suffix(".git").ok_or_else(malformed)?;
        if name.is_empty() || name.contains(':') {
            return Err(malformed());
        }

        Ok(Self {
            url: url.to_string(),
            dir_name: name.to_string(),
        })
    }

    /// Build the conventional URL for a role: `<host>:<org>/<app><suffix>.git`.
    pub fn conventional(host: &str, org: &str, app: &AppName, role: RepoRole) -> Self {
        let url = format!("{host}:{org}/{app}{}.git", role.suffix());
        let dir_name = format!("{app}{}", role.suffix());
        Self { url, dir_name }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }
}

impl fmt::Display for GitRepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

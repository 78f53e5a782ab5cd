//! Short version tags for the generated build descriptor.
//!
//! The generated `mix.exs` pins `elixir: "~> {major}.{minor}"`; this module
//! derives that short tag from a full semantic version. The value is
//! cosmetic in the output, but a malformed configured version is still a
//! hard error because the tag is computed eagerly, before any file is
//! written.

use crate::domain::error::DomainError;

/// Shorten `major.minor.patch[-prerelease]` to `major.minor`, keeping the
/// first prerelease component when one exists.
///
/// ```
/// use exforge_core::domain::short_version;
///
/// assert_eq!(short_version("1.4.0").unwrap(), "1.4");
/// assert_eq!(short_version("1.4.0-rc.1").unwrap(), "1.4-rc.1");
/// assert!(short_version("not-a-version").is_err());
/// ```
pub fn short_version(full: &str) -> Result<String, DomainError> {
    let parse_err = || DomainError::VersionParse {
        input: full.to_string(),
    };

    // Split off the prerelease tail first: `1.4.0-rc.1` → (`1.4.0`, `rc.1`).
    let (core, prerelease) = match full.split_once('-') {
        Some((core, pre)) if !pre.is_empty() => (core, Some(pre)),
        Some(_) => return Err(parse_err()),
        None => (full, None),
    };

    let mut parts = core.split('.');
    let major = numeric(parts.next()).ok_or_else(parse_err)?;
    let minor = numeric(parts.next()).ok_or_else(parse_err)?;
    let _patch = numeric(parts.next()).ok_or_else(parse_err)?;
    if parts.next().is_some() {
        return Err(parse_err());
    }

    let mut short = format!("{major}.{minor}");
    if let Some(pre) = prerelease {
        // Keep the prerelease head up to the `+` build separator:
        // `1.4.0-rc.1+build5` → `1.4-rc.1`.
        let head = pre.split('+').next().unwrap_or(pre);
        short.push('-');
        short.push_str(head);
    }
    Ok(short)
}

fn numeric(part: Option<&str>) -> Option<u64> {
    part.and_then(|p| p.parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_release_keeps_major_minor() {
        assert_eq!(short_version("1.4.0").unwrap(), "1.4");
        assert_eq!(short_version("10.2.33").unwrap(), "10.2");
    }

    #[test]
    fn prerelease_head_is_appended() {
        assert_eq!(short_version("1.4.0-rc.1").unwrap(), "1.4-rc.1");
        assert_eq!(short_version("2.0.0-dev").unwrap(), "2.0-dev");
    }

    #[test]
    fn build_metadata_is_dropped() {
        assert_eq!(short_version("1.4.0-rc.1+build5").unwrap(), "1.4-rc.1");
    }

    #[test]
    fn malformed_versions_fail() {
        for bad in ["not-a-version", "1.4", "1", "", "1.4.x", "1.4.0.0", "v1.4.0", "1.4.0-"] {
            assert!(
                matches!(short_version(bad), Err(DomainError::VersionParse { .. })),
                "expected failure for {bad:?}"
            );
        }
    }
}

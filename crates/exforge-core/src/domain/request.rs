//! The scaffold request: one immutable record of what the user asked for.

/// Explicit git URL overrides for the multi-repository variant.
///
/// A `None` field means "use the conventional URL"
/// (`<host>:<org>/<app>[_ui|_proto].git`), resolved from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOptions {
    pub app_url: Option<String>,
    pub ui_url: Option<String>,
    pub proto_url: Option<String>,
}

/// Everything the controller needs for one invocation. Built once from
/// CLI input; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Target path; its final segment names the application unless
    /// `app_override` is set.
    pub path: String,
    /// Explicit application name (`--app`). Single-repository variant only.
    pub app_override: Option<String>,
    /// Explicit module name (`--module`). Single-repository variant only.
    pub module_override: Option<String>,
    /// `Some` selects the multi-repository variant.
    pub git: Option<GitOptions>,
}

impl ScaffoldRequest {
    /// A plain single-repository request for `path`.
    pub fn single(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            app_override: None,
            module_override: None,
            git: None,
        }
    }

    /// A multi-repository request for `path` with the given overrides.
    pub fn multi(path: impl Into<String>, git: GitOptions) -> Self {
        Self {
            path: path.into(),
            app_override: None,
            module_override: None,
            git: Some(git),
        }
    }

    pub fn is_multi(&self) -> bool {
        self.git.is_some()
    }
}

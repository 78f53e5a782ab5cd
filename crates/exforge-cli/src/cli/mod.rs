//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "exforge",
    bin_name = "exforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Elixir project generation",
    long_about = "Exforge generates Elixir application skeletons, optionally \
                  stitching companion UI and protocol repositories together \
                  as git submodules.",
    after_help = "EXAMPLES:\n\
        \x20 exforge new hello_world\n\
        \x20 exforge new apps/gateway --module Acme.Gateway\n\
        \x20 exforge new hello_world --multi\n\
        \x20 exforge completions bash > /usr/share/bash-completion/completions/exforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new Elixir project.
    #[command(
        visible_alias = "n",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 exforge new hello_world\n\
            \x20 exforge new services/billing --app billing --module Acme.Billing\n\
            \x20 exforge new hello_world --multi\n\
            \x20 exforge new hello_world --multi --git-ui git@github.com:acme/frontend.git"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 exforge completions bash > ~/.local/share/bash-completion/completions/exforge\n\
            \x20 exforge completions zsh  > ~/.zfunc/_exforge\n\
            \x20 exforge completions fish > ~/.config/fish/completions/exforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `exforge new`.
///
/// `--app` and `--module` refine the single-repository variant;
/// `--git-*` URLs refine the multi-repository variant selected by
/// `--multi`.  clap rejects mixtures of the two groups.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Destination path.  Its final segment names the application unless
    /// `--app` is given.
    #[arg(value_name = "PATH", help = "Destination path for the new project")]
    pub path: String,

    /// Explicit application name.
    #[arg(
        long = "app",
        value_name = "NAME",
        conflicts_with = "multi",
        help = "Application name (default: last segment of PATH)"
    )]
    pub app: Option<String>,

    /// Explicit root module name.
    #[arg(
        long = "module",
        value_name = "NAME",
        conflicts_with = "multi",
        help = "Root module name (default: camelized application name)"
    )]
    pub module: Option<String>,

    /// Select the multi-repository variant: clone the application
    /// repository, then stitch UI and protocol repositories in as
    /// submodule-style checkouts under `apps/`.
    #[arg(long = "multi", help = "Generate the multi-repository layout")]
    pub multi: bool,

    /// Application repository URL (default: conventional from config).
    #[arg(
        long = "git-app",
        value_name = "URL",
        requires = "multi",
        help = "Application repository URL"
    )]
    pub git_app: Option<String>,

    /// UI repository URL (default: conventional from config).
    #[arg(
        long = "git-ui",
        value_name = "URL",
        requires = "multi",
        help = "UI repository URL"
    )]
    pub git_ui: Option<String>,

    /// Protocol-definitions repository URL (default: conventional from config).
    #[arg(
        long = "git-proto",
        value_name = "URL",
        requires = "multi",
        help = "Protocol definitions repository URL"
    )]
    pub git_proto: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `exforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_plain_new() {
        let cli = Cli::parse_from(["exforge", "new", "hello_world"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.path, "hello_world");
                assert!(!args.multi);
                assert!(args.app.is_none());
            }
            _ => panic!("expected new command"),
        }
    }

    #[test]
    fn parse_new_with_overrides() {
        let cli = Cli::parse_from([
            "exforge", "new", "services/billing", "--app", "billing", "--module", "Acme.Billing",
        ]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.app.as_deref(), Some("billing"));
                assert_eq!(args.module.as_deref(), Some("Acme.Billing"));
            }
            _ => panic!("expected new command"),
        }
    }

    #[test]
    fn parse_multi_with_url_override() {
        let cli = Cli::parse_from([
            "exforge", "new", "hello_world", "--multi",
            "--git-ui", "git@github.com:acme/frontend.git",
        ]);
        match cli.command {
            Commands::New(args) => {
                assert!(args.multi);
                assert_eq!(args.git_ui.as_deref(), Some("git@github.com:acme/frontend.git"));
                assert!(args.git_app.is_none());
            }
            _ => panic!("expected new command"),
        }
    }

    #[test]
    fn app_conflicts_with_multi() {
        let result = Cli::try_parse_from(["exforge", "new", "x", "--multi", "--app", "y"]);
        assert!(result.is_err());
    }

    #[test]
    fn git_url_requires_multi() {
        let result = Cli::try_parse_from([
            "exforge", "new", "x", "--git-ui", "git@github.com:acme/ui.git",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["exforge", "--quiet", "--verbose", "new", "x"]);
        assert!(result.is_err());
    }
}

//! Implementation of the `exforge new` command.
//!
//! Responsibility: translate CLI arguments into a [`ScaffoldRequest`],
//! wire up the production adapters, call the core scaffold service, and
//! display results.  No generation logic lives here.

use tracing::{debug, instrument};

use exforge_adapters::{
    ElixirRegistry, EmbeddedCatalog, LocalFilesystem, StrictRenderer, SystemGit,
};
use exforge_core::{GitOptions, ScaffoldRequest, ScaffoldService, Settings};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `exforge new` command.
///
/// Dispatch sequence:
/// 1. Build the request from CLI arguments
/// 2. Check the URL convention is satisfiable (multi only)
/// 3. Wire the production adapters into the scaffold service
/// 4. Run generation
/// 5. Print the outcome and next-steps guidance
#[instrument(skip_all, fields(path = %args.path, multi = args.multi))]
pub fn execute(
    args: NewArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Request
    let request = build_request(&args);
    let settings = config.settings();

    // 2. Conventional URLs need git.org; explicit URLs do not.
    if args.multi && settings.git_org.is_empty() && convention_needed(&args) {
        return Err(CliError::MissingOrganization);
    }

    debug!(
        app = args.app.as_deref().unwrap_or("<derived>"),
        module = args.module.as_deref().unwrap_or("<derived>"),
        "request assembled"
    );

    // 3. Adapters
    let service = ScaffoldService::new(
        Box::new(ElixirRegistry::new()),
        Box::new(SystemGit::new()),
        Box::new(EmbeddedCatalog::new()),
        Box::new(StrictRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    // 4. Generate
    let outcome = service.generate(&request, &settings)?;

    // 5. Report
    output.success(&format!(
        "Generated {} ({}) at {}",
        outcome.app,
        outcome.module,
        outcome.root.display()
    ))?;
    for file in &outcome.files {
        output.print(&format!("  created {}", file))?;
    }
    for url in &outcome.cloned {
        output.print(&format!("  cloned  {url}"))?;
    }

    show_next_steps(&args, &outcome.root, &output)?;
    Ok(())
}

/// Whether any repository URL falls back to the
/// `<host>:<org>/<name>.git` convention.
fn convention_needed(args: &NewArgs) -> bool {
    args.git_app.is_none() || args.git_ui.is_none() || args.git_proto.is_none()
}

fn build_request(args: &NewArgs) -> ScaffoldRequest {
    let mut request = if args.multi {
        ScaffoldRequest::multi(
            &args.path,
            GitOptions {
                app_url: args.git_app.clone(),
                ui_url: args.git_ui.clone(),
                proto_url: args.git_proto.clone(),
            },
        )
    } else {
        ScaffoldRequest::single(&args.path)
    };
    request.app_override = args.app.clone();
    request.module_override = args.module.clone();
    request
}

fn show_next_steps(args: &NewArgs, root: &std::path::Path, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.header("Next steps")?;
    out.print(&format!("  cd {}", root.display()))?;
    if args.multi {
        out.print("  make all")?;
    } else {
        out.print("  mix deps.get")?;
    }
    out.print("  mix test")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    fn new_args(argv: &[&str]) -> NewArgs {
        match Cli::parse_from(argv).command {
            Commands::New(args) => args,
            _ => panic!("expected new command"),
        }
    }

    #[test]
    fn plain_invocation_builds_a_single_request() {
        let request = build_request(&new_args(&["exforge", "new", "hello_world"]));
        assert!(!request.is_multi());
        assert_eq!(request.path, "hello_world");
    }

    #[test]
    fn multi_invocation_carries_url_overrides() {
        let request = build_request(&new_args(&[
            "exforge", "new", "hello_world", "--multi",
            "--git-proto", "git@github.com:acme/schemas.git",
        ]));
        let git = request.git.expect("multi request");
        assert!(git.app_url.is_none());
        assert_eq!(git.proto_url.as_deref(), Some("git@github.com:acme/schemas.git"));
    }

    #[test]
    fn convention_needed_unless_all_urls_explicit() {
        let partial = new_args(&[
            "exforge", "new", "x", "--multi", "--git-ui", "git@h:o/ui.git",
        ]);
        assert!(convention_needed(&partial));

        let full = new_args(&[
            "exforge", "new", "x", "--multi",
            "--git-app", "git@h:o/x.git",
            "--git-ui", "git@h:o/x_ui.git",
            "--git-proto", "git@h:o/x_proto.git",
        ]);
        assert!(!convention_needed(&full));
    }
}

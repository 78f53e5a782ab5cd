//! Scaffold service - the top-level generation controller.
//!
//! Sequencing is fixed and fail-fast; each step is a hard precondition
//! for the next:
//!
//! 1. (caller) Parse CLI arguments into a [`ScaffoldRequest`]
//! 2. Derive and validate the application and module names
//! 3. (multi) Resolve and pre-flight-probe all git references
//! 4. (multi) Clone the primary repository / (single) create the
//!    destination directory
//! 5. Resolve all further paths against the destination root
//! 6. Assemble the full template context
//! 7. Render and write each generated file in fixed catalog order
//! 8. (multi) Clone auxiliary repositories into `apps/`
//! 9. Report the outcome
//!
//! Generation is deliberately non-transactional: a failure in a late
//! step leaves earlier output on disk. Scaffolding is a one-shot,
//! user-supervised operation, not a transactional system.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Git, NameRegistry, TemplateCatalog, TemplateRenderer},
    },
    domain::{
        AppName, GeneratedFile, GitOptions, GitRepoRef, ModuleName, RelativePath, RepoRole,
        ScaffoldRequest, TemplateContext, short_version,
    },
    error::{ExforgeError, ExforgeResult},
};

/// Subdirectory that receives the auxiliary clones in the
/// multi-repository layout.
pub const SUBMODULE_DIR: &str = "apps";

/// Values the service needs from configuration: the URL convention and
/// the targeted toolchain version. The core never reads config files;
/// the CLI passes these in as plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Convention host, e.g. `git@github.com`.
    pub git_host: String,
    /// Convention organisation/owner. Must be non-empty when any
    /// multi-repository URL is left to the convention.
    pub git_org: String,
    /// Full toolchain version, shortened into the build descriptor.
    pub elixir_version: String,
}

/// What one successful invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub app: AppName,
    pub module: ModuleName,
    /// Destination root, as derived from the request path.
    pub root: PathBuf,
    /// Relative paths of every file written, in write order.
    pub files: Vec<RelativePath>,
    /// URLs cloned, in clone order (primary first).
    pub cloned: Vec<String>,
}

/// The three resolved references of the multi-repository variant.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedRepos {
    app: GitRepoRef,
    ui: GitRepoRef,
    proto: GitRepoRef,
}

/// Main scaffolding service. Owns the outgoing ports for the duration
/// of one invocation.
pub struct ScaffoldService {
    registry: Box<dyn NameRegistry>,
    git: Box<dyn Git>,
    catalog: Box<dyn TemplateCatalog>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(
        registry: Box<dyn NameRegistry>,
        git: Box<dyn Git>,
        catalog: Box<dyn TemplateCatalog>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            registry,
            git,
            catalog,
            renderer,
            filesystem,
        }
    }

    /// Run one generation end to end.
    #[instrument(skip_all, fields(path = %request.path, multi = request.is_multi()))]
    pub fn generate(
        &self,
        request: &ScaffoldRequest,
        settings: &Settings,
    ) -> ExforgeResult<ScaffoldOutcome> {
        // ── 2. Identifiers ────────────────────────────────────────────────
        let app = AppName::derive(&request.path, request.app_override.as_deref())?;
        let module = ModuleName::derive(&app, request.module_override.as_deref())?;
        if self.registry.exists(module.top_level()) {
            return Err(crate::domain::DomainError::ModuleNameTaken {
                name: module.to_string(),
            }
            .into());
        }
        let version = short_version(&settings.elixir_version)?;
        debug!(app = %app, module = %module, version = %version, "identifiers resolved");

        // ── 3. Git references + pre-flight probes ─────────────────────────
        // All references are resolved and probed before the filesystem is
        // touched; an unreachable remote aborts with nothing on disk.
        let repos = match &request.git {
            Some(opts) => Some(resolve_repos(opts, &app, settings)?),
            None => None,
        };
        if let Some(repos) = &repos {
            for repo in [&repos.app, &repos.ui, &repos.proto] {
                debug!(url = %repo, "probing remote");
                self.git.ls_remote(repo.url())?;
            }
        }

        // ── 4/5. Destination ──────────────────────────────────────────────
        let root = PathBuf::from(&request.path);
        let mut cloned = Vec::new();
        match &repos {
            Some(repos) => {
                // The primary clone creates the destination directory.
                info!(url = %repos.app, dest = %root.display(), "cloning primary repository");
                self.git
                    .clone_repo(repos.app.url(), Some(&request.path), Path::new("."))?;
                cloned.push(repos.app.url().to_string());
            }
            None => self.filesystem.create_dir_all(&root)?,
        }

        // ── 6. Context ────────────────────────────────────────────────────
        let context = build_context(&app, &module, &version, repos.as_ref());

        // ── 7. Render + materialize in fixed catalog order ────────────────
        let files = self.render_plan(&app, repos.is_some(), &context)?;
        for file in &files {
            let target = root.join(file.path.as_path());
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&target, &file.content)?;
        }
        info!(count = files.len(), "files written");

        // ── 8. Auxiliary clones, UI before protocol ───────────────────────
        if let Some(repos) = &repos {
            let apps_dir = root.join(SUBMODULE_DIR);
            self.filesystem.create_dir_all(&apps_dir)?;
            for repo in [&repos.ui, &repos.proto] {
                info!(url = %repo, dir = repo.dir_name(), "cloning auxiliary repository");
                self.git
                    .clone_repo(repo.url(), Some(repo.dir_name()), &apps_dir)?;
                cloned.push(repo.url().to_string());
            }
        }

        // ── 9. Outcome ────────────────────────────────────────────────────
        Ok(ScaffoldOutcome {
            app,
            module,
            root,
            files: files.into_iter().map(|f| f.path).collect(),
            cloned,
        })
    }

    /// Render the full file plan. Pure with respect to the filesystem:
    /// same context, same bytes.
    fn render_plan(
        &self,
        app: &AppName,
        multi: bool,
        context: &TemplateContext,
    ) -> ExforgeResult<Vec<GeneratedFile>> {
        let mut plan: Vec<(&str, RelativePath)> = vec![
            ("readme", "README.md".into()),
            ("gitignore", ".gitignore".into()),
        ];
        if multi {
            plan.push(("gitmodules", ".gitmodules".into()));
            plan.push(("makefile", "Makefile".into()));
        }
        plan.push(("mix-exs", "mix.exs".into()));
        plan.push(("config-exs", "config/config.exs".into()));
        plan.push(("app-module", RelativePath::new(format!("lib/{app}.ex"))));
        plan.push(("test-helper", "test/test_helper.exs".into()));
        plan.push(("smoke-test", RelativePath::new(format!("test/{app}_test.exs"))));

        let mut files = Vec::with_capacity(plan.len());
        for (id, path) in plan {
            let source = self.catalog.source(id).ok_or_else(|| {
                ExforgeError::from(ApplicationError::UnknownTemplate { id: id.to_string() })
            })?;
            let content = self.renderer.render(id, source, context)?;
            files.push(GeneratedFile::new(path, content));
        }
        Ok(files)
    }
}

/// Resolve the three repository references, filling missing URLs from
/// the `<host>:<org>/<app>[_ui|_proto].git` convention.
fn resolve_repos(
    opts: &GitOptions,
    app: &AppName,
    settings: &Settings,
) -> ExforgeResult<ResolvedRepos> {
    let resolve = |explicit: &Option<String>, role: RepoRole| -> ExforgeResult<GitRepoRef> {
        match explicit {
            Some(url) => Ok(GitRepoRef::parse(url)?),
            None => Ok(GitRepoRef::conventional(
                &settings.git_host,
                &settings.git_org,
                app,
                role,
            )),
        }
    };
    Ok(ResolvedRepos {
        app: resolve(&opts.app_url, RepoRole::App)?,
        ui: resolve(&opts.ui_url, RepoRole::Ui)?,
        proto: resolve(&opts.proto_url, RepoRole::Proto)?,
    })
}

/// Assemble the full template context. `umbrella` is always present so
/// conditional blocks stay strict; the git keys exist only in the
/// multi-repository variant (suppressed blocks never resolve them).
fn build_context(
    app: &AppName,
    module: &ModuleName,
    version: &str,
    repos: Option<&ResolvedRepos>,
) -> TemplateContext {
    let mut ctx = TemplateContext::new()
        .with("app", app.as_str())
        .with("module", module.as_str())
        .with("version", version)
        .with("umbrella", if repos.is_some() { "true" } else { "" });

    if let Some(repos) = repos {
        ctx = ctx
            .with("apps_dir", SUBMODULE_DIR)
            .with("git_app_url", repos.app.url())
            .with("git_ui_url", repos.ui.url())
            .with("git_proto_url", repos.proto.url())
            .with("ui_dir", repos.ui.dir_name())
            .with("proto_dir", repos.proto.dir_name());
    }
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockFilesystem, MockGit, MockNameRegistry, MockTemplateCatalog, MockTemplateRenderer,
    };
    use crate::domain::DomainError;

    /// Catalog/renderer pair that treats every id as known and renders
    /// the template id itself, so plan ordering is observable.
    fn passthrough_catalog() -> MockTemplateCatalog {
        let mut catalog = MockTemplateCatalog::new();
        catalog.expect_source().returning(|_| Some("body"));
        catalog
    }

    fn passthrough_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|id, _, _| Ok(id.to_string()));
        renderer
    }

    fn open_registry() -> MockNameRegistry {
        let mut registry = MockNameRegistry::new();
        registry.expect_exists().return_const(false);
        registry
    }

    fn settings() -> Settings {
        Settings {
            git_host: "git@github.com".into(),
            git_org: "acme".into(),
            elixir_version: "1.4.0".into(),
        }
    }

    fn service_with(
        registry: MockNameRegistry,
        git: MockGit,
        filesystem: MockFilesystem,
    ) -> ScaffoldService {
        ScaffoldService::new(
            Box::new(registry),
            Box::new(git),
            Box::new(passthrough_catalog()),
            Box::new(passthrough_renderer()),
            Box::new(filesystem),
        )
    }

    #[test]
    fn single_variant_writes_the_fixed_plan_and_never_calls_git() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = written.clone();
        fs.expect_write_file().returning(move |path, _| {
            sink.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });

        let mut git = MockGit::new();
        git.expect_ls_remote().times(0);
        git.expect_clone_repo().times(0);

        let service = service_with(open_registry(), git, fs);
        let outcome = service
            .generate(&ScaffoldRequest::single("hello_world"), &settings())
            .unwrap();

        assert_eq!(outcome.app.as_str(), "hello_world");
        assert_eq!(outcome.module.as_str(), "HelloWorld");
        assert!(outcome.cloned.is_empty());

        let paths: Vec<String> = written
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            paths,
            vec![
                "hello_world/README.md",
                "hello_world/.gitignore",
                "hello_world/mix.exs",
                "hello_world/config/config.exs",
                "hello_world/lib/hello_world.ex",
                "hello_world/test/test_helper.exs",
                "hello_world/test/hello_world_test.exs",
            ]
        );
    }

    #[test]
    fn unreachable_aux_remote_aborts_before_any_filesystem_effect() {
        // Scenario: the UI remote fails its pre-flight probe. Nothing may
        // be cloned and nothing may be written.
        let mut git = MockGit::new();
        git.expect_ls_remote().returning(|url| {
            if url.contains("_ui") {
                Err(ApplicationError::UnreachableGitRemote {
                    url: url.to_string(),
                    diagnostics: "fatal: repository not found".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        git.expect_clone_repo().times(0);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let service = service_with(open_registry(), git, fs);
        let err = service
            .generate(
                &ScaffoldRequest::multi("hello_world", GitOptions::default()),
                &settings(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            ExforgeError::Application(ApplicationError::UnreachableGitRemote { .. })
        ));
    }

    #[test]
    fn taken_module_name_aborts_before_any_file_is_written() {
        let mut registry = MockNameRegistry::new();
        registry
            .expect_exists()
            .withf(|name| name == "Existing")
            .return_const(true);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let service = service_with(registry, MockGit::new(), fs);
        let mut request = ScaffoldRequest::single("my_app");
        request.module_override = Some("Existing".into());

        let err = service.generate(&request, &settings()).unwrap_err();
        assert_eq!(
            err,
            ExforgeError::Domain(DomainError::ModuleNameTaken {
                name: "Existing".into()
            })
        );
    }

    #[test]
    fn multi_variant_probes_all_then_clones_in_fixed_order() {
        let calls = std::sync::Arc::new(std::sync::Mutex::new(Vec::<String>::new()));

        let mut git = MockGit::new();
        let probe_log = calls.clone();
        git.expect_ls_remote().returning(move |url| {
            probe_log.lock().unwrap().push(format!("probe {url}"));
            Ok(())
        });
        let clone_log = calls.clone();
        git.expect_clone_repo().returning(move |url, dir, cwd| {
            clone_log.lock().unwrap().push(format!(
                "clone {url} -> {}/{}",
                cwd.display(),
                dir.unwrap_or("")
            ));
            Ok(())
        });

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = service_with(open_registry(), git, fs);
        let outcome = service
            .generate(
                &ScaffoldRequest::multi("hello_world", GitOptions::default()),
                &settings(),
            )
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                "probe git@github.com:acme/hello_world.git",
                "probe git@github.com:acme/hello_world_ui.git",
                "probe git@github.com:acme/hello_world_proto.git",
                "clone git@github.com:acme/hello_world.git -> ./hello_world",
                "clone git@github.com:acme/hello_world_ui.git -> hello_world/apps/hello_world_ui",
                "clone git@github.com:acme/hello_world_proto.git -> hello_world/apps/hello_world_proto",
            ]
        );
        assert_eq!(outcome.cloned.len(), 3);
        assert!(outcome.files.iter().any(|p| p.as_path().ends_with(".gitmodules")));
    }

    #[test]
    fn explicit_urls_override_the_convention() {
        let mut git = MockGit::new();
        git.expect_ls_remote().returning(|_| Ok(()));
        git.expect_clone_repo().returning(|_, _, _| Ok(()));

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = service_with(open_registry(), git, fs);
        let request = ScaffoldRequest::multi(
            "hello_world",
            GitOptions {
                ui_url: Some("git@host:other/frontend.git".into()),
                ..GitOptions::default()
            },
        );
        let outcome = service.generate(&request, &settings()).unwrap();
        assert!(outcome.cloned.contains(&"git@host:other/frontend.git".to_string()));
    }

    #[test]
    fn malformed_explicit_url_fails_fast() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let service = service_with(open_registry(), MockGit::new(), fs);
        let request = ScaffoldRequest::multi(
            "hello_world",
            GitOptions {
                proto_url: Some("git@host:org/schemas".into()),
                ..GitOptions::default()
            },
        );
        let err = service.generate(&request, &settings()).unwrap_err();
        assert!(matches!(
            err,
            ExforgeError::Domain(DomainError::MalformedGitUrl { .. })
        ));
    }

    #[test]
    fn clone_failure_leaves_no_rollback_trace() {
        // Auxiliary clone fails after files are written: earlier output
        // stays (no remove calls exist on the Filesystem port at all).
        let mut git = MockGit::new();
        git.expect_ls_remote().returning(|_| Ok(()));
        git.expect_clone_repo().returning(|url, _, _| {
            if url.contains("_proto") {
                Err(ApplicationError::CloneFailed {
                    url: url.to_string(),
                    diagnostics: "network down".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        let writes = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = writes.clone();
        fs.expect_write_file().returning(move |_, _| {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(())
        });

        let service = service_with(open_registry(), git, fs);
        let err = service
            .generate(
                &ScaffoldRequest::multi("hello_world", GitOptions::default()),
                &settings(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            ExforgeError::Application(ApplicationError::CloneFailed { .. })
        ));
        // The nine multi-variant files were already on disk when the
        // clone failed, and stay there.
        assert_eq!(writes.load(std::sync::atomic::Ordering::SeqCst), 9);
    }
}

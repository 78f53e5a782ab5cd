//! The embedded template catalog.
//!
//! Template bodies are data, not code: a fixed table mapping a template
//! id to its source text, compiled into the binary. The renderer
//! operates purely on (source, context) pairs; nothing here knows how a
//! template will be rendered or where its output lands.
//!
//! Catalog ids (and the file each one becomes) are listed in
//! `ScaffoldService::render_plan`; adding a template means adding a row
//! here and a plan entry there.

use exforge_core::application::ports::TemplateCatalog;

/// Production catalog over [`TEMPLATES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for EmbeddedCatalog {
    fn source(&self, id: &str) -> Option<&'static str> {
        TEMPLATES
            .iter()
            .find(|(name, _)| *name == id)
            .map(|(_, source)| *source)
    }
}

/// Every template that ships with exforge.
pub static TEMPLATES: &[(&str, &str)] = &[
    ("readme", README),
    ("gitignore", GITIGNORE),
    ("gitmodules", GITMODULES),
    ("makefile", MAKEFILE),
    ("mix-exs", MIX_EXS),
    ("config-exs", CONFIG_EXS),
    ("app-module", APP_MODULE),
    ("test-helper", TEST_HELPER),
    ("smoke-test", SMOKE_TEST),
];

const README: &str = r#"# {{module}}

**TODO: Add description**

## Installation

  1. Run `mix deps.get` to fetch dependencies
  2. Run `mix test` to make sure everything works
{{#umbrella}}

## Repository layout

Auxiliary repositories are tracked as submodules under `{{apps_dir}}/`:

  * `{{apps_dir}}/{{ui_dir}}` - user interface ({{git_ui_url}})
  * `{{apps_dir}}/{{proto_dir}}` - protocol definitions ({{git_proto_url}})

Run `make all` after cloning to fetch dependencies and compile everything.
{{/umbrella}}"#;

const GITIGNORE: &str = r#"/_build
/cover
/deps
erl_crash.dump
*.ez
{{#umbrella}}/{{apps_dir}}/{{ui_dir}}/
/{{apps_dir}}/{{proto_dir}}/
{{/umbrella}}"#;

const GITMODULES: &str = r#"[submodule "{{apps_dir}}/{{ui_dir}}"]
	path = {{apps_dir}}/{{ui_dir}}
	url = {{git_ui_url}}
[submodule "{{apps_dir}}/{{proto_dir}}"]
	path = {{apps_dir}}/{{proto_dir}}
	url = {{git_proto_url}}
"#;

const MAKEFILE: &str = r#"all:
	mix deps.get
	mix compile

rebuild:
	mix clean
	mix deps.clean --all
	$(MAKE) all

.PHONY: all rebuild
"#;

const MIX_EXS: &str = r#"defmodule {{module}}.Mixfile do
  use Mix.Project

  def project do
    [app: :{{app}},
     version: "0.0.1",
     elixir: "~> {{version}}",
     build_embedded: Mix.env == :prod,
     start_permanent: Mix.env == :prod,
     deps: deps()]
  end

  # Configuration for the OTP application
  def application do
    [applications: [:logger{{#umbrella}}, :cowboy, :exprotobuf{{/umbrella}}],
     mod: { {{module}}, []}]
  end

  defp deps do
    [{{#umbrella}}{:cowboy, "~> 1.0"},
     {:exprotobuf, "~> 1.2"}{{/umbrella}}]
  end
end
"#;

const CONFIG_EXS: &str = r#"# This file is responsible for configuring your application
# and its dependencies with the aid of the Mix.Config module.
use Mix.Config

# You can configure your application as:
#
#     config :{{app}}, key: :value
#
# And access this configuration in your application as:
#
#     Application.get_env(:{{app}}, :key)
#
# Or configure a 3rd-party app:
#
#     config :logger, level: :info
#
"#;

const APP_MODULE: &str = r#"defmodule {{module}} do
  use Application

  # See http://elixir-lang.org/docs/stable/elixir/Application.html
  # for more information on OTP Applications
  def start(_type, _args) do
    import Supervisor.Spec, warn: false

    children = [
      # Define workers and child supervisors to be supervised
      # worker({{module}}.Worker, [arg1, arg2, arg3]),
    ]

    # See http://elixir-lang.org/docs/stable/elixir/Supervisor.html
    # for other strategies and supported options
    opts = [strategy: :one_for_one, name: {{module}}.Supervisor]
    Supervisor.start_link(children, opts)
  end
end
"#;

const TEST_HELPER: &str = "ExUnit.start()\n";

const SMOKE_TEST: &str = r#"defmodule {{module}}Test do
  use ExUnit.Case
  doctest {{module}}

  test "the truth" do
    assert 1 + 1 == 2
  end
{{#umbrella}}

  test "protocol definitions compile" do
    proto_dir = Path.join("{{apps_dir}}", "{{proto_dir}}")
    out_dir = Path.join("test", "generated")
    File.mkdir_p!(out_dir)

    protos = Path.wildcard(Path.join(proto_dir, "**/*.proto"))

    {output, status} =
      System.cmd("protoc", ["--proto_path=#{proto_dir}", "--elixir_out=#{out_dir}" | protos],
        stderr_to_stdout: true)

    assert status == 0, "protoc failed: #{output}"
    File.rm_rf!(out_dir)
  end
{{/umbrella}}end
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_knows_every_shipped_template() {
        let catalog = EmbeddedCatalog::new();
        for id in [
            "readme",
            "gitignore",
            "gitmodules",
            "makefile",
            "mix-exs",
            "config-exs",
            "app-module",
            "test-helper",
            "smoke-test",
        ] {
            assert!(catalog.source(id).is_some(), "missing template '{id}'");
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(EmbeddedCatalog::new().source("nonexistent").is_none());
    }

    #[test]
    fn makefile_recipes_use_tabs() {
        // make silently breaks on space-indented recipes.
        for line in MAKEFILE.lines() {
            if line.starts_with("mix") || line.starts_with("$(MAKE)") {
                panic!("recipe line lost its leading tab: {line:?}");
            }
        }
        assert!(MAKEFILE.contains("\tmix deps.get"));
    }

    #[test]
    fn app_module_references_the_supervisor() {
        assert!(APP_MODULE.contains("name: {{module}}.Supervisor"));
    }
}

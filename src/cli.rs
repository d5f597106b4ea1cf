//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::RawOptions;

/// extpack - repackage installed CMS extensions
#[derive(Parser, Debug)]
#[command(
    name = "extpack",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Repackage installed CMS extensions into installable packages",
    long_about = "extpack reads an installed extension's manifest and copies every file it \
                  declares from the site into a staging directory, laid out the way the \
                  extension installer expects.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  extpack package --type component --name hello --root /var/www/site\n    \
                  extpack package --type plugin --name cache --group system\n    \
                  extpack plan --type module --name login --group admin\n    \
                  extpack package hello cache   (targets from extpack.yaml)"
)]
pub struct Cli {
    /// Task file (defaults to ./extpack.yaml when present)
    #[arg(long, short = 'c', global = true, env = "EXTPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors; no progress bar
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy an extension's files into the staging directory
    Package(PackageArgs),

    /// Print the copy mapping without copying anything
    Plan(PlanArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Extension selection and site path overrides shared by package and plan
#[derive(Args, Debug, Default, Clone)]
pub struct ExtensionArgs {
    /// Targets from the task file (default: all targets, unless --type/--name is given)
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Extension type: component, module, plugin, template, language, file, library, package
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub kind: Option<String>,

    /// Extension name (without com_/mod_ prefix)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Plugin group, or "admin" for administrator modules, templates and languages
    #[arg(long, short = 'g')]
    pub group: Option<String>,

    /// Site root [default: .]
    #[arg(long, short = 'r', value_name = "DIR")]
    pub root: Option<String>,

    /// Staging directory [default: ./dest]
    #[arg(long, short = 'd', value_name = "DIR")]
    pub destination: Option<String>,

    /// Administrator directory [default: <root>/administrator]
    #[arg(long, value_name = "DIR")]
    pub administrator: Option<String>,

    /// Libraries directory [default: <root>/libraries]
    #[arg(long, value_name = "DIR")]
    pub libraries: Option<String>,

    /// Plugins directory [default: <root>/plugins]
    #[arg(long, value_name = "DIR")]
    pub plugins: Option<String>,

    /// Site templates directory [default: <root>/templates]
    #[arg(long, value_name = "DIR")]
    pub templates: Option<String>,

    /// Installed manifests directory [default: <root>/manifests]
    #[arg(long, value_name = "DIR")]
    pub manifests: Option<String>,

    /// Administrator templates directory [default: <administrator>/templates]
    #[arg(long, value_name = "DIR")]
    pub admin_templates: Option<String>,
}

impl ExtensionArgs {
    /// Command-line flags as the highest-precedence option layer
    pub fn to_options(&self) -> RawOptions {
        RawOptions {
            root: self.root.clone(),
            destination: self.destination.clone(),
            kind: self.kind.clone(),
            name: self.name.clone(),
            group: self.group.clone(),
            administrator: self.administrator.clone(),
            libraries: self.libraries.clone(),
            plugins: self.plugins.clone(),
            templates: self.templates.clone(),
            manifests: self.manifests.clone(),
            admin_templates: self.admin_templates.clone(),
        }
    }
}

/// Arguments for the package command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Package a component:\n    extpack package -t component -n hello -r /var/www/site\n\n\
                  Package a system plugin into ./build:\n    extpack package -t plugin -n cache -g system -d ./build\n\n\
                  Package every target in extpack.yaml:\n    extpack package")]
pub struct PackageArgs {
    #[command(flatten)]
    pub extension: ExtensionArgs,
}

/// Arguments for the plan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show what would be copied:\n    extpack plan -t module -n login\n\n\
                  Machine-readable mapping:\n    extpack plan -t template -n cassiopeia --json")]
pub struct PlanArgs {
    #[command(flatten)]
    pub extension: ExtensionArgs,

    /// Print the mapping as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    extpack completions --shell bash > ~/.bash_completion.d/extpack\n\n\
                  Generate zsh completions:\n    extpack completions --shell zsh > ~/.zfunc/_extpack")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: Shell,
}

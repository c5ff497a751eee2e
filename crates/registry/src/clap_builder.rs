use clap::{Arg, ArgAction, Command as ClapCommand, builder::PossibleValuesParser};

use crate::NavRegistry;

/// Builds the complete clap command tree for the `docnav` binary from the
/// registry's contents.
///
/// The `list` subcommand advertises the registry's group titles as the
/// valid values of its positional argument, so shell help and error
/// messages always reflect the sidebar actually loaded.
///
/// # Arguments
///
/// * `registry` - The registry containing all sidebar groups
///
/// # Returns
///
/// A configured ClapCommand that can be used for argument parsing and help
/// generation.
///
/// # Examples
///
/// ```rust
/// use docnav_registry::{NavRegistry, build_clap};
///
/// let registry = NavRegistry::builtin();
/// let _clap_command = build_clap(&registry);
/// ```
pub fn build_clap(registry: &NavRegistry) -> ClapCommand {
    let group_titles: Vec<String> = registry.groups.iter().map(|group| group.text.clone()).collect();

    create_root_command()
        .subcommand(
            ClapCommand::new("emit")
                .about("Emit the sidebar in the site generator's JSON schema")
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .help("Pretty-print the JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("PATH")
                        .help("Write the JSON to a file instead of stdout")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(ClapCommand::new("check").about("Validate sidebar invariants"))
        .subcommand(
            ClapCommand::new("list")
                .about("List sidebar entries, one per line")
                .arg(
                    Arg::new("group")
                        .help("Restrict output to one group title")
                        .action(ArgAction::Set)
                        .value_parser(PossibleValuesParser::new(group_titles)),
                ),
        )
}

/// Creates the root command with global flags.
fn create_root_command() -> ClapCommand {
    ClapCommand::new("docnav")
        .about("Documentation-site sidebar registry")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
}

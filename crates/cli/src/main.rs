use anyhow::{Context, Result};
use clap::ArgMatches;
use docnav_registry::{NavRegistry, validate_sidebar};
use docnav_types::SidebarGroup;
use tracing::Level;

fn main() -> Result<()> {
    init_tracing();
    let registry = NavRegistry::from_config()?;
    let cli = docnav_registry::build_clap(&registry);
    let matches = cli.get_matches();

    let (name, sub) = matches.subcommand().context("expected a subcommand")?;
    match name {
        "emit" => run_emit(&registry, sub),
        "check" => run_check(&registry),
        "list" => run_list(&registry, sub),
        other => anyhow::bail!("unknown subcommand: {}", other),
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}

/// Prints the sidebar in the site generator's JSON schema, or writes it to
/// the path given via `--out`.
fn run_emit(registry: &NavRegistry, matches: &ArgMatches) -> Result<()> {
    let json = if matches.get_flag("pretty") {
        serde_json::to_string_pretty(&registry.groups)?
    } else {
        serde_json::to_string(&registry.groups)?
    };

    if let Some(path) = matches.get_one::<String>("out") {
        std::fs::write(path, &json).with_context(|| format!("write sidebar JSON to {}", path))?;
        tracing::info!("Wrote sidebar JSON to {}", path);
    } else {
        println!("{}", json);
    }
    Ok(())
}

/// Runs the invariant checks over the loaded sidebar; the first violation
/// aborts with a non-zero exit.
fn run_check(registry: &NavRegistry) -> Result<()> {
    validate_sidebar(&registry.groups)?;
    println!(
        "sidebar OK: {} groups, {} entries",
        registry.groups.len(),
        registry.len()
    );
    Ok(())
}

/// Lists sidebar entries, optionally scoped to one group title.
fn run_list(registry: &NavRegistry, matches: &ArgMatches) -> Result<()> {
    let scoped: Vec<&SidebarGroup> = match matches.get_one::<String>("group") {
        Some(title) => vec![
            registry
                .group(title)
                .with_context(|| format!("no sidebar group titled {}", title))?,
        ],
        None => registry.groups.iter().collect(),
    };

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&scoped)?);
        return Ok(());
    }

    for group in scoped {
        for item in &group.items {
            println!("{}\t{}", item.text, item.link);
        }
    }
    Ok(())
}

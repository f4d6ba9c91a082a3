use anyhow::Result;
use clap::Parser;

use release_tiers::hosting::GhHost;
use release_tiers::version::derive_tiers;
use release_tiers::{assets, config, git_ops, publisher, refname, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-tiers",
    about = "Publish tiered GitHub releases from a component/semver git tag"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Reference name, overrides the environment")]
    ref_name: Option<String>,

    #[arg(long, help = "Preview what would happen without creating releases")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-tiers {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Resolve the triggering reference name: explicit flag wins, then env
    let raw_ref = match args.ref_name {
        Some(name) => name,
        None => match refname::from_env(&config.input.env_var) {
            Ok(name) => name,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },
    };

    let ref_name = match refname::RefName::parse(&raw_ref) {
        Ok(parsed) => parsed,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let tiers = match derive_tiers(&ref_name.version) {
        Ok(tiers) => tiers,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Collect the shared asset set from the component directory
    let asset_dir = config
        .assets
        .dir
        .clone()
        .unwrap_or_else(|| ref_name.component.clone());
    let (asset_list, warnings) = match assets::collect_assets(&asset_dir) {
        Ok(collected) => collected,
        Err(e) => {
            ui::display_error(&format!("Failed to list assets in '{}': {}", asset_dir, e));
            std::process::exit(1);
        }
    };
    for warning in &warnings {
        ui::display_warning(warning);
    }

    // Resolve the commit the tag points to
    ui::display_status(&format!("Resolving commit for: {}", raw_ref));
    let commit = match git_ops::resolve_commit(&raw_ref) {
        Ok(hash) => hash,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.dry_run {
        let tags: Vec<(String, bool)> = tiers
            .tiers()
            .iter()
            .filter(|(_, deletable)| !*deletable || config.publish.aliases)
            .map(|(derived, deletable)| (ref_name.tag_for(derived), *deletable))
            .collect();
        ui::display_publish_plan(&tags, &commit, &asset_list);
        return Ok(());
    }

    if let Err(e) = publisher::publish(
        &GhHost,
        &ref_name,
        &tiers,
        &commit,
        &asset_list,
        config.publish.aliases,
    ) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    ui::display_success(&format!(
        "Published releases for {} at {}",
        raw_ref,
        &commit[..7.min(commit.len())]
    ));

    Ok(())
}

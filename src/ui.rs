use crate::warning::PublishWarning;
use std::path::PathBuf;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_warning(warning: &PublishWarning) {
    eprintln!("\x1b[33m⚠ Warning:\x1b[0m {}", warning);
}

/// Shows the full publish plan without touching the hosting tool.
/// Used by --dry-run.
pub fn display_publish_plan(tags: &[(String, bool)], commit: &str, assets: &[PathBuf]) {
    println!("\n\x1b[1mPublish plan (dry run):\x1b[0m");
    println!("  Target commit: \x1b[32m{}\x1b[0m", commit);

    println!("  Releases:");
    for (tag, deletable) in tags {
        if *deletable {
            println!("    {} \x1b[33m(delete + recreate)\x1b[0m", tag);
        } else {
            println!("    {} \x1b[32m(create)\x1b[0m", tag);
        }
    }

    if assets.is_empty() {
        println!("  Assets: none");
    } else {
        println!("  Assets:");
        for asset in assets {
            println!("    {}", asset.display());
        }
    }
}

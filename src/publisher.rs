use crate::error::Result;
use crate::hosting::ReleaseHost;
use crate::refname::RefName;
use crate::ui;
use crate::version::TierSet;
use crate::warning::PublishWarning;
use std::path::PathBuf;

/// Publishes the three tiered releases for one reference.
///
/// Iterates the derived versions in fixed order (major, major.minor, exact).
/// For each tier:
///
/// 1. Floating aliases are pre-deleted so their tag can be repointed at the
///    new commit. The hosting tool has no atomic "move release" operation,
///    so delete-and-recreate is the only way to update an alias. Delete
///    failure is tolerated unconditionally and only logged, since the alias
///    usually does not exist yet.
/// 2. The release is created at the tag, targeting `commit`, with every
///    asset attached. Creation failure aborts the run immediately; releases
///    already created are not rolled back.
pub fn publish(
    host: &dyn ReleaseHost,
    ref_name: &RefName,
    tiers: &TierSet,
    commit: &str,
    assets: &[PathBuf],
    aliases: bool,
) -> Result<()> {
    for (derived, deletable) in tiers.tiers() {
        if deletable && !aliases {
            continue;
        }

        let tag = ref_name.tag_for(derived);

        if deletable {
            if let Err(e) = host.delete_release(&tag) {
                ui::display_warning(&PublishWarning::AliasDeleteFailed {
                    tag: tag.clone(),
                    reason: e.to_string(),
                });
            }
        }

        host.create_release(&tag, commit, assets)?;

        ui::display_success(&format!("Created release: {}", tag));
    }

    Ok(())
}

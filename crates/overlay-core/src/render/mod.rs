//! Re-rendering of the active collection onto the character
//!
//! A render pass clears every decoration on the character and re-applies the
//! active overlays in collection order, each one `apply_count` times.

pub mod decoration;
pub mod hash;

use serde::{Deserialize, Serialize};

use crate::catalog::OverlayCatalog;
use crate::errors::Result;
use crate::model::{CharacterHandle, OverlayEntry, OverlayId};

pub use decoration::{DecorationKey, DecorationRenderer, RecordingRenderer, RenderCall};
pub use hash::joaat;

/// What a render pass does when an active overlay has no catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPolicy {
    /// Stop the pass at the first missing entry. Entries after it stay unpainted
    /// until the next pass. This is the compatible behavior.
    #[default]
    FailFast,
    /// Log the missing entry and keep rendering the rest (fixed mode)
    SkipMissing,
}

/// Outcome of one render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Entries whose decorations were applied
    pub rendered: usize,
    /// Total `apply_decoration` calls issued
    pub decorations: usize,
    /// Entry that stopped a fail-fast pass
    pub aborted_at: Option<OverlayId>,
    /// Entries passed over in skip-missing mode
    pub skipped: Vec<OverlayId>,
}

impl RenderReport {
    /// True when every active entry was painted
    pub fn is_complete(&self) -> bool {
        self.aborted_at.is_none() && self.skipped.is_empty()
    }
}

/// Clear `character` and paint `entries` in order
///
/// A catalog miss is not an error: it ends the pass (`FailFast`) or is
/// skipped (`SkipMissing`), and either way shows up in the report.
///
/// # Errors
///
/// Propagates renderer failures; the pass stops at the failing call.
pub fn render_overlays<C, R>(
    entries: &[OverlayEntry],
    catalog: &C,
    renderer: &mut R,
    character: CharacterHandle,
    policy: RenderPolicy,
) -> Result<RenderReport>
where
    C: OverlayCatalog + ?Sized,
    R: DecorationRenderer + ?Sized,
{
    renderer.clear_decorations(character)?;

    let mut report = RenderReport::default();
    for entry in entries {
        let Some(info) = catalog.lookup(entry.id) else {
            match policy {
                RenderPolicy::FailFast => {
                    tracing::warn!(
                        overlay_id = entry.id.get(),
                        "catalog entry missing, aborting render pass"
                    );
                    report.aborted_at = Some(entry.id);
                    return Ok(report);
                }
                RenderPolicy::SkipMissing => {
                    tracing::warn!(
                        overlay_id = entry.id.get(),
                        "catalog entry missing, skipping"
                    );
                    report.skipped.push(entry.id);
                    continue;
                }
            }
        };

        let key = DecorationKey::for_entry(info);
        for _ in 0..entry.apply_count.get() {
            renderer.apply_decoration(character, key)?;
            report.decorations += 1;
        }
        report.rendered += 1;
    }

    tracing::debug!(
        rendered = report.rendered,
        decorations = report.decorations,
        "render pass complete"
    );
    Ok(report)
}

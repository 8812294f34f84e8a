//! Tier-bounded asset selection.

use super::model::SelectedAsset;
use crate::capability::PerformanceTier;
use crate::error::ActaError;
use crate::template::{AssetManifest, AssetQuality};

/// Largest quality and file size a tier may download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetCeiling {
    pub max_quality: AssetQuality,
    pub max_size_kb: u32,
}

impl AssetCeiling {
    pub fn for_tier(tier: PerformanceTier) -> Self {
        match tier {
            PerformanceTier::Low => Self {
                max_quality: AssetQuality::Low,
                max_size_kb: 1024,
            },
            PerformanceTier::Medium => Self {
                max_quality: AssetQuality::Medium,
                max_size_kb: 4096,
            },
            PerformanceTier::High => Self {
                max_quality: AssetQuality::High,
                max_size_kb: 16384,
            },
        }
    }
}

/// Picks one variant per logical asset within the tier's ceiling.
///
/// Returns the selection in manifest order and the optimization errors that
/// were recovered from along the way: a missing tier variant falls back to
/// the best lower-quality one, and an asset with nothing under the ceiling
/// is omitted.
pub fn select_assets(
    manifest: &AssetManifest,
    tier: PerformanceTier,
) -> (Vec<SelectedAsset>, Vec<ActaError>) {
    let ceiling = AssetCeiling::for_tier(tier);
    let mut selected = Vec::new();
    let mut recovered = Vec::new();

    for asset_id in manifest.asset_ids() {
        let best = manifest
            .variants_of(asset_id)
            .filter(|v| v.quality <= ceiling.max_quality && v.size_kb <= ceiling.max_size_kb)
            .max_by_key(|v| (v.quality, std::cmp::Reverse(v.size_kb)));

        match best {
            Some(variant) => {
                let degraded = variant.quality < ceiling.max_quality;
                if degraded {
                    recovered.push(ActaError::asset_optimization(
                        asset_id,
                        format!(
                            "no usable {} variant for {} tier, using {}",
                            ceiling.max_quality, tier, variant.quality
                        ),
                    ));
                }
                selected.push(SelectedAsset {
                    asset_id: variant.asset_id.clone(),
                    quality: variant.quality,
                    size_kb: variant.size_kb,
                    uri: variant.uri.clone(),
                    degraded,
                });
            }
            None => recovered.push(ActaError::asset_optimization(
                asset_id,
                format!(
                    "no variant within {} KB at or below {} quality, omitted",
                    ceiling.max_size_kb, ceiling.max_quality
                ),
            )),
        }
    }

    (selected, recovered)
}

//! Mapping from a class index to its name and advisory text.

use serde::Serialize;
use tracing::warn;

use crate::advisory::{AdvisoryTable, FALLBACK_ADVISORY};
use crate::labels::LabelSet;

/// Class name reported for indices outside the label set.
pub const UNKNOWN_CLASS: &str = "Unknown";

/// Result of resolving a class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub class_name: &'static str,
    pub advisory: &'static str,
    /// False when the index fell outside the label set.
    pub known: bool,
}

/// Resolve `class_index` against the PlantVillage label set.
///
/// Never fails: out-of-range indices (negative included) resolve to
/// [`UNKNOWN_CLASS`] with the fallback advisory.
pub fn resolve(class_index: i64) -> Resolution {
    resolve_in(&LabelSet::plant_village(), AdvisoryTable::global(), class_index)
}

pub fn resolve_in(labels: &LabelSet, advisories: &AdvisoryTable, class_index: i64) -> Resolution {
    match labels.get(class_index) {
        Some(class_name) => Resolution {
            class_name,
            advisory: advisories.get_or_fallback(class_name),
            known: true,
        },
        None => {
            warn!(
                class_index,
                classes = labels.len(),
                "class index outside label set"
            );
            Resolution {
                class_name: UNKNOWN_CLASS,
                advisory: FALLBACK_ADVISORY,
                known: false,
            }
        }
    }
}

/// Outcome of one upload, discarded once rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub class_index: i64,
    pub class_name: &'static str,
    pub advisory: &'static str,
    /// Raw score of the winning class (logit or probability, per artifact).
    pub score: f32,
    pub known: bool,
}

impl PredictionResult {
    pub fn from_index(class_index: i64, score: f32) -> Self {
        let resolution = resolve(class_index);
        Self {
            class_index,
            class_name: resolution.class_name,
            advisory: resolution.advisory,
            score,
            known: resolution.known,
        }
    }
}

use std::fmt;
use std::fmt::{Display, Formatter};

use bincode::{Decode, Encode};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::chemistry::adduct::ppm_difference;
use crate::chemistry::adducts::{AdductTable, IonizationMode};
use crate::data::peak::PeakCluster;

/// Adducts whose shift magnitudes differ by less than this are treated as
/// indistinguishable and skipped, keeping the ppm metric well-defined.
const MIN_SHIFT_DIFFERENCE: f64 = 1e-6;

/// Outcome of adduct inference over a peak cluster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub enum InferredAdduct {
    /// An adduct pair explained the observed mass offset within tolerance.
    Matched(String),
    /// Nothing matched; the mode's default adduct was assumed.
    Fallback(String),
    /// The cluster was too small to infer anything.
    Undetermined,
}

impl InferredAdduct {
    /// The adduct label to annotate with, if any was determined.
    pub fn label(&self) -> Option<&str> {
        match self {
            InferredAdduct::Matched(name) => Some(name),
            InferredAdduct::Fallback(name) => Some(name),
            InferredAdduct::Undetermined => None,
        }
    }
}

impl Display for InferredAdduct {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InferredAdduct::Matched(name) => write!(f, "Matched({})", name),
            InferredAdduct::Fallback(name) => write!(f, "Fallback({})", name),
            InferredAdduct::Undetermined => write!(f, "Undetermined"),
        }
    }
}

/// Infers the adduct that best explains the mass offsets within a cluster of
/// co-eluting peaks.
///
/// The base peak is the cluster member closest to `reference_mz`, ties going
/// to the lowest m/z. Every other peak's offset from the base peak is compared
/// against the magnitude difference of every ordered pair of distinct table
/// adducts, in table order, and the globally best ppm match within
/// `ppm_tolerance` wins; later candidates must be strictly better to displace
/// an earlier one. The peak at higher m/z is assigned the adduct with the
/// larger shift magnitude.
///
/// Clusters with fewer than two peaks are [`InferredAdduct::Undetermined`];
/// a search with no match within tolerance falls back to `[M+H]+` in positive
/// mode and `[M-H]-` in negative mode.
pub fn infer_adduct(
    cluster: &PeakCluster,
    reference_mz: f64,
    mode: IonizationMode,
    table: &AdductTable,
    ppm_tolerance: u32,
) -> InferredAdduct {
    if cluster.len() < 2 {
        return InferredAdduct::Undetermined;
    }

    let peaks = cluster.peaks();

    // strict < keeps the first of equally distant peaks in ascending m/z order
    let mut base_index = 0;
    let mut base_distance = (peaks[0].mz - reference_mz).abs();
    for (index, peak) in peaks.iter().enumerate().skip(1) {
        let distance = (peak.mz - reference_mz).abs();
        if distance < base_distance {
            base_index = index;
            base_distance = distance;
        }
    }
    let base_peak = peaks[base_index];

    let mut best_adduct: Option<&str> = None;
    let mut best_ppm = u32::MAX;

    for (index, other) in peaks.iter().enumerate() {
        if index == base_index {
            continue;
        }
        let delta_mz = (base_peak.mz - other.mz).abs();

        for ((name1, value1), (name2, value2)) in table.iter().cartesian_product(table.iter()) {
            if name1 == name2 {
                continue;
            }
            let shift1 = value1.abs();
            let shift2 = value2.abs();

            let expected_diff = (shift1 - shift2).abs();
            if expected_diff < MIN_SHIFT_DIFFERENCE {
                continue;
            }

            let ppm = match ppm_difference(delta_mz, expected_diff) {
                Ok(ppm) => ppm,
                Err(_) => continue,
            };

            if ppm <= ppm_tolerance && ppm < best_ppm {
                // the heavier peak carries the heavier adduct
                let candidate = if base_peak.mz > other.mz {
                    if shift1 > shift2 {
                        name1
                    } else {
                        name2
                    }
                } else if shift1 < shift2 {
                    name1
                } else {
                    name2
                };
                best_ppm = ppm;
                best_adduct = Some(candidate);
            }
        }
    }

    match best_adduct {
        Some(name) => InferredAdduct::Matched(name.to_string()),
        None => match mode {
            IonizationMode::Positive => InferredAdduct::Fallback("[M+H]+".to_string()),
            IonizationMode::Negative => InferredAdduct::Fallback("[M-H]-".to_string()),
        },
    }
}

use std::fmt;
use std::fmt::{Display, Formatter};

use bincode::{Decode, Encode};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A single centroided signal, an (m/z, intensity) pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Peak {
    pub mz: f64,
    pub intensity: f64,
}

impl Peak {
    pub fn new(mz: f64, intensity: f64) -> Self {
        Peak { mz, intensity }
    }
}

impl Display for Peak {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Peak(mz={:.4}, intensity={:.1})", self.mz, self.intensity)
    }
}

/// A group of co-eluting peaks believed to originate from one species.
///
/// Peaks are held sorted ascending by m/z; peaks sharing the exact same m/z
/// collapse to the first one seen. Ascending order is the tie-break order for
/// base-peak selection during adduct inference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct PeakCluster {
    peaks: Vec<Peak>,
}

impl PeakCluster {
    /// Builds a cluster from peaks in any order.
    pub fn new(peaks: Vec<Peak>) -> Self {
        let mut peaks = peaks;
        peaks.sort_by_key(|peak| OrderedFloat(peak.mz));
        peaks.dedup_by_key(|peak| OrderedFloat(peak.mz));
        PeakCluster { peaks }
    }

    /// Peaks in ascending m/z order.
    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Peak> {
        self.peaks.iter()
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_sorts_ascending_by_mz() {
        let cluster = PeakCluster::new(vec![
            Peak::new(522.6, 500.0),
            Peak::new(500.3, 1000.0),
            Peak::new(760.6, 200.0),
        ]);
        let mzs: Vec<f64> = cluster.iter().map(|peak| peak.mz).collect();
        assert_eq!(mzs, vec![500.3, 522.6, 760.6]);
    }

    #[test]
    fn test_cluster_collapses_duplicate_mz() {
        let cluster = PeakCluster::new(vec![
            Peak::new(500.3, 1000.0),
            Peak::new(500.3, 900.0),
            Peak::new(522.6, 500.0),
        ]);
        assert_eq!(cluster.len(), 2);
        assert_eq!(cluster.peaks()[0].intensity, 1000.0);
    }

    #[test]
    fn test_empty_cluster() {
        let cluster = PeakCluster::new(vec![]);
        assert!(cluster.is_empty());
        assert_eq!(cluster.len(), 0);
    }
}

use std::fmt;
use std::fmt::{Display, Formatter};

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::algorithm::adduct::{infer_adduct, InferredAdduct};
use crate::chemistry::adducts::{AdductTable, IonizationMode};
use crate::data::lipid::Lipid;
use crate::data::peak::PeakCluster;

/// Caller-owned running score over applied annotation rules, a sum plus the
/// number of rules applied, normalized to [-1, 1] on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct ScoreAccumulator {
    score: f64,
    applied: u32,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        ScoreAccumulator::default()
    }

    /// Applies one scoring rule's contribution.
    pub fn add(&mut self, delta: f64) {
        self.score += delta;
        self.applied += 1;
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn applied(&self) -> u32 {
        self.applied
    }

    /// Mean contribution clamped to [-1, 1], or 0 when nothing was applied.
    pub fn normalized(&self) -> f64 {
        if self.applied == 0 {
            return 0.0;
        }
        (self.score / self.applied as f64).clamp(-1.0, 1.0)
    }
}

/// An annotation hypothesis over a lipid: a measured signal, its co-eluting
/// peaks, and the adduct assigned to explain them.
///
/// Equality considers the lipid, m/z and retention time only.
#[derive(Clone, Debug, Serialize, Deserialize, Encode, Decode)]
pub struct Annotation {
    pub lipid: Lipid,
    pub mz: f64,
    pub intensity: f64,
    pub rt_min: f64,
    pub ionization_mode: IonizationMode,
    pub grouped_signals: PeakCluster,
    adduct: Option<String>,
}

impl Annotation {
    pub fn new(
        lipid: Lipid,
        mz: f64,
        intensity: f64,
        rt_min: f64,
        ionization_mode: IonizationMode,
        grouped_signals: PeakCluster,
    ) -> Self {
        Annotation {
            lipid,
            mz,
            intensity,
            rt_min,
            ionization_mode,
            grouped_signals,
            adduct: None,
        }
    }

    /// The assigned adduct label, once detected or set.
    pub fn adduct(&self) -> Option<&str> {
        self.adduct.as_deref()
    }

    pub fn set_adduct(&mut self, adduct: &str) {
        self.adduct = Some(adduct.to_string());
    }

    /// Runs adduct inference over the grouped signals against this
    /// annotation's m/z, using the built-in table for its ionization mode,
    /// and stores the resulting label. An undetermined outcome clears any
    /// previously assigned adduct.
    pub fn detect_adduct(&mut self, ppm_tolerance: u32) -> InferredAdduct {
        let table = AdductTable::for_mode(self.ionization_mode);
        let result = infer_adduct(
            &self.grouped_signals,
            self.mz,
            self.ionization_mode,
            &table,
            ppm_tolerance,
        );
        self.adduct = result.label().map(String::from);
        result
    }
}

impl PartialEq for Annotation {
    fn eq(&self, other: &Self) -> bool {
        self.mz == other.mz && self.rt_min == other.rt_min && self.lipid == other.lipid
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Annotation({}, mz={:.4}, RT={:.2}, adduct={}, intensity={:.1})",
            self.lipid.name,
            self.mz,
            self.rt_min,
            self.adduct.as_deref().unwrap_or("unknown"),
            self.intensity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::lipid::LipidClass;
    use crate::data::peak::Peak;

    fn pc_34_1() -> Lipid {
        Lipid::new("PC 34:1", LipidClass::PC, 34, 1)
    }

    #[test]
    fn test_detect_adduct_assigns_protonated_species() {
        // protonated and sodiated signals of the same neutral mass
        let cluster = PeakCluster::new(vec![
            Peak::new(760.585, 1500.0),
            Peak::new(782.566942, 300.0),
        ]);
        let mut annotation = Annotation::new(
            pc_34_1(),
            760.585,
            1500.0,
            12.5,
            IonizationMode::Positive,
            cluster,
        );
        let result = annotation.detect_adduct(10);
        assert_eq!(result, InferredAdduct::Matched("[M+H]+".to_string()));
        assert_eq!(annotation.adduct(), Some("[M+H]+"));
    }

    #[test]
    fn test_detect_adduct_clears_label_when_undetermined() {
        let cluster = PeakCluster::new(vec![Peak::new(760.585, 1500.0)]);
        let mut annotation = Annotation::new(
            pc_34_1(),
            760.585,
            1500.0,
            12.5,
            IonizationMode::Positive,
            cluster,
        );
        annotation.set_adduct("[M+Na]+");
        let result = annotation.detect_adduct(10);
        assert_eq!(result, InferredAdduct::Undetermined);
        assert_eq!(annotation.adduct(), None);
    }

    #[test]
    fn test_detect_adduct_negative_mode_fallback() {
        let cluster = PeakCluster::new(vec![Peak::new(759.578, 900.0), Peak::new(764.578, 100.0)]);
        let mut annotation = Annotation::new(
            pc_34_1(),
            759.578,
            900.0,
            12.5,
            IonizationMode::Negative,
            cluster,
        );
        let result = annotation.detect_adduct(10);
        assert_eq!(result, InferredAdduct::Fallback("[M-H]-".to_string()));
        assert_eq!(annotation.adduct(), Some("[M-H]-"));
    }

    #[test]
    fn test_equality_ignores_intensity_and_adduct() {
        let a = Annotation::new(
            pc_34_1(),
            760.585,
            1500.0,
            12.5,
            IonizationMode::Positive,
            PeakCluster::new(vec![]),
        );
        let mut b = Annotation::new(
            pc_34_1(),
            760.585,
            900.0,
            12.5,
            IonizationMode::Positive,
            PeakCluster::new(vec![Peak::new(760.585, 900.0)]),
        );
        b.set_adduct("[M+Na]+");
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_accumulator_normalizes_and_clamps() {
        let mut scores = ScoreAccumulator::new();
        assert_eq!(scores.normalized(), 0.0);

        scores.add(1.0);
        scores.add(0.5);
        assert_eq!(scores.applied(), 2);
        assert!((scores.normalized() - 0.75).abs() < 1e-12);

        let mut high = ScoreAccumulator::new();
        high.add(3.0);
        assert_eq!(high.normalized(), 1.0);

        let mut low = ScoreAccumulator::new();
        low.add(-5.0);
        assert_eq!(low.normalized(), -1.0);
    }

    #[test]
    fn test_display_format() {
        let mut annotation = Annotation::new(
            pc_34_1(),
            760.585,
            1500.0,
            12.5,
            IonizationMode::Positive,
            PeakCluster::new(vec![]),
        );
        annotation.set_adduct("[M+H]+");
        assert_eq!(
            annotation.to_string(),
            "Annotation(PC 34:1, mz=760.5850, RT=12.50, adduct=[M+H]+, intensity=1500.0)"
        );
    }
}

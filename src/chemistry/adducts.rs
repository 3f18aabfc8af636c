use std::fmt;
use std::fmt::{Display, Formatter};

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::chemistry::constants::{
    MASS_ACETATE_ANION, MASS_AMMONIUM_CATION, MASS_CHLORIDE_ANION, MASS_FORMATE_ANION,
    MASS_POTASSIUM_CATION, MASS_PROTON, MASS_SODIUM_CATION, MASS_WATER,
};

/// Polarity of the ion source, selecting which adduct table applies.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Encode, Decode)]
pub enum IonizationMode {
    Positive,
    Negative,
}

impl Display for IonizationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IonizationMode::Positive => write!(f, "Positive"),
            IonizationMode::Negative => write!(f, "Negative"),
        }
    }
}

/// Mapping from adduct notation to its signed mass shift in Daltons.
///
/// The shift sign follows the convention `neutral mass = mz * charge + shift / multimer`,
/// so proton gain in positive mode carries a negative shift and proton loss in
/// negative mode a positive one. Entries keep insertion order, and iteration
/// visits them in that order; the inference search resolves ppm ties by the
/// first pair visited, so the order is part of the contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct AdductTable {
    entries: Vec<(String, f64)>,
}

impl AdductTable {
    pub fn new() -> Self {
        AdductTable { entries: Vec::new() }
    }

    /// Inserts an adduct at the end of the table, replacing the shift of an
    /// existing entry with the same notation in place.
    pub fn insert(&mut self, adduct: &str, shift: f64) {
        match self.entries.iter_mut().find(|(name, _)| name == adduct) {
            Some((_, existing)) => *existing = shift,
            None => self.entries.push((adduct.to_string(), shift)),
        }
    }

    /// Returns the signed mass shift of an adduct, if present.
    pub fn get(&self, adduct: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == adduct)
            .map(|(_, shift)| *shift)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + Clone + '_ {
        self.entries.iter().map(|(name, shift)| (name.as_str(), *shift))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the built-in table for the given ionization mode.
    pub fn for_mode(mode: IonizationMode) -> AdductTable {
        match mode {
            IonizationMode::Positive => positive_mode_adducts(),
            IonizationMode::Negative => negative_mode_adducts(),
        }
    }
}

/// Built-in positive-mode adducts.
pub fn positive_mode_adducts() -> AdductTable {
    let mut table = AdductTable::new();
    table.insert("[M+H]+", -MASS_PROTON);
    table.insert("[M+2H]2+", -2.0 * MASS_PROTON);
    table.insert("[M+Na]+", -MASS_SODIUM_CATION);
    table.insert("[M+K]+", -MASS_POTASSIUM_CATION);
    table.insert("[M+NH4]+", -MASS_AMMONIUM_CATION);
    table.insert("[M+H-H2O]+", MASS_WATER - MASS_PROTON); // in-source water loss
    table.insert("[2M+H]+", -MASS_PROTON);
    table.insert("[2M+Na]+", -MASS_SODIUM_CATION);
    table
}

/// Built-in negative-mode adducts.
pub fn negative_mode_adducts() -> AdductTable {
    let mut table = AdductTable::new();
    table.insert("[M-H]-", MASS_PROTON);
    table.insert("[M-2H]2-", 2.0 * MASS_PROTON);
    table.insert("[M+Cl]-", -MASS_CHLORIDE_ANION);
    table.insert("[M+HCOO]-", -MASS_FORMATE_ANION);
    table.insert("[M+CH3COO]-", -MASS_ACETATE_ANION);
    table.insert("[M-H-H2O]-", MASS_PROTON + MASS_WATER);
    table.insert("[2M-H]-", MASS_PROTON);
    table
}

/// Looks up an adduct shift in the positive-mode table first, then the
/// negative-mode table, in that fixed order.
pub fn lookup_shift(adduct: &str) -> Option<f64> {
    positive_mode_adducts()
        .get(adduct)
        .or_else(|| negative_mode_adducts().get(adduct))
}

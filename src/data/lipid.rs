use std::fmt;
use std::fmt::{Display, Formatter};

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Head-group class of a lipid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Encode, Decode)]
pub enum LipidClass {
    PC,
    PE,
    PG,
    PI,
    PS,
    PA,
    TG,
    DG,
    MG,
    CE,
    SM,
    Cer,
    Unknown,
}

impl Display for LipidClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LipidClass::PC => write!(f, "PC"),
            LipidClass::PE => write!(f, "PE"),
            LipidClass::PG => write!(f, "PG"),
            LipidClass::PI => write!(f, "PI"),
            LipidClass::PS => write!(f, "PS"),
            LipidClass::PA => write!(f, "PA"),
            LipidClass::TG => write!(f, "TG"),
            LipidClass::DG => write!(f, "DG"),
            LipidClass::MG => write!(f, "MG"),
            LipidClass::CE => write!(f, "CE"),
            LipidClass::SM => write!(f, "SM"),
            LipidClass::Cer => write!(f, "Cer"),
            LipidClass::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A lipid identity hypothesis, value equality only.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Encode, Decode)]
pub struct Lipid {
    pub name: String,
    pub lipid_class: LipidClass,
    pub carbon_count: u32,
    pub double_bond_count: u32,
}

impl Lipid {
    pub fn new(name: &str, lipid_class: LipidClass, carbon_count: u32, double_bond_count: u32) -> Self {
        Lipid {
            name: name.to_string(),
            lipid_class,
            carbon_count,
            double_bond_count,
        }
    }
}

impl Display for Lipid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lipid({}, {} {}:{})",
            self.name, self.lipid_class, self.carbon_count, self.double_bond_count
        )
    }
}

// chemistry module
pub mod chemistry {
    pub mod adduct;
    pub mod adducts;
    pub mod constants;
}

// algorithm module
pub mod algorithm {
    pub mod adduct;
}

// data module
pub mod data {
    pub mod annotation;
    pub mod lipid;
    pub mod peak;
}

pub mod error;

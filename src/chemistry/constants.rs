// Purpose: To store monoisotopic masses used to derive adduct shifts
pub const MASS_PROTON: f64 = 1.007276466621; // Unified atomic mass unit
pub const MASS_ELECTRON: f64 = 0.00054857990946; // Unified atomic mass unit
pub const MASS_WATER: f64 = 18.0105646863; // Unified atomic mass unit

// Common ionization agents, monoisotopic
pub const MASS_SODIUM_CATION: f64 = 22.989218; // Na+
pub const MASS_POTASSIUM_CATION: f64 = 38.963158; // K+
pub const MASS_AMMONIUM_CATION: f64 = 18.033823; // NH4+
pub const MASS_CHLORIDE_ANION: f64 = 34.969402; // Cl-
pub const MASS_FORMATE_ANION: f64 = 44.998201; // HCOO-
pub const MASS_ACETATE_ANION: f64 = 59.013851; // CH3COO-

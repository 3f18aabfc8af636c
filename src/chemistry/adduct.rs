use regex::Regex;

use crate::chemistry::adducts::AdductTable;
use crate::error::AdductError;

/// Extracts the multimer count from an adduct notation, the integer written
/// immediately before the `M` token. A missing digit means a monomer.
///
/// # Arguments
///
/// * `adduct` - adduct notation ([M+H]+, [2M+H]+, [M+2H]2+, etc.)
///
/// # Examples
///
/// ```
/// use lipidms::chemistry::adduct::parse_multimer;
///
/// assert_eq!(parse_multimer("[M+H]+").unwrap(), 1);
/// assert_eq!(parse_multimer("[2M+Na]+").unwrap(), 2);
/// assert!(parse_multimer("[X+Y]+").is_err());
/// ```
pub fn parse_multimer(adduct: &str) -> Result<u32, AdductError> {
    if !adduct.contains('M') {
        return Err(AdductError::InvalidAdductFormat(adduct.to_string()));
    }
    let pattern = Regex::new(r"(\d+)M").unwrap();
    match pattern.captures(adduct) {
        Some(captures) => captures[1]
            .parse::<u32>()
            .map_err(|_| AdductError::InvalidAdductFormat(adduct.to_string())),
        None => Ok(1),
    }
}

/// Extracts the charge magnitude from an adduct notation, the integer written
/// immediately before the trailing polarity sign. A bare sign means a single
/// charge; the sign itself is not part of the result.
///
/// # Examples
///
/// ```
/// use lipidms::chemistry::adduct::parse_charge;
///
/// assert_eq!(parse_charge("[M+H]+"), 1);
/// assert_eq!(parse_charge("[M+2H]2+"), 2);
/// assert_eq!(parse_charge("[M-2H]2-"), 2);
/// ```
pub fn parse_charge(adduct: &str) -> u32 {
    let pattern = Regex::new(r"(\d+)([+-])$").unwrap();
    match pattern.captures(adduct) {
        Some(captures) => captures[1].parse::<u32>().unwrap_or(1),
        None => 1,
    }
}

/// Converts a measured m/z to the neutral monoisotopic mass under an adduct
/// hypothesis: `mass = mz * charge + shift / multimer`.
///
/// # Arguments
///
/// * `mz` - measured mass-to-charge ratio
/// * `adduct` - adduct notation, must be a key of `table`
/// * `table` - adduct table for the active ionization mode
///
/// # Examples
///
/// ```
/// use lipidms::chemistry::adduct::neutral_mass_from_mz;
/// use lipidms::chemistry::adducts::positive_mode_adducts;
///
/// let table = positive_mode_adducts();
/// let mass = neutral_mass_from_mz(760.585, "[M+H]+", &table).unwrap();
/// assert!((mass - 759.577723533379).abs() < 1e-9);
/// ```
pub fn neutral_mass_from_mz(
    mz: f64,
    adduct: &str,
    table: &AdductTable,
) -> Result<f64, AdductError> {
    let shift = table
        .get(adduct)
        .ok_or_else(|| AdductError::UnknownAdduct(adduct.to_string()))?;
    let multimer = parse_multimer(adduct)?;
    let charge = parse_charge(adduct);
    Ok((mz * charge as f64) + shift / multimer as f64)
}

/// Converts a neutral monoisotopic mass back to the m/z expected under an
/// adduct hypothesis: `mz = (mass * multimer - shift) / charge`. Exact inverse
/// of [`neutral_mass_from_mz`] for monomeric adducts.
pub fn mz_from_neutral_mass(
    mass: f64,
    adduct: &str,
    table: &AdductTable,
) -> Result<f64, AdductError> {
    let shift = table
        .get(adduct)
        .ok_or_else(|| AdductError::UnknownAdduct(adduct.to_string()))?;
    let multimer = parse_multimer(adduct)?;
    let charge = parse_charge(adduct);
    Ok(((mass * multimer as f64) - shift) / charge as f64)
}

/// Returns the ppm difference between a measured and a theoretical mass,
/// rounded to the nearest integer. Not symmetric in its arguments, the
/// theoretical mass is the reference.
///
/// # Examples
///
/// ```
/// use lipidms::chemistry::adduct::ppm_difference;
///
/// assert_eq!(ppm_difference(100.0001, 100.0).unwrap(), 1);
/// assert!(ppm_difference(100.0, 0.0).is_err());
/// ```
pub fn ppm_difference(experimental: f64, theoretical: f64) -> Result<u32, AdductError> {
    if theoretical == 0.0 {
        return Err(AdductError::ZeroTheoreticalMass);
    }
    Ok(((experimental - theoretical) * 1e6 / theoretical).abs().round() as u32)
}

/// Converts a ppm tolerance into an absolute mass-difference budget in
/// Daltons, rounded to the nearest integer value.
///
/// # Examples
///
/// ```
/// use lipidms::chemistry::adduct::delta_for_ppm;
///
/// assert_eq!(delta_for_ppm(500000.0, 10), 5.0);
/// ```
pub fn delta_for_ppm(mass: f64, ppm: u32) -> f64 {
    ((mass * ppm as f64) / 1e6).abs().round()
}

//! Angular separation on the celestial sphere
//!
//! Great-circle distance between two equatorial positions, computed with
//! the Vincenty form of the spherical distance, which stays accurate for
//! both very small and near-antipodal separations.
//!
//! Inputs are degrees; the result is arcminutes, the unit the cone-search
//! radius is expressed in.

/// Arcminutes per degree
pub const ARCMIN_PER_DEG: f64 = 60.0;

/// Great-circle separation between two sky positions, in arcminutes.
pub fn angular_separation_arcmin(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    let ra1 = ra1_deg.to_radians();
    let dec1 = dec1_deg.to_radians();
    let ra2 = ra2_deg.to_radians();
    let dec2 = dec2_deg.to_radians();

    let delta_ra = ra2 - ra1;
    let (sin_dra, cos_dra) = delta_ra.sin_cos();
    let (sin_d1, cos_d1) = dec1.sin_cos();
    let (sin_d2, cos_d2) = dec2.sin_cos();

    let num = ((cos_d2 * sin_dra).powi(2)
        + (cos_d1 * sin_d2 - sin_d1 * cos_d2 * cos_dra).powi(2))
    .sqrt();
    let den = sin_d1 * sin_d2 + cos_d1 * cos_d2 * cos_dra;

    num.atan2(den).to_degrees() * ARCMIN_PER_DEG
}

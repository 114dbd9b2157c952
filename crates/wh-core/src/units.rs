// wh-core/src/units.rs
//
// The engine works in fixed oilfield units (bbl/min, in, ft/s, ppg, cP). The uom
// types below exist so the conversion constants can be checked against SI and
// so callers holding typed quantities can convert at the boundary.

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity, Length as UomLength,
    MassDensity as UomMassDensity, Ratio as UomRatio, Time as UomTime, Velocity as UomVelocity,
    Volume as UomVolume, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Ratio = UomRatio;
pub type Time = UomTime;
pub type Velocity = UomVelocity;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

/// Barrels per minute.
#[inline]
pub fn bpm(v: f64) -> VolumeRate {
    use uom::si::{time::minute, volume::barrel};
    Volume::new::<barrel>(v) / Time::new::<minute>(1.0)
}

#[inline]
pub fn inch(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn ft_per_s(v: f64) -> Velocity {
    use uom::si::velocity::foot_per_second;
    Velocity::new::<foot_per_second>(v)
}

/// Pounds per (US) gallon.
#[inline]
pub fn ppg(v: f64) -> Density {
    use uom::si::mass_density::pound_per_gallon;
    Density::new::<pound_per_gallon>(v)
}

/// Centipoise.
#[inline]
pub fn cp(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::centipoise;
    DynVisc::new::<centipoise>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Read a velocity back out in ft/s.
#[inline]
pub fn as_ft_per_s(v: Velocity) -> f64 {
    use uom::si::velocity::foot_per_second;
    v.get::<foot_per_second>()
}

/// Read a length back out in inches.
#[inline]
pub fn as_inch(v: Length) -> f64 {
    use uom::si::length::inch;
    v.get::<inch>()
}

pub mod field {
    //! Fixed conversion factors of the field unit set.

    /// bbl/min through an area given by diameters in inches, to ft/s.
    ///
    /// `v[ft/s] = VELOCITY_FACTOR * 4 * q[bbl/min] / (pi * d[in]^2)`
    pub const VELOCITY_FACTOR: f64 = 13.475;

    /// ppg * ft/s * in / cP, to a dimensionless Reynolds number.
    pub const REYNOLDS_FACTOR: f64 = 927.6866;

    /// Relative mismatch tolerated between the rounded factors above and the
    /// exact SI conversion.
    pub const FACTOR_REL_TOL: f64 = 1e-4;
}

// rk-core/src/units.rs

use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
pub type SpecEntropy = f64;

/// Specific volume [m³/kg].
pub type SpecVolume = f64;

/// Specific work or heat [J/kg].
pub type SpecEnergy = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Pressure in kPa, the unit the cycle is specified in.
#[inline]
pub fn to_kpa(p: Pressure) -> f64 {
    use uom::si::pressure::kilopascal;
    p.get::<kilopascal>()
}

#[inline]
pub fn to_mpa(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}

#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

/// J/kg → kJ/kg (also J/(kg·K) → kJ/(kg·K)).
#[inline]
pub fn to_kilo(v: f64) -> f64 {
    v * 1e-3
}

pub mod constants {
    /// Critical pressure of water, IAPWS.
    pub const P_CRIT_PA: f64 = 22.064e6;
    /// Triple-point pressure of water.
    pub const P_TRIPLE_PA: f64 = 611.657;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        assert_eq!(pa(101_325.0).value, 101_325.0);
        assert_eq!(k(300.0).value, 300.0);
        assert!(constants::P_TRIPLE_PA < constants::P_CRIT_PA);
    }

    #[test]
    fn pressure_scales_agree() {
        assert!((to_kpa(mpa(4.0)) - 4000.0).abs() < 1e-9);
        assert!((kpa(10.0).value - 10_000.0).abs() < 1e-9);
        assert!((to_mpa(kpa(400.0)) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn celsius_round_trip() {
        let t = celsius(400.0);
        assert!((to_kelvin(t) - 673.15).abs() < 1e-9);
        assert!((to_celsius(t) - 400.0).abs() < 1e-9);
    }
}

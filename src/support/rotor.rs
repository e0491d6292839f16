//! Rotor kinematics helpers built on [`uom`].
//!
//! Blade-tip speed relates rotor rotational speed to rotor radius
//! (`v_tip = ω · r`). In [`uom`], angular quantities carry a distinct kind,
//! so `AngularVelocity · Length` does not multiply directly into a
//! `Velocity`. These helpers perform that conversion explicitly, treating
//! the angle as radians.

use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use super::constraint::{Constrained, StrictlyPositive};

/// Blade-tip speed for a rotor of the given diameter spinning at `speed`.
#[must_use]
pub fn tip_speed(speed: AngularVelocity, rotor_diameter: Length) -> Velocity {
    let radius = rotor_diameter.get::<meter>() / 2.0;
    Velocity::new::<meter_per_second>(speed.get::<radian_per_second>() * radius)
}

/// Rotor speed at which the blade tip reaches `tip_limit`.
///
/// This is the usual source of a turbine's maximum rotational speed bound:
/// tip speed is capped (acoustics, leading-edge erosion) and the rotor
/// diameter is fixed, so the speed bound follows.
#[must_use]
pub fn speed_for_tip_limit(
    tip_limit: Velocity,
    rotor_diameter: Constrained<Length, StrictlyPositive>,
) -> AngularVelocity {
    let radius = rotor_diameter.as_ref().get::<meter>() / 2.0;
    AngularVelocity::new::<radian_per_second>(tip_limit.get::<meter_per_second>() / radius)
}

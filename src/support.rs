//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints.
//! - [`rotor`]: Rotor kinematics helpers built on [`uom`].

pub mod constraint;
pub mod rotor;

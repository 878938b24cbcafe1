//! Transform helpers (affine composition, linear interpolation).

pub mod affine;
pub mod linear;

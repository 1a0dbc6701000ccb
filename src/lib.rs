//! Transform math for 3D model format conversion
//!
//! This crate provides the value types a scene-graph converter uses to carry
//! node transforms between formats that store raw matrices and formats that
//! store decomposed translation/rotation/scale.
//!
//! ## Core Type
//!
//! - [`Mat44`] - 4x4 homogeneous transform matrix: composition, inversion,
//!   and translation/rotation/scale decomposition
//!
//! ## Supporting Types
//!
//! - [`Vec3`] - 3D vector
//! - [`Vec4`] - homogeneous 4D vector
//! - [`Mat3`] - 3x3 rotation matrix
//! - [`Quat`] - quaternion rotation
//!
//! All types are plain `Copy` data following the row-vector convention:
//! points transform as `p * M`, translation lives in the matrix's last row,
//! and `A * B` applies A before B.

mod vec3;
mod vec4;
mod mat3;
mod quat;
mod mat44;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat3::Mat3;
pub use quat::Quat;
pub use mat44::Mat44;

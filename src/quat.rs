//! Quaternion rotation type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::{Mat44, Vec3};

/// Unit quaternion representing a 3D rotation.
/// x, y, z are the vector part, w the scalar part.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Quat
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis` (normalized internally)
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let cos_h = half.cos();
        let sin_h = half.sin();
        let a = axis.normalized();
        Self::new(a.x * sin_h, a.y * sin_h, a.z * sin_h, cos_h)
    }

    /// Dot product. For unit quaternions, |dot| near 1 means the two
    /// represent the same rotation (q and -q are equivalent).
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalize to unit magnitude
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            let inv = 1.0 / len;
            Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
        } else {
            Self::IDENTITY
        }
    }

    /// Write the equivalent rotation into a 4x4 transform.
    ///
    /// The result carries the rotation in the upper-left 3x3 block and an
    /// empty translation row, laid out for the row-vector convention
    /// (`p * M` applies the rotation this quaternion represents).
    pub fn to_matrix(&self) -> Mat44 {
        let Self { x, y, z, w } = *self;

        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Mat44::new(
            1.0 - (yy + zz), xy + wz, xz - wy, 0.0,
            xy - wz, 1.0 - (xx + zz), yz + wx, 0.0,
            xz + wy, yz - wx, 1.0 - (xx + yy), 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

impl std::ops::Neg for Quat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

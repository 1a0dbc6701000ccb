//! 4x4 homogeneous transform matrix
//!
//! The transform type the converter moves scene-graph node transforms
//! through, in both directions: raw matrix form for formats that store one,
//! and decomposed translation/rotation/scale for formats that store those.
//!
//! Row-major, row-vector convention: a point transforms as `p * M`, the
//! translation lives in row 3, and `A * B` applies A first, then B.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::{Mat3, Quat, Vec3, Vec4};

/// 4x4 affine transform matrix, row-major.
///
/// The upper-left 3x3 block holds combined rotation and scale: each row's
/// magnitude is that axis's scale factor, and the rows normalized by their
/// magnitudes form the orthonormal rotation block. Row 3 holds the
/// translation, with `m[3][3]` the homogeneous coordinate.
///
/// Decomposition assumes the matrix is exactly a scale, an orthonormal
/// rotation, and a translation composed together; sheared matrices
/// decompose incorrectly. Degenerate inputs (singular inversion, zero
/// scale) are not validated and flow through as IEEE infinities or NaNs.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat44 {
    m: [[f32; 4]; 4],
}

impl Default for Mat44 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat44 {
    /// Identity transform: unit scale, no rotation, zero translation
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create from row-major literals
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m11: f32, m12: f32, m13: f32, m14: f32,
        m21: f32, m22: f32, m23: f32, m24: f32,
        m31: f32, m32: f32, m33: f32, m34: f32,
        m41: f32, m42: f32, m43: f32, m44: f32,
    ) -> Self {
        Self {
            m: [
                [m11, m12, m13, m14],
                [m21, m22, m23, m24],
                [m31, m32, m33, m34],
                [m41, m42, m43, m44],
            ],
        }
    }

    /// Create from a row-major array of rows
    #[inline]
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Embed a 3x3 rotation, with zero translation
    pub fn from_mat3(r: Mat3) -> Self {
        Self::new(
            r[0][0], r[0][1], r[0][2], 0.0,
            r[1][0], r[1][1], r[1][2], 0.0,
            r[2][0], r[2][1], r[2][2], 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Compose a translation, a 3x3 rotation, and a uniform scale
    pub fn from_mat3_trs(t: Vec3, r: Mat3, scale: f32) -> Self {
        let mut rt = Self::from_mat3(r);
        rt.set_translation(t);
        Self::from_scale(Vec3::new(scale, scale, scale)) * rt
    }

    /// Diagonal scale matrix
    pub const fn from_scale(s: Vec3) -> Self {
        Self::new(
            s.x, 0.0, 0.0, 0.0,
            0.0, s.y, 0.0, 0.0,
            0.0, 0.0, s.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Compose a position, rotation, and uniform scale
    pub fn from_trs(pos: Vec3, rot: Quat, scale: f32) -> Self {
        Self::from_trs_per_axis(pos, rot, Vec3::new(scale, scale, scale))
    }

    /// Compose a position, rotation, and per-axis scale
    pub fn from_trs_per_axis(pos: Vec3, rot: Quat, scale: Vec3) -> Self {
        Self::from_trs4_per_axis(Vec4::from_point(pos), rot, scale)
    }

    /// Compose a homogeneous position, rotation, and uniform scale
    pub fn from_trs4(pos: Vec4, rot: Quat, scale: f32) -> Self {
        Self::from_trs4_per_axis(pos, rot, Vec3::new(scale, scale, scale))
    }

    /// Compose a homogeneous position, rotation, and per-axis scale.
    ///
    /// Builds the rotation matrix, overwrites its translation row with the
    /// position (including `pos.w` into the homogeneous slot), and if the
    /// scale is not unit, left-multiplies by the diagonal scale matrix:
    /// `scale * rotation_with_translation`, so the scale applies first
    /// under the row-vector convention.
    pub fn from_trs4_per_axis(pos: Vec4, rot: Quat, scale: Vec3) -> Self {
        let mut rt = rot.to_matrix();
        rt.set_row(3, pos);
        if scale == Vec3::ONE {
            rt
        } else {
            Self::from_scale(scale) * rt
        }
    }

    /// Overwrite this transform with a composed position/rotation/scale
    pub fn set_trs(&mut self, pos: Vec3, rot: Quat, scale: f32) {
        *self = Self::from_trs(pos, rot, scale);
    }

    /// Overwrite this transform with a composed position/rotation/per-axis scale
    pub fn set_trs_per_axis(&mut self, pos: Vec3, rot: Quat, scale: Vec3) {
        *self = Self::from_trs_per_axis(pos, rot, scale);
    }

    /// Overwrite this transform with a composed homogeneous position/rotation/scale
    pub fn set_trs4(&mut self, pos: Vec4, rot: Quat, scale: f32) {
        *self = Self::from_trs4(pos, rot, scale);
    }

    /// Overwrite this transform with a composed homogeneous position/rotation/per-axis scale
    pub fn set_trs4_per_axis(&mut self, pos: Vec4, rot: Quat, scale: Vec3) {
        *self = Self::from_trs4_per_axis(pos, rot, scale);
    }

    /// Row `r` as a vector
    #[inline]
    pub const fn row(&self, r: usize) -> Vec4 {
        Vec4::new(self.m[r][0], self.m[r][1], self.m[r][2], self.m[r][3])
    }

    /// Overwrite row `r`
    #[inline]
    pub fn set_row(&mut self, r: usize, v: Vec4) {
        self.m[r] = [v.x, v.y, v.z, v.w];
    }

    /// Overwrite the translation row, leaving the homogeneous coordinate alone
    #[inline]
    pub fn set_translation(&mut self, t: Vec3) {
        self.m[3][0] = t.x;
        self.m[3][1] = t.y;
        self.m[3][2] = t.z;
    }

    /// The raw upper-left 3x3 rotation-scale block
    pub fn basis(&self) -> Mat3 {
        let t = &self.m;
        Mat3::new(
            t[0][0], t[0][1], t[0][2],
            t[1][0], t[1][1], t[1][2],
            t[2][0], t[2][1], t[2][2],
        )
    }

    /// The translation row
    #[inline]
    pub const fn translation(&self) -> Vec3 {
        Vec3::new(self.m[3][0], self.m[3][1], self.m[3][2])
    }

    /// The rotation block with per-row scale divided out.
    ///
    /// Quick accessor for when a full decomposition is unnecessary; each row
    /// of the 3x3 block is independently normalized by its magnitude.
    pub fn rotation(&self) -> Mat3 {
        let mut m = self.basis();
        for r in 0..3 {
            let scale = m.row(r).length();
            m[r][0] /= scale;
            m[r][1] /= scale;
            m[r][2] /= scale;
        }
        m
    }

    /// The scale averaged across the three axes, for formats with no
    /// per-axis scale
    pub fn scale(&self) -> f32 {
        let m = self.basis();
        (m.row(0).length() + m.row(1).length() + m.row(2).length()) / 3.0
    }

    /// The rotation block as a quaternion, via the stable trace-branch
    /// conversion. The block is taken as-is, without scale normalization.
    pub fn rotation_quat(&self) -> Quat {
        self.basis().to_quat()
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let t = &self.m;
        Self::new(
            t[0][0], t[1][0], t[2][0], t[3][0],
            t[0][1], t[1][1], t[2][1], t[3][1],
            t[0][2], t[1][2], t[2][2], t[3][2],
            t[0][3], t[1][3], t[2][3], t[3][3],
        )
    }

    /// The 3x3 minor formed by deleting one row and one column
    pub fn submatrix(&self, skip_r: usize, skip_c: usize) -> Mat3 {
        let mut sub = Mat3::IDENTITY;
        let mut i = 0;
        for r in 0..4 {
            if r == skip_r {
                continue;
            }
            let mut j = 0;
            for c in 0..4 {
                if c == skip_c {
                    continue;
                }
                sub[i][j] = self.m[r][c];
                j += 1;
            }
            i += 1;
        }
        sub
    }

    /// Signed minor determinant, sign alternating with `r + c`
    pub fn adjoint(&self, skip_r: usize, skip_c: usize) -> f32 {
        let sign = if (skip_r + skip_c) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.submatrix(skip_r, skip_c).determinant()
    }

    /// Determinant by cofactor expansion along the first row
    pub fn determinant(&self) -> f32 {
        let t = &self.m;
        t[0][0] * self.submatrix(0, 0).determinant()
            - t[0][1] * self.submatrix(0, 1).determinant()
            + t[0][2] * self.submatrix(0, 2).determinant()
            - t[0][3] * self.submatrix(0, 3).determinant()
    }

    /// Adjugate transpose over the determinant.
    ///
    /// The matrix must be invertible; a zero determinant yields infinities
    /// or NaNs rather than an error.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        let mut result = Self::IDENTITY;
        for r in 0..4 {
            for c in 0..4 {
                result.m[c][r] = self.adjoint(r, c) / det;
            }
        }
        result
    }

    /// Split the transform into translation, rotation, and per-axis scale.
    ///
    /// The scale is recovered from the diagonal of `B * transpose(B)` where
    /// B is the rotation-scale block, then divided out of B row by row.
    /// Valid only when the block is an orthonormal rotation times a scale;
    /// a zero scale component produces infinities or NaNs in the rotation.
    pub fn decompose(&self) -> (Vec3, Mat3, Vec3) {
        let translate = self.translation();
        let mut rotation = self.basis();
        let gram = rotation * rotation.transpose();
        let scale = Vec3::new(
            gram[0][0].sqrt(),
            gram[1][1].sqrt(),
            gram[2][2].sqrt(),
        );
        let per_row = [scale.x, scale.y, scale.z];
        for i in 0..3 {
            for j in 0..3 {
                rotation[i][j] /= per_row[i];
            }
        }
        (translate, rotation, scale)
    }

    /// Decompose with the scale averaged to a single factor
    pub fn decompose_uniform(&self) -> (Vec3, Mat3, f32) {
        let (translate, rotation, scale) = self.decompose();
        (translate, rotation, (scale.x + scale.y + scale.z) / 3.0)
    }

    /// Decompose with the rotation converted to a quaternion
    pub fn decompose_quat(&self) -> (Vec3, Quat, Vec3) {
        let (translate, rotation, scale) = self.decompose();
        (translate, rotation.to_quat(), scale)
    }

    /// Decompose with a quaternion rotation and averaged scale
    pub fn decompose_quat_uniform(&self) -> (Vec3, Quat, f32) {
        let (translate, rotation, scale) = self.decompose_uniform();
        (translate, rotation.to_quat(), scale)
    }
}

impl std::ops::Index<usize> for Mat44 {
    type Output = [f32; 4];
    #[inline]
    fn index(&self, r: usize) -> &[f32; 4] {
        &self.m[r]
    }
}

impl std::ops::IndexMut<usize> for Mat44 {
    #[inline]
    fn index_mut(&mut self, r: usize) -> &mut [f32; 4] {
        &mut self.m[r]
    }
}

impl std::ops::Mul for Mat44 {
    type Output = Self;
    /// Transform composition: `A * B` applies A first, then B
    fn mul(self, rh: Self) -> Self {
        let mut r = [[0.0f32; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                let mut t = 0.0;
                for k in 0..4 {
                    t += self.m[i][k] * rh.m[k][j];
                }
                r[i][j] = t;
            }
        }
        Self { m: r }
    }
}

impl std::ops::MulAssign for Mat44 {
    fn mul_assign(&mut self, rh: Self) {
        *self = *self * rh;
    }
}

impl std::ops::Mul<f32> for Mat44 {
    type Output = Self;
    fn mul(self, rh: f32) -> Self {
        let mut r = self;
        r *= rh;
        r
    }
}

impl std::ops::MulAssign<f32> for Mat44 {
    fn mul_assign(&mut self, rh: f32) {
        for row in self.m.iter_mut() {
            for v in row.iter_mut() {
                *v *= rh;
            }
        }
    }
}

impl std::ops::Mul<Vec3> for Mat44 {
    type Output = Vec3;
    /// Transform a point: the vector is a row vector with implicit w = 1,
    /// and the resulting fourth coordinate is discarded
    fn mul(self, rh: Vec3) -> Vec3 {
        let t = &self.m;
        Vec3::new(
            rh.x * t[0][0] + rh.y * t[1][0] + rh.z * t[2][0] + t[3][0],
            rh.x * t[0][1] + rh.y * t[1][1] + rh.z * t[2][1] + t[3][1],
            rh.x * t[0][2] + rh.y * t[1][2] + rh.z * t[2][2] + t[3][2],
        )
    }
}

impl std::ops::Add for Mat44 {
    type Output = Self;
    fn add(self, rh: Self) -> Self {
        let mut r = self;
        r += rh;
        r
    }
}

impl std::ops::AddAssign for Mat44 {
    fn add_assign(&mut self, rh: Self) {
        for i in 0..4 {
            for j in 0..4 {
                self.m[i][j] += rh.m[i][j];
            }
        }
    }
}

impl std::ops::Sub for Mat44 {
    type Output = Self;
    fn sub(self, rh: Self) -> Self {
        let mut r = self;
        r -= rh;
        r
    }
}

impl std::ops::SubAssign for Mat44 {
    fn sub_assign(&mut self, rh: Self) {
        for i in 0..4 {
            for j in 0..4 {
                self.m[i][j] -= rh.m[i][j];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn mat_approx_eq(a: Mat44, b: Mat44) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    fn mat3_approx_eq(a: Mat3, b: Mat3) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    // A well-conditioned affine transform with all three parts non-trivial
    fn sample_transform() -> Mat44 {
        Mat44::from_trs(
            Vec3::new(4.0, -2.0, 0.5),
            Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.7),
            1.5,
        )
    }

    #[test]
    fn test_identity_laws() {
        let m = sample_transform();
        assert!(mat_approx_eq(Mat44::IDENTITY * m, m));
        assert!(mat_approx_eq(m * Mat44::IDENTITY, m));
    }

    #[test]
    fn test_identity_determinant() {
        assert_eq!(Mat44::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn test_determinant_scale() {
        let m = Mat44::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.determinant(), 24.0);
    }

    #[test]
    fn test_inverse_law() {
        let m = sample_transform();
        assert!(
            mat_approx_eq(m * m.inverse(), Mat44::IDENTITY),
            "M * M^-1 = {:?}",
            m * m.inverse()
        );
        assert!(mat_approx_eq(m.inverse() * m, Mat44::IDENTITY));
    }

    #[test]
    fn test_inverse_translation() {
        let m = Mat44::from_trs(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY, 1.0);
        let inv = m.inverse();
        assert!(vec_approx_eq(inv.translation(), Vec3::new(-1.0, -2.0, -3.0)));
    }

    #[test]
    fn test_transpose_involution() {
        let m = sample_transform();
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_submatrix() {
        let m = Mat44::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        );
        let sub = m.submatrix(1, 2);
        assert_eq!(sub, Mat3::new(
            1.0, 2.0, 4.0,
            9.0, 10.0, 12.0,
            13.0, 14.0, 16.0,
        ));
    }

    #[test]
    fn test_exact_equality() {
        let a = Mat44::IDENTITY;
        let mut b = Mat44::IDENTITY;
        b[0][1] = 1.0e-7;
        assert!(a != b);
        b[0][1] = 0.0;
        assert_eq!(a, b);
    }

    #[test]
    fn test_scalar_multiply() {
        let m = Mat44::IDENTITY * 3.0;
        assert_eq!(m[0][0], 3.0);
        assert_eq!(m[3][3], 3.0);
        assert_eq!(m[0][1], 0.0);
    }

    #[test]
    fn test_add_sub() {
        let m = sample_transform();
        let sum = m + m;
        assert_eq!(sum, m * 2.0);
        assert_eq!(sum - m, m);

        let mut acc = m;
        acc += m;
        acc -= m;
        assert_eq!(acc, m);
    }

    #[test]
    fn test_point_transform_is_translation_row() {
        let m = sample_transform();
        let p = m * Vec3::ZERO;
        // The origin maps exactly onto the translation row
        assert_eq!(p, m.translation());
    }

    #[test]
    fn test_composition_order() {
        // Row-vector convention: A * B applies A first
        let translate = Mat44::from_trs(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY, 1.0);
        let scale = Mat44::from_scale(Vec3::new(2.0, 2.0, 2.0));

        let p = (translate * scale) * Vec3::ZERO;
        assert!(vec_approx_eq(p, Vec3::new(2.0, 0.0, 0.0)), "got {:?}", p);

        let p = (scale * translate) * Vec3::ZERO;
        assert!(vec_approx_eq(p, Vec3::new(1.0, 0.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_decompose_concrete() {
        let m = Mat44::from_trs(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY, 2.0);
        let (t, r, s) = m.decompose();
        assert!(vec_approx_eq(t, Vec3::new(1.0, 2.0, 3.0)));
        assert!(vec_approx_eq(s, Vec3::new(2.0, 2.0, 2.0)));
        assert!(mat3_approx_eq(r, Mat3::IDENTITY));

        let (_, _, s) = m.decompose_uniform();
        assert!(approx_eq(s, 2.0));
    }

    #[test]
    fn test_trs_round_trip() {
        let t = Vec3::new(4.0, -2.0, 0.5);
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.7);
        let m = Mat44::from_trs_per_axis(t, q, Vec3::new(1.5, 1.5, 1.5));

        let (t2, q2, s2) = m.decompose_quat();
        assert!(vec_approx_eq(t2, t));
        assert!(vec_approx_eq(s2, Vec3::new(1.5, 1.5, 1.5)));
        // q and -q represent the same rotation
        assert!(approx_eq(q2.dot(q).abs(), 1.0), "got {:?}", q2);
    }

    #[test]
    fn test_trs_round_trip_uniform() {
        let t = Vec3::new(-3.0, 7.0, 11.0);
        let q = Quat::from_axis_angle(Vec3::Y, 1.2);
        let m = Mat44::from_trs(t, q, 0.25);

        let (t2, q2, s2) = m.decompose_quat_uniform();
        assert!(vec_approx_eq(t2, t));
        assert!(approx_eq(s2, 0.25));
        assert!(approx_eq(q2.dot(q).abs(), 1.0));
    }

    #[test]
    fn test_trs_homogeneous_coordinate() {
        // The scale path must still produce a valid affine transform
        let m = Mat44::from_trs(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY, 2.0);
        assert_eq!(m[3][3], 1.0);
        assert_eq!(m[0][3], 0.0);
        assert_eq!(m[1][3], 0.0);
        assert_eq!(m[2][3], 0.0);
    }

    #[test]
    fn test_trs4_writes_homogeneous_row() {
        let pos = Vec4::new(1.0, 2.0, 3.0, 1.0);
        let m = Mat44::from_trs4(pos, Quat::IDENTITY, 1.0);
        assert_eq!(m.row(3), pos);
    }

    #[test]
    fn test_set_trs_matches_from_trs() {
        let t = Vec3::new(1.0, 2.0, 3.0);
        let q = Quat::from_axis_angle(Vec3::Z, 0.4);
        let mut m = Mat44::IDENTITY;
        m.set_trs(t, q, 2.0);
        assert_eq!(m, Mat44::from_trs(t, q, 2.0));

        m.set_trs_per_axis(t, q, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m, Mat44::from_trs_per_axis(t, q, Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_from_mat3_trs() {
        // Rotation given as a matrix instead of a quaternion
        let rot = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2).to_matrix().basis();
        let m = Mat44::from_mat3_trs(Vec3::new(5.0, 0.0, 0.0), rot, 2.0);

        // X scales to (2, 0, 0), rotates to (0, 2, 0), translates to (5, 2, 0)
        let p = m * Vec3::X;
        assert!(vec_approx_eq(p, Vec3::new(5.0, 2.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_quick_accessors() {
        let m = Mat44::from_trs(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_axis_angle(Vec3::Z, FRAC_PI_2),
            2.0,
        );
        assert!(vec_approx_eq(m.translation(), Vec3::new(1.0, 2.0, 3.0)));
        assert!(approx_eq(m.scale(), 2.0));

        let r = m.rotation();
        // Rows are unit length after normalization
        assert!(approx_eq(r.row(0).length(), 1.0));
        assert!(approx_eq(r.row(1).length(), 1.0));
        assert!(approx_eq(r.row(2).length(), 1.0));
        assert!(mat3_approx_eq(
            r,
            Quat::from_axis_angle(Vec3::Z, FRAC_PI_2).to_matrix().basis()
        ));
    }

    #[test]
    fn test_rotation_quat_positive_trace() {
        let q = Quat::from_axis_angle(Vec3::Y, 0.3);
        let m = q.to_matrix();
        let q2 = m.rotation_quat();
        assert!(approx_eq(q2.dot(q).abs(), 1.0), "got {:?}", q2);
        // Rebuilding the matrix reproduces the rotation block
        assert!(mat_approx_eq(q2.to_matrix(), m));
    }

    #[test]
    fn test_rotation_quat_negative_trace() {
        // A half turn drives the trace to -1, forcing the
        // largest-diagonal extraction branch
        let q = Quat::from_axis_angle(Vec3::Z, PI);
        let m = q.to_matrix();
        let q2 = m.rotation_quat();
        assert!(approx_eq(q2.dot(q).abs(), 1.0), "got {:?}", q2);
        assert!(mat_approx_eq(q2.to_matrix(), m));

        // And about a diagonal axis, where no single diagonal dominates
        let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), PI);
        let m = q.to_matrix();
        let q2 = m.rotation_quat();
        assert!(approx_eq(q2.dot(q).abs(), 1.0), "got {:?}", q2);
        assert!(mat_approx_eq(q2.to_matrix(), m));
    }

    #[test]
    fn test_serde_round_trip() {
        // Node transforms persist through the scene representation unchanged
        let m = sample_transform();
        let text = ron::to_string(&m).unwrap();
        let back: Mat44 = ron::from_str(&text).unwrap();
        assert_eq!(m, back);
    }
}

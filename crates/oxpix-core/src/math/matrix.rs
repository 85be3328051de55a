//! 3x3 Matrix operations for color space transforms
//!
//! These matrices are used for RGB↔XYZ conversions, the XYZ↔LMS cone-response
//! transform and chromatic adaptation.

use std::ops::Mul;

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f32; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create a zero matrix
    #[inline]
    pub const fn zero() -> Self {
        Self {
            m: [[0.0; 3]; 3],
        }
    }

    /// Create a diagonal matrix from three values
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self {
            m: [[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]],
        }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [f32; 3]) -> [f32; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Calculate the determinant
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Calculate the inverse of this matrix
    ///
    /// Returns None if the matrix is singular (determinant ≈ 0)
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();

        if det.abs() < 1e-12 {
            return None;
        }

        let inv_det = 1.0 / det;
        let m = &self.m;

        Some(Self {
            m: [
                [
                    (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                    (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                    (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
                ],
                [
                    (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                    (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                    (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
                ],
                [
                    (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                    (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                    (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
                ],
            ],
        })
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if (self.m[i][j] - other.m[i][j]).abs() > epsilon {
                    return false;
                }
            }
        }
        true
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<[f32; 3]> for Matrix3x3 {
    type Output = [f32; 3];

    fn mul(self, rhs: [f32; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_identity() {
        let id = Matrix3x3::identity();
        let v = [1.0, 2.0, 3.0];
        let result = id.multiply_vec(v);
        assert!((result[0] - v[0]).abs() < EPSILON);
        assert!((result[1] - v[1]).abs() < EPSILON);
        assert!((result[2] - v[2]).abs() < EPSILON);
    }

    #[test]
    fn test_multiply_matrices() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let id = Matrix3x3::identity();

        // A × I = A
        assert!(a.multiply(&id).approx_eq(&a, EPSILON));
        // I × A = A
        assert!(id.multiply(&a).approx_eq(&a, EPSILON));
    }

    #[test]
    fn test_determinant() {
        let id = Matrix3x3::identity();
        assert!((id.determinant() - 1.0).abs() < EPSILON);

        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert!((a.determinant() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_inverse() {
        // A × A⁻¹ = I
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let a_inv = a.inverse().unwrap();
        let product = a.multiply(&a_inv);
        assert!(product.is_identity(1e-5));
    }

    #[test]
    fn test_singular_matrix() {
        // Row 3 = row 1 + row 2
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        assert!(singular.inverse().is_none());
    }

    #[test]
    fn test_diagonal() {
        let d = Matrix3x3::diagonal(2.0, 3.0, 4.0);
        let result = d.multiply_vec([1.0, 1.0, 1.0]);
        assert_eq!(result, [2.0, 3.0, 4.0]);
    }
}

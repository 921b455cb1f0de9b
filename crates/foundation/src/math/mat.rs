use super::Vec3;

/// 3x3 matrix, column-major (`cols[c][r]`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    pub cols: [[f64; 3]; 3],
}

impl Mat3 {
    pub fn identity() -> Self {
        Self {
            cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Rotation about the X axis by `angle_rad`.
    pub fn rotation_x(angle_rad: f64) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self {
            cols: [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]],
        }
    }

    /// Rotation about the Y axis by `angle_rad`.
    pub fn rotation_y(angle_rad: f64) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self {
            cols: [[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]],
        }
    }

    pub fn mul(self, other: Self) -> Self {
        let mut cols = [[0.0; 3]; 3];
        for (col, out) in cols.iter_mut().enumerate() {
            for (row, v) in out.iter_mut().enumerate() {
                *v = self.cols[0][row] * other.cols[col][0]
                    + self.cols[1][row] * other.cols[col][1]
                    + self.cols[2][row] * other.cols[col][2];
            }
        }
        Self { cols }
    }

    pub fn mul_vec3(self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.cols[0][0] * v.x + self.cols[1][0] * v.y + self.cols[2][0] * v.z,
            self.cols[0][1] * v.x + self.cols[1][1] * v.y + self.cols[2][1] * v.z,
            self.cols[0][2] * v.x + self.cols[1][2] * v.y + self.cols[2][2] * v.z,
        )
    }

    pub fn transpose(self) -> Self {
        let m = &self.cols;
        Self {
            cols: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

    pub fn determinant(self) -> f64 {
        let m = &self.cols;
        // m[c][r]; rows spelled out for the cofactor expansion.
        let (m00, m01, m02) = (m[0][0], m[1][0], m[2][0]);
        let (m10, m11, m12) = (m[0][1], m[1][1], m[2][1]);
        let (m20, m21, m22) = (m[0][2], m[1][2], m[2][2]);
        m00 * (m11 * m22 - m12 * m21) - m01 * (m10 * m22 - m12 * m20)
            + m02 * (m10 * m21 - m11 * m20)
    }

    /// Inverse, or `None` when the matrix is singular.
    pub fn inverse(self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < 1e-12 {
            return None;
        }
        let inv_det = 1.0 / det;

        let m = &self.cols;
        let (m00, m01, m02) = (m[0][0], m[1][0], m[2][0]);
        let (m10, m11, m12) = (m[0][1], m[1][1], m[2][1]);
        let (m20, m21, m22) = (m[0][2], m[1][2], m[2][2]);

        // Adjugate, written back in column-major order.
        Some(Self {
            cols: [
                [
                    (m11 * m22 - m12 * m21) * inv_det,
                    (m12 * m20 - m10 * m22) * inv_det,
                    (m10 * m21 - m11 * m20) * inv_det,
                ],
                [
                    (m02 * m21 - m01 * m22) * inv_det,
                    (m00 * m22 - m02 * m20) * inv_det,
                    (m01 * m20 - m00 * m21) * inv_det,
                ],
                [
                    (m01 * m12 - m02 * m11) * inv_det,
                    (m02 * m10 - m00 * m12) * inv_det,
                    (m00 * m11 - m01 * m10) * inv_det,
                ],
            ],
        })
    }
}

/// 4x4 matrix, column-major (`cols[c][r]`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub cols: [[f64; 4]; 4],
}

impl Mat4 {
    pub fn identity() -> Self {
        let mut cols = [[0.0; 4]; 4];
        for (i, col) in cols.iter_mut().enumerate() {
            col[i] = 1.0;
        }
        Self { cols }
    }

    pub fn mul(self, other: Self) -> Self {
        let mut cols = [[0.0; 4]; 4];
        for (col, out) in cols.iter_mut().enumerate() {
            for (row, v) in out.iter_mut().enumerate() {
                *v = self.cols[0][row] * other.cols[col][0]
                    + self.cols[1][row] * other.cols[col][1]
                    + self.cols[2][row] * other.cols[col][2]
                    + self.cols[3][row] * other.cols[col][3];
            }
        }
        Self { cols }
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize_or_zero();
        let s = f.cross(up).normalize_or_zero();
        let u = s.cross(f);

        Self {
            cols: [
                [s.x, u.x, -f.x, 0.0],
                [s.y, u.y, -f.y, 0.0],
                [s.z, u.z, -f.z, 0.0],
                [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
            ],
        }
    }

    /// Right-handed perspective projection with clip-space z in `[-1, 1]`.
    pub fn perspective_rh(fov_y_rad: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (0.5 * fov_y_rad).tan();
        let inv_depth = 1.0 / (near - far);

        let mut cols = [[0.0; 4]; 4];
        cols[0][0] = f / aspect;
        cols[1][1] = f;
        cols[2][2] = (far + near) * inv_depth;
        cols[2][3] = -1.0;
        cols[3][2] = 2.0 * far * near * inv_depth;
        Self { cols }
    }

    /// Affine transform of a point (no perspective divide). Suitable for
    /// view matrices, whose bottom row is `(0, 0, 0, 1)`.
    pub fn transform_point3(self, p: Vec3) -> Vec3 {
        let m = &self.cols;
        Vec3::new(
            m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
            m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
            m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
        )
    }

    /// Full projective transform with perspective divide, or `None` when the
    /// point lands on the eye plane (`w ~ 0`) or the result is not finite.
    pub fn project_point(self, p: Vec3) -> Option<Vec3> {
        let m = &self.cols;
        let x = m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0];
        let y = m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1];
        let z = m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2];
        let w = m[0][3] * p.x + m[1][3] * p.y + m[2][3] * p.z + m[3][3];

        if !w.is_finite() || w.abs() < 1e-12 {
            return None;
        }
        let ndc = Vec3::new(x / w, y / w, z / w);
        ndc.is_finite().then_some(ndc)
    }

    /// Upper-left 3x3 block.
    pub fn rotation_part(self) -> Mat3 {
        let m = &self.cols;
        Mat3 {
            cols: [
                [m[0][0], m[0][1], m[0][2]],
                [m[1][0], m[1][1], m[1][2]],
                [m[2][0], m[2][1], m[2][2]],
            ],
        }
    }

    /// Normal matrix (inverse-transpose of the upper-left 3x3), for
    /// transforming directions. Falls back to the plain rotation block when
    /// the inverse does not exist.
    pub fn normal_matrix(self) -> Mat3 {
        let rot = self.rotation_part();
        rot.inverse().map(Mat3::transpose).unwrap_or(rot)
    }
}

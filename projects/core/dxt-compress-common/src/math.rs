//! Scalar vector maths used by the colour fitters.
//!
//! Everything here is plain `f32` arithmetic with no vector intrinsics, so results are
//! identical on every target. The fitters rely on that for reproducible output.

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Number of power iterations used when computing the principal axis.
pub const POWER_ITERATION_COUNT: usize = 8;

/// Rounds `a` to the nearest integer (halves away from zero for positive values)
/// and clamps the result to `[0, limit]`.
///
/// # Examples
///
/// ```
/// use dxt_compress_common::math::float_to_int;
///
/// assert_eq!(float_to_int(30.5, 31), 31);
/// assert_eq!(float_to_int(40.0, 31), 31);
/// assert_eq!(float_to_int(-3.0, 31), 0);
/// ```
#[inline]
pub fn float_to_int(a: f32, limit: i32) -> i32 {
    // `as` truncates towards zero, which is what the 0.5 bias expects for positive input.
    let i = (a + 0.5) as i32;
    i.clamp(0, limit)
}

/// A point or direction in RGB colour space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// Red (or x) component
    pub x: f32,
    /// Green (or y) component
    pub y: f32,
    /// Blue (or z) component
    pub z: f32,
}

impl Vec3 {
    /// Creates a new [`Vec3`] from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a [`Vec3`] with all components set to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared euclidean length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Clamps every component to `[0, 1]`.
    #[inline]
    pub fn saturate(self) -> Self {
        self.max(Self::splat(0.0)).min(Self::splat(1.0))
    }

    /// Truncates every component towards zero.
    #[inline]
    pub fn truncate(self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc(), self.z.trunc())
    }

    /// Snaps a colour in `[0, 1]` onto the nearest point representable in RGB565.
    ///
    /// Out of range components are clamped first.
    #[inline]
    pub fn snap_to_565_grid(self) -> Self {
        const GRID: Vec3 = Vec3::new(31.0, 63.0, 31.0);
        const GRID_RCP: Vec3 = Vec3::new(1.0 / 31.0, 1.0 / 63.0, 1.0 / 31.0);
        (GRID * self.saturate() + Vec3::splat(0.5)).truncate() * GRID_RCP
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        self * (1.0 / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// A symmetric 3x3 matrix, stored as its six independent entries in the order
/// `xx, xy, xz, yy, yz, zz`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sym3x3 {
    /// The upper triangle of the matrix, row by row.
    pub m: [f32; 6],
}

impl Sym3x3 {
    /// Multiplies this matrix by a column vector.
    #[inline]
    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z,
            m[1] * v.x + m[3] * v.y + m[4] * v.z,
            m[2] * v.x + m[4] * v.y + m[5] * v.z,
        )
    }
}

/// Computes the weighted covariance matrix of a point set.
///
/// The centroid is only normalised by the total weight if that weight is above
/// machine epsilon; a (near) zero total leaves the raw weighted sum as centroid.
///
/// # Parameters
///
/// - `points`: The points of the set
/// - `weights`: One weight per point, must be at least as long as `points`
pub fn compute_weighted_covariance(points: &[Vec3], weights: &[f32]) -> Sym3x3 {
    let mut total = 0.0f32;
    let mut centroid = Vec3::default();
    for (&point, &weight) in points.iter().zip(weights) {
        total += weight;
        centroid += point * weight;
    }

    if total > f32::EPSILON {
        centroid = centroid / total;
    }

    let mut covariance = Sym3x3::default();
    for (&point, &weight) in points.iter().zip(weights) {
        let a = point - centroid;
        let b = a * weight;

        covariance.m[0] += a.x * b.x;
        covariance.m[1] += a.x * b.y;
        covariance.m[2] += a.x * b.z;
        covariance.m[3] += a.y * b.y;
        covariance.m[4] += a.y * b.z;
        covariance.m[5] += a.z * b.z;
    }

    covariance
}

/// Approximates the dominant eigenvector of a symmetric matrix.
///
/// Runs [`POWER_ITERATION_COUNT`] rounds of power iteration starting at `(1, 1, 1)`,
/// dividing by the component of largest magnitude after every multiply.
/// There is no convergence check. Only the direction of the result is meaningful.
///
/// A matrix that maps the current estimate onto (near) zero, such as the covariance
/// of a single point, returns the estimate reached so far.
pub fn compute_principal_component(matrix: &Sym3x3) -> Vec3 {
    let mut v = Vec3::splat(1.0);
    for _ in 0..POWER_ITERATION_COUNT {
        let w = matrix.mul_vec3(v);

        let mut a = w.x;
        if w.y.abs() > a.abs() {
            a = w.y;
        }
        if w.z.abs() > a.abs() {
            a = w.z;
        }

        if a.abs() <= f32::EPSILON {
            break;
        }

        v = w / a;
    }

    v
}

//! 3D vector type for scene positions and directions.
//!
//! The scene layer represents everything spatial with [`Vec3`]: mesh and
//! light positions, displacements between points, and view directions. The
//! type is a plain value (`Copy`) with two families of operations:
//!
//! - In-place arithmetic (`set`, `add`, `normalize`, ...) that mutates the
//!   receiver and returns `&mut Self`, so calls chain left to right the way
//!   a frame update builds up a position.
//! - Pure queries (`length`, `dot`, `project`, ...) that leave the receiver
//!   and every argument untouched.
//!
//! Components are guaranteed finite: a NaN or infinite value arriving at a
//! construction or assignment boundary (`new`, `set`, the `From` conversions,
//! deserialization) is replaced with `0.0`. Arithmetic between values already
//! held does not re-check, so scaling by a non-finite scalar is on the caller.
//!
//! With the default `gpu` feature the type is `bytemuck::Pod`, letting a
//! renderer copy positions and light uniforms straight into vertex/uniform
//! buffers without an intermediate array.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Replace a non-finite component with zero.
#[inline]
fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// A 3-component vector in single precision.
///
/// Represents either a point or a displacement in 3D space. Two vectors with
/// equal components are interchangeable; the type has no identity beyond its
/// values and is freely copied.
///
/// # Usage
/// ```
/// use scene_math_core::Vec3;
///
/// let mut position = Vec3::new(1.0, 1.0, 2.0);
/// position.add(Vec3::UNIT_X).multiply_scalar(2.0);
/// assert_eq!(position, Vec3::new(4.0, 2.0, 4.0));
///
/// // Non-finite input never reaches the components
/// let sanitized = Vec3::new(f32::NAN, 5.0, f32::INFINITY);
/// assert_eq!(sanitized, Vec3::new(0.0, 5.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawVec3")]
#[cfg_attr(feature = "gpu", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Unvalidated mirror of [`Vec3`] used as the deserialization entry point.
/// Routing through [`Vec3::new`] keeps the finiteness invariant for data
/// arriving from scene/config files.
#[derive(Deserialize)]
struct RawVec3 {
    x: f32,
    y: f32,
    z: f32,
}

impl From<RawVec3> for Vec3 {
    fn from(raw: RawVec3) -> Self {
        Self::new(raw.x, raw.y, raw.z)
    }
}

impl Vec3 {
    /// The zero vector (also the `Default`).
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector along +X.
    pub const UNIT_X: Vec3 = Vec3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector along +Y.
    pub const UNIT_Y: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Unit vector along +Z.
    pub const UNIT_Z: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Create a vector from three components.
    ///
    /// Any component that is NaN or infinite is replaced with `0.0` rather
    /// than stored; the leniency is deliberate so bad values from upstream
    /// math or asset data cannot poison a whole frame of positions.
    #[inline]
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
            z: finite_or_zero(z),
        }
    }

    /// Overwrite all three components, applying the same non-finite
    /// coercion as [`Vec3::new`].
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = finite_or_zero(x);
        self.y = finite_or_zero(y);
        self.z = finite_or_zero(z);
        self
    }

    /// Overwrite this vector with the components of `other`.
    #[inline]
    pub fn copy_from(&mut self, other: Vec3) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self.z = other.z;
        self
    }

    /// Flip the sign of every component.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Component-wise sum with `v`.
    #[inline]
    pub fn add(&mut self, v: Vec3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    /// Component-wise difference `self - v`.
    #[inline]
    pub fn subtract(&mut self, v: Vec3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    /// Multiply every component by `scalar`.
    #[inline]
    pub fn multiply_scalar(&mut self, scalar: f32) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    /// Rescale so the Euclidean length becomes 1.
    ///
    /// A zero-length vector has no direction to keep, so it is left
    /// unchanged (still zero) and the call is recorded at debug level.
    /// Use [`Vec3::try_normalize`] when the caller must detect that case.
    ///
    /// ```
    /// use scene_math_core::Vec3;
    ///
    /// let mut v = Vec3::new(3.0, 4.0, 0.0);
    /// v.normalize();
    /// assert!((v.length() - 1.0).abs() < 1e-6);
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            tracing::debug!("normalize on zero-length vector, leaving unchanged");
            return self;
        }
        self.multiply_scalar(1.0 / len)
    }

    /// Rescale to unit length, failing on a zero-length receiver.
    ///
    /// # Errors
    /// Returns [`Vec3Error::ZeroLength`] if the vector has length zero; the
    /// receiver is left untouched.
    pub fn try_normalize(&mut self) -> Result<&mut Self, Vec3Error> {
        let len = self.length();
        if len == 0.0 {
            return Err(Vec3Error::ZeroLength);
        }
        Ok(self.multiply_scalar(1.0 / len))
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`.
    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean length, `x² + y² + z²`.
    ///
    /// Never takes a square root; preferred wherever only relative
    /// magnitudes matter (distance comparisons, culling thresholds).
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Dot product with `other`.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// The displacement that carries `from` onto `to`, i.e. `to - from`.
    ///
    /// Both arguments are taken by value and never mutated.
    ///
    /// ```
    /// use scene_math_core::Vec3;
    ///
    /// let step = Vec3::direction_between(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
    /// assert_eq!(step.length(), 5.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn direction_between(from: Vec3, to: Vec3) -> Vec3 {
        let mut out = to;
        out.subtract(from);
        out
    }

    /// Project `vector_to_project` onto the direction of `onto`.
    ///
    /// Returns a vector parallel to `onto` whose length is the signed
    /// scalar projection of `vector_to_project` onto it. Neither argument
    /// is mutated. A zero-length `onto` has no direction and yields
    /// [`Vec3::ZERO`] (same lenient policy as [`Vec3::normalize`]); use
    /// [`Vec3::try_project`] to detect that case.
    ///
    /// ```
    /// use scene_math_core::Vec3;
    ///
    /// let shadow = Vec3::project(Vec3::new(2.0, 2.0, 0.0), Vec3::UNIT_X);
    /// assert_eq!(shadow, Vec3::new(2.0, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn project(vector_to_project: Vec3, onto: Vec3) -> Vec3 {
        let mut axis = onto;
        axis.normalize();
        let scalar = vector_to_project.dot(axis);
        axis.multiply_scalar(scalar);
        axis
    }

    /// Projection of `vector_to_project` onto `onto`, failing when `onto`
    /// has zero length.
    ///
    /// # Errors
    /// Returns [`Vec3Error::ZeroLength`] if `onto` has length zero.
    pub fn try_project(vector_to_project: Vec3, onto: Vec3) -> Result<Vec3, Vec3Error> {
        let mut axis = onto;
        axis.try_normalize()?;
        let scalar = vector_to_project.dot(axis);
        axis.multiply_scalar(scalar);
        Ok(axis)
    }

    /// Components as an array, in `[x, y, z]` order, for uniform upload
    /// and interop with array-based APIs.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    fn from(t: (f32, f32, f32)) -> Self {
        Self::new(t.0, t.1, t.2)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

// Vec3 * scalar
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

// scalar * Vec3
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.add(rhs);
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.subtract(rhs);
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.multiply_scalar(rhs);
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Errors from operations that need a usable direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vec3Error {
    /// The operation required a non-zero length but the vector was zero
    ZeroLength,
}

impl fmt::Display for Vec3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vec3Error::ZeroLength => {
                write!(f, "cannot derive a direction from a zero-length vector")
            }
        }
    }
}

impl std::error::Error for Vec3Error {}

//! Frame-tagged points.
//!
//! A point only means something relative to the frame it was measured in.
//! `Point3<F>` carries that frame as a zero-sized type parameter, so adding a
//! camera-space point to a world-space point fails to compile. Directions are
//! plain `Vec3` and may be combined with points of any frame.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::Vec3;

/// Marker trait for coordinate frames.
pub trait Frame: Copy + Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Human-readable frame name, used in debug output.
    const NAME: &'static str;
}

/// World space: the frame primitives, rays and bounding boxes live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldSpace {}

/// Camera space: origin at the eye, `+x` right, `+y` up, `-z` forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSpace {}

impl Frame for WorldSpace {
    const NAME: &'static str = "world";
}

impl Frame for CameraSpace {
    const NAME: &'static str = "camera";
}

/// A position measured in frame `F`.
#[derive(Clone, Copy, PartialEq)]
pub struct Point3<F: Frame> {
    coords: Vec3,
    frame: PhantomData<F>,
}

pub type WorldPoint = Point3<WorldSpace>;
pub type CameraPoint = Point3<CameraSpace>;

impl<F: Frame> Point3<F> {
    /// The origin of frame `F`.
    pub const ORIGIN: Self = Self {
        coords: Vec3::ZERO,
        frame: PhantomData,
    };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_coords(Vec3::new(x, y, z))
    }

    /// Interpret raw coordinates as a point in frame `F`.
    #[inline]
    pub const fn from_coords(coords: Vec3) -> Self {
        Self {
            coords,
            frame: PhantomData,
        }
    }

    /// Displacement of this point from the origin of its frame.
    #[inline]
    pub fn coords(self) -> Vec3 {
        self.coords
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.coords.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.coords.y
    }

    #[inline]
    pub fn z(self) -> f32 {
        self.coords.z
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Component-wise minimum of two points.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_coords(self.coords.min(other.coords))
    }

    /// Component-wise maximum of two points.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_coords(self.coords.max(other.coords))
    }

    /// Linear interpolation: `self` at `s = 0`, `other` at `s = 1`.
    #[inline]
    pub fn lerp(self, other: Self, s: f32) -> Self {
        self + s * (other - self)
    }
}

impl<F: Frame> fmt::Debug for Point3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point3<{}>({}, {}, {})",
            F::NAME,
            self.coords.x,
            self.coords.y,
            self.coords.z
        )
    }
}

impl<F: Frame> Default for Point3<F> {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl<F: Frame> Add<Vec3> for Point3<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Vec3) -> Self {
        Self::from_coords(self.coords + rhs)
    }
}

impl<F: Frame> AddAssign<Vec3> for Point3<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        self.coords += rhs;
    }
}

impl<F: Frame> Sub<Vec3> for Point3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Vec3) -> Self {
        Self::from_coords(self.coords - rhs)
    }
}

impl<F: Frame> SubAssign<Vec3> for Point3<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        self.coords -= rhs;
    }
}

impl<F: Frame> Sub for Point3<F> {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Self) -> Vec3 {
        self.coords - rhs.coords
    }
}

//! Camera for ray generation.

use rand::RngCore;
use sable_math::random::{gen_range_f32, random_in_unit_disk};
use sable_math::{CameraFrame, CameraPoint, Ray, Vec3, WorldPoint};

use crate::error::ConfigError;

/// Parameters a [`Camera`] is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub look_from: WorldPoint,
    pub look_at: WorldPoint,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    pub aspect_ratio: f32,
    /// Lens diameter; 0 gives a pinhole camera
    pub aperture: f32,
    /// Distance from the eye to the plane of perfect focus
    pub focus_dist: f32,
    pub shutter_open: f32,
    pub shutter_close: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: WorldPoint::ORIGIN,
            look_at: WorldPoint::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
            shutter_open: 0.0,
            shutter_close: 0.0,
        }
    }
}

impl CameraSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: WorldPoint, look_at: WorldPoint, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, aperture: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Open the shutter over `[open, close]` for motion blur.
    pub fn with_shutter(mut self, open: f32, close: f32) -> Self {
        self.shutter_open = open;
        self.shutter_close = close;
        self
    }

    /// Derive the viewport and lens geometry.
    pub fn build(&self) -> Result<Camera, ConfigError> {
        if !(self.aspect_ratio > 0.0 && self.aspect_ratio.is_finite()) {
            return Err(ConfigError::InvalidAspectRatio(self.aspect_ratio));
        }
        if !(self.shutter_open <= self.shutter_close) {
            return Err(ConfigError::InvalidShutter(self.shutter_open, self.shutter_close));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(self.vfov));
        }
        if !(self.focus_dist > 0.0 && self.focus_dist.is_finite()) {
            return Err(ConfigError::InvalidFocusDistance(self.focus_dist));
        }
        // Both the view direction and the horizontal axis must be well defined
        let view = (self.look_from - self.look_at).try_normalize();
        if view.and_then(|w| self.vup.cross(w).try_normalize()).is_none() {
            return Err(ConfigError::DegenerateView);
        }

        let theta = self.vfov.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = self.aspect_ratio * viewport_height;

        let frame = CameraFrame::look_at(self.look_from, self.look_at, self.vup);

        let half_w = 0.5 * self.focus_dist * viewport_width;
        let half_h = 0.5 * self.focus_dist * viewport_height;

        // Corner of the focus plane, first in camera space then in world space
        let corner = CameraPoint::new(-half_w, -half_h, -self.focus_dist);

        Ok(Camera {
            frame,
            lower_left_corner: frame.to_world(corner),
            horizontal: 2.0 * half_w * frame.u,
            vertical: 2.0 * half_h * frame.v,
            lens_radius: self.aperture / 2.0,
            shutter_open: self.shutter_open,
            shutter_close: self.shutter_close,
        })
    }
}

/// Immutable camera, built once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    frame: CameraFrame,
    lower_left_corner: WorldPoint,
    horizontal: Vec3,
    vertical: Vec3,
    lens_radius: f32,
    shutter_open: f32,
    shutter_close: f32,
}

impl Camera {
    /// Ray through normalized viewport coordinates `(s, t)`.
    ///
    /// `(0, 0)` is the bottom-left corner and `(1, 1)` the top-right. The lens
    /// is only sampled when the aperture is open and the time only when the
    /// shutter interval is non-empty, so a pinhole camera with a closed
    /// shutter draws nothing from `rng`.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.frame.u * rd.x + self.frame.v * rd.y
        } else {
            Vec3::ZERO
        };

        let origin = self.frame.origin + offset;
        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;

        let time = if self.shutter_close > self.shutter_open {
            gen_range_f32(rng, self.shutter_open, self.shutter_close)
        } else {
            self.shutter_open
        };

        Ray::new(origin, target - origin, time)
    }

    pub fn origin(&self) -> WorldPoint {
        self.frame.origin
    }

    pub fn frame(&self) -> &CameraFrame {
        &self.frame
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }
}

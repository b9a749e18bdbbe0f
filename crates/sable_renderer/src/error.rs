//! Error types.
//!
//! Rendering itself cannot fail. Errors only come from building a scene or a
//! config with invalid parameters, and from writing the finished image.

use std::path::PathBuf;

use thiserror::Error;

/// A primitive or material was constructed with parameters outside its domain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("metal fuzz must lie in [0, 1], got {0}")]
    InvalidFuzz(f32),

    #[error("index of refraction must be positive and finite, got {0}")]
    InvalidIor(f32),

    #[error("albedo channels must lie in [0, 1], got ({0}, {1}, {2})")]
    InvalidAlbedo(f32, f32, f32),

    #[error("moving sphere needs time0 < time1, got [{0}, {1}]")]
    InvalidTimeRange(f32, f32),
}

/// Render settings that cannot produce an image.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("image width must be at least 1")]
    ZeroWidth,

    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f32),

    #[error("samples per pixel must be at least 1")]
    ZeroSamples,

    #[error("max depth must be at least 1")]
    ZeroDepth,

    #[error("gamma must be positive and finite, got {0}")]
    InvalidGamma(f32),

    #[error("bucket size must be at least 1")]
    ZeroBucketSize,

    #[error("shutter must satisfy open <= close, got [{0}, {1}]")]
    InvalidShutter(f32, f32),

    #[error("focus distance must be positive and finite, got {0}")]
    InvalidFocusDistance(f32),

    #[error("vertical field of view must lie in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),

    #[error("camera needs distinct look_from and look_at and a vup not parallel to the view")]
    DegenerateView,

    #[error("image of {0}x{1} pixels is too large to allocate")]
    ImageTooLarge(u32, u32),
}

/// The image could not be written to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

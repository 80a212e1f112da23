use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`ShowcaseConfig`](crate::ShowcaseConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("navigation order is empty")]
    EmptyOrder,

    #[error("entity '{0}' is defined more than once")]
    DuplicateEntity(String),

    #[error("entity '{0}' appears more than once in the navigation order")]
    DuplicateInOrder(String),

    #[error("navigation order names unknown entity '{0}'")]
    UnknownInOrder(String),

    #[error("start entity '{0}' is not defined")]
    UnknownStart(String),

    #[error("flight duration must be finite and non-negative, got {0}")]
    InvalidDuration(f32),

    #[error("idle clip of '{entity}' must be finite and positive, got {seconds}")]
    InvalidClip { entity: String, seconds: f32 },

    #[error("model scale of '{entity}' must be finite and positive, got {scale}")]
    InvalidScale { entity: String, scale: f32 },

    #[error("rotate speed must be finite, got {0}")]
    InvalidRotateSpeed(f32),
}

/// Errors raised while creating the GPU context.
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

use thiserror::Error;

/// Reasons a zone configuration is rejected by [`crate::types::ZoneConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoneConfigError {
    #[error("zone must have at least one wave")]
    NoWaves,
    #[error("spawn interval min {min}ms must be non-negative and not exceed start {start}ms")]
    SpawnInterval { start: f64, min: f64 },
    #[error("asteroid radius range {min}..{max} is empty or non-positive")]
    RadiusRange { min: f32, max: f32 },
    #[error("playfield bounds have zero or negative area")]
    DegenerateBounds,
    #[error("{palette} palette contains a blank kind")]
    BlankKind { palette: &'static str },
}

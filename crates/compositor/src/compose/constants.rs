// =============================================================================
// Device pixel ratio caps
// =============================================================================

pub(crate) const DPR_CAP_LOW: f32 = 1.0;
pub(crate) const DPR_CAP_MEDIUM: f32 = 1.5;
pub(crate) const DPR_CAP_HIGH: f32 = 2.0;

/// Viewports narrower than this get the medium cap under `Auto` quality.
pub(crate) const SMALL_VIEWPORT_PX: f32 = 768.0;

/// Resolved DPR never drops below one device pixel per CSS pixel.
pub(crate) const MIN_DPR: f32 = 1.0;

/// Share of rain intensity that shows up as drops on the glass.
pub(crate) const GLASS_INTENSITY_SCALE: f32 = 0.7;

/// Degrees from vertical to the renderer's falling-angle unit. Not π/180;
/// the renderer was tuned against this value.
pub(crate) const FALLING_ANGLE_SCALE: f32 = 0.02;

use glam::Vec2;

/// Pointer position in normalized device coordinates.
///
/// Both components lie in [-1, 1] for pixels inside the viewport; the
/// vertical axis is flipped so +y points up, matching screen-space
/// conventions on the 3D side. Updated by the pointermove listener and
/// read by the frame callback; both run on the same thread.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn ndc(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Update from a pointer event. Events can land a fraction outside the
    /// canvas rect, so the stored components are clamped to keep the
    /// [-1, 1] invariant; the raw mapping itself stays unclamped.
    #[inline]
    pub fn set_from_pixels(&mut self, px: f32, py: f32, width: f32, height: f32) {
        let ndc = ndc_from_pixels(px, py, width, height);
        self.x = ndc.x.clamp(-1.0, 1.0);
        self.y = ndc.y.clamp(-1.0, 1.0);
    }
}

/// Map viewport pixel coordinates to normalized device coordinates.
///
/// Top-left pixel maps to (-1, 1), bottom-right to (1, -1). A zero-sized
/// viewport produces non-finite values; callers skip events while the
/// canvas rect is degenerate.
#[inline]
pub fn ndc_from_pixels(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((px / width) * 2.0 - 1.0, -((py / height) * 2.0 - 1.0))
}

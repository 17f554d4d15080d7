// Presentation constants for the web frontend.

/// Character asset fetched at startup, relative to the page origin.
pub const MODEL_URL: &str = "assets/character.glb";

/// Background #f0f0f0, expressed in linear space for the sRGB surface.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.8714,
    g: 0.8714,
    b: 0.8714,
    a: 1.0,
};

// Lighting: one directional light from above and in front of the
// character, plus a flat ambient term. Weights are Lambert-model
// intensities, not photometric units.
pub const LIGHT_POSITION: [f32; 3] = [0.0, 20.0, 20.0];
pub const LIGHT_INTENSITY: f32 = 0.55;
pub const AMBIENT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_INTENSITY: f32 = 0.45;

use crate::constants::ACCENT_RGB;
use crate::core::particles::ParticleField;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const ACCENT: Rgb = Rgb {
        r: ACCENT_RGB[0],
        g: ACCENT_RGB[1],
        b: ACCENT_RGB[2],
    };

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, alpha)` with alpha clamped to `[0, 1]`.
    pub fn rgba(&self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// Minimal 2D drawing target for a particle frame.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_disk(&mut self, x: f32, y: f32, radius: f32, color: Rgb);
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb, alpha: f32);
}

/// Run one frame: clear, move, draw particles, draw connections.
pub fn paint_frame<S: Surface>(surface: &mut S, field: &mut ParticleField, color: Rgb) {
    let (w, h) = field.size();
    surface.clear(w, h);
    field.step();
    for p in field.particles() {
        surface.fill_disk(p.position.x, p.position.y, p.radius, color);
    }
    let particles = field.particles();
    for c in field.connections() {
        let a = particles[c.a].position;
        let b = particles[c.b].position;
        surface.stroke_line((a.x, a.y), (b.x, b.y), color, c.opacity);
    }
}

//! Demo lines for the studio render.

use ribbon_engine::coords::Vec3;
use ribbon_engine::paint::Rgb;
use ribbon_engine::ribbon::PointSequence;

/// The corner from the classic example: along +X, then along +Z.
pub fn corner() -> PointSequence {
    PointSequence::from_points([[0.0, 0.0, 0.0], [6.0, 0.0, 0.0], [6.0, 0.0, 6.0]])
}

/// Flat spiral in the XZ plane, colored from blue at the center to orange.
pub fn spiral(turns: f32, samples: usize) -> PointSequence {
    let inner = Rgb::from_srgb_u8(40, 120, 255);
    let outer = Rgb::from_srgb_u8(255, 150, 40);

    let last = samples.saturating_sub(1).max(1) as f32;
    let mut points = Vec::with_capacity(samples);
    let mut colors = Vec::with_capacity(samples);
    for i in 0..samples {
        let t = i as f32 / last;
        let angle = t * turns * std::f32::consts::TAU;
        let radius = 0.5 + 4.0 * t;
        points.push(Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin()));
        colors.push(Rgb::new(
            inner.r + (outer.r - inner.r) * t,
            inner.g + (outer.g - inner.g) * t,
            inner.b + (outer.b - inner.b) * t,
        ));
    }
    PointSequence::new(points).with_color(colors)
}

/// Sine wave standing above the XZ plane, one uniform color.
pub fn wave(samples: usize) -> PointSequence {
    let last = samples.saturating_sub(1).max(1) as f32;
    let points = (0..samples).map(|i| {
        let x = -6.0 + 12.0 * i as f32 / last;
        Vec3::new(x, 2.0 + (x * 1.5).sin(), -4.0)
    });
    PointSequence::new(points.collect()).with_color(Rgb::from_srgb_u8(90, 220, 120))
}

/// Primary line plus the collection, including one line too short to draw.
pub fn demo() -> (Option<PointSequence>, Vec<PointSequence>) {
    let stray = PointSequence::from_points([[0.0, 5.0, 0.0]]);
    (Some(corner()), vec![spiral(3.0, 240), wave(96), stray])
}

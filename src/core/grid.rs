//! Raster-Einrasten für Platzierungskoordinaten.

use glam::Vec2;

/// Rundet jede Achse unabhängig auf das nächste Vielfache von `grid_size`.
///
/// Gleichstände runden zum größeren Vielfachen (round-half-up).
/// Bei nicht-positiver Rastergröße bleibt der Punkt unverändert.
pub fn snap_to_grid(point: Vec2, grid_size: f32) -> Vec2 {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return point;
    }

    Vec2::new(
        snap_axis(point.x, grid_size),
        snap_axis(point.y, grid_size),
    )
}

fn snap_axis(value: f32, grid_size: f32) -> f32 {
    (value / grid_size + 0.5).floor() * grid_size
}

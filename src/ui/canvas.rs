//! Zeichenfläche: Raster, Bauteile, Leitungen, Gummiband und Zeiger-Events.
//!
//! Weltkoordinaten entsprechen Bildschirmpunkten relativ zur linken oberen
//! Ecke der Zeichenfläche (keine Kamera, kein Zoom).

use glam::Vec2;

use super::color32;
use crate::app::AppIntent;
use crate::core::{Component, ComponentType};
use crate::shared::RenderScene;

/// Zeiger-Zustand der Zeichenfläche zwischen zwei Frames.
#[derive(Debug, Default)]
pub struct CanvasInput {
    last_pointer: Option<Vec2>,
}

impl CanvasInput {
    /// Erstellt einen neuen Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Zeiger-Events der Zeichenfläche als Intents.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let hover = response.hover_pos().map(|p| to_world(rect, p));
        if let Some(world_pos) = hover {
            if self.last_pointer != Some(world_pos) {
                events.push(AppIntent::CanvasPointerMoved { world_pos });
            }
        }
        self.last_pointer = hover;

        let pressed = ui.input(|i| i.pointer.primary_pressed());
        if pressed {
            if let Some(world_pos) = hover {
                events.push(AppIntent::CanvasPointerDown { world_pos });
            }
        }

        events
    }
}

fn to_world(rect: egui::Rect, screen: egui::Pos2) -> Vec2 {
    Vec2::new(screen.x - rect.min.x, screen.y - rect.min.y)
}

fn to_screen(rect: egui::Rect, world: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + world.x, rect.min.y + world.y)
}

/// Zeichnet die Render-Szene in die Zeichenfläche.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let options = &scene.options;

    if options.show_grid {
        paint_grid(painter, rect, options.grid_size, color32(options.grid_color));
    }

    let wire_stroke = egui::Stroke::new(options.wire_thickness, color32(options.wire_color));
    for wire in scene.document.wires() {
        painter.line_segment(
            [
                to_screen(rect, wire.start.position),
                to_screen(rect, wire.end.position),
            ],
            wire_stroke,
        );
    }

    for component in scene.document.components() {
        let selected = scene.selected_component_id == Some(component.id);
        paint_component(painter, rect, component, selected, scene);
    }

    if let Some(pending) = scene.pending_wire {
        painter.circle_stroke(
            to_screen(rect, pending.position),
            6.0,
            egui::Stroke::new(2.0, color32(options.rubber_band_color)),
        );
    }

    if let Some([from, to]) = scene.rubber_band {
        painter.line_segment(
            [to_screen(rect, from), to_screen(rect, to)],
            egui::Stroke::new(options.wire_thickness, color32(options.rubber_band_color)),
        );
    }

    if !scene.has_content() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Bauteil in der Toolbar wählen und auf die Fläche klicken",
            egui::FontId::proportional(20.0),
            egui::Color32::WHITE,
        );
    }
}

fn paint_grid(painter: &egui::Painter, rect: egui::Rect, grid_size: f32, color: egui::Color32) {
    if grid_size < 4.0 {
        return;
    }

    let mut y = 0.0;
    while y <= rect.height() {
        let mut x = 0.0;
        while x <= rect.width() {
            painter.circle_filled(egui::pos2(rect.min.x + x, rect.min.y + y), 1.0, color);
            x += grid_size;
        }
        y += grid_size;
    }
}

fn paint_component(
    painter: &egui::Painter,
    rect: egui::Rect,
    component: &Component,
    selected: bool,
    scene: &RenderScene,
) {
    let options = &scene.options;
    let body = egui::Rect::from_min_size(
        to_screen(rect, component.position),
        egui::vec2(component.size.x, component.size.y),
    );

    let outline = if selected {
        egui::Stroke::new(2.5, color32(options.selection_color))
    } else {
        egui::Stroke::new(1.5, color32(options.component_color))
    };
    painter.rect_stroke(body, 0.0, outline, egui::StrokeKind::Inside);

    painter.text(
        body.center(),
        egui::Align2::CENTER_CENTER,
        glyph_label(component),
        egui::FontId::proportional(12.0),
        color32(options.component_color),
    );

    for terminal in &component.terminals {
        painter.circle_filled(
            to_screen(rect, terminal.position),
            3.0,
            color32(options.terminal_color),
        );
    }
}

fn glyph_label(component: &Component) -> String {
    let symbol = match component.component_type() {
        ComponentType::Resistor => "R",
        ComponentType::VoltageSource => "V",
        ComponentType::Ground => "⏚",
        ComponentType::Inductor => "L",
        ComponentType::Capacitor => "C",
    };

    match component.value() {
        Some(value) => format!("{} {}{}", symbol, value, component.component_type().unit()),
        None => symbol.to_string(),
    }
}

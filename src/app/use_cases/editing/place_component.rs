//! Use-Case: Bauteil an einer Weltposition platzieren.

use crate::app::AppState;
use crate::core::{component_at, snap_to_grid, ComponentType, DocumentError};

/// Platziert ein Bauteil an der auf das Raster gezogenen Position.
///
/// Liegt unter dem Rohklick bereits ein Bauteil, passiert nichts (`Ok(None)`).
/// Überlappende Footprints sind erlaubt, geprüft wird nur der Klickpunkt.
pub fn place_component(
    state: &mut AppState,
    component_type: ComponentType,
    world_pos: glam::Vec2,
) -> Result<Option<u64>, DocumentError> {
    if let Some(hit) = component_at(&state.document, world_pos) {
        log::debug!(
            "Platzierung übersprungen: Bauteil {} liegt unter ({:.1}, {:.1})",
            hit.id,
            world_pos.x,
            world_pos.y
        );
        return Ok(None);
    }

    let position = snap_to_grid(world_pos, state.options.grid_size);
    let component = state.document_mut().create_component(component_type, position)?;
    let id = component.id;

    log::info!(
        "Bauteil {} ({}) platziert bei ({}, {})",
        id,
        component_type.as_str(),
        position.x,
        position.y
    );
    Ok(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn test_placement_snaps_to_grid() {
        let mut state = AppState::new();

        let id = place_component(&mut state, ComponentType::Resistor, Vec2::new(103.0, 97.0))
            .expect("Platzierung sollte gelingen")
            .expect("Bauteil sollte angelegt sein");

        let component = state.document.component(id).expect("Bauteil vorhanden");
        assert_relative_eq!(component.position.x, 100.0);
        assert_relative_eq!(component.position.y, 100.0);
    }

    #[test]
    fn test_click_on_existing_component_places_nothing() {
        let mut state = AppState::new();
        place_component(&mut state, ComponentType::Resistor, Vec2::new(100.0, 100.0))
            .expect("Platzierung sollte gelingen");

        let result = place_component(&mut state, ComponentType::Capacitor, Vec2::new(130.0, 120.0))
            .expect("kein Fehler erwartet");

        assert_eq!(result, None);
        assert_eq!(state.component_count(), 1);
    }

    #[test]
    fn test_second_ground_is_rejected() {
        let mut state = AppState::new();
        place_component(&mut state, ComponentType::Ground, Vec2::ZERO)
            .expect("erste Masse sollte gelingen");

        let err = place_component(&mut state, ComponentType::Ground, Vec2::new(300.0, 300.0))
            .expect_err("zweite Masse sollte abgelehnt werden");

        assert_eq!(err, DocumentError::DuplicateGround { existing: 0 });
        assert_eq!(state.component_count(), 1);
    }
}

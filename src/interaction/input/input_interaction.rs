use bevy::input::touch::Touch;
use bevy::prelude::*;
use smallvec::SmallVec;

use crate::core::system::system_order::InputCollectSet;

use super::pointer::{PointerEvent, PointerPhase};

/// Collects mouse and touch input into world-space [`PointerEvent`]s.
pub struct InputInteractionPlugin;

impl Plugin for InputInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerEvent>()
            .add_systems(Update, collect_pointer_events.in_set(InputCollectSet));
    }
}

/// Convert a window position (logical pixels, top-left origin) to world coordinates.
fn cursor_world_pos(camera_q: &Query<(&Camera, &GlobalTransform)>, screen_pos: Vec2) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?; // single camera assumption
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// Phase for the primary pointer this frame, given button edges and whether it moved.
pub fn pointer_phase(just_pressed: bool, held: bool, just_released: bool, moved: bool) -> Option<PointerPhase> {
    if just_pressed {
        Some(PointerPhase::Down)
    } else if just_released {
        Some(PointerPhase::Up)
    } else if held && moved {
        Some(PointerPhase::Moved)
    } else {
        None
    }
}

/// The finger that owns the current touch gesture.
///
/// Only this touch can move or release the projectile; other fingers ride along in the
/// batch after it and are ignored downstream.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PrimaryTouch {
    id: Option<u64>,
    last: Vec2,
}

impl PrimaryTouch {
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// This frame's batch in screen space, primary first, if the gesture advanced.
    pub fn advance(&mut self, touches: &Touches) -> Option<(PointerPhase, SmallVec<[Vec2; 4]>)> {
        let Some(id) = self.id else {
            let first = touches.iter_just_pressed().min_by_key(|t| t.id())?;
            self.id = Some(first.id());
            self.last = first.position();
            return Some((PointerPhase::Down, batch(first, touches.iter())));
        };
        if let Some(t) = touches.iter_just_released().find(|t| t.id() == id) {
            self.id = None;
            return Some((PointerPhase::Up, batch(t, touches.iter())));
        }
        let Some(t) = touches.get_pressed(id) else {
            // canceled
            self.id = None;
            return None;
        };
        if t.position() == self.last {
            return None;
        }
        self.last = t.position();
        Some((PointerPhase::Moved, batch(t, touches.iter())))
    }
}

/// Primary position, then the other fingers ordered by id.
fn batch<'a>(primary: &Touch, others: impl Iterator<Item = &'a Touch>) -> SmallVec<[Vec2; 4]> {
    let mut rest: SmallVec<[&Touch; 4]> = others.filter(|t| t.id() != primary.id()).collect();
    rest.sort_by_key(|t| t.id());
    let mut points = SmallVec::new();
    points.push(primary.position());
    points.extend(rest.into_iter().map(|t| t.position()));
    points
}

fn collect_pointer_events(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut primary_touch: Local<PrimaryTouch>,
    mut last_primary: Local<Option<Vec2>>,
    mut out: EventWriter<PointerEvent>,
) {
    // Touch takes precedence over the mouse while any finger is down or a gesture is open.
    let touch_gesture = primary_touch.advance(&touches);
    if touch_gesture.is_some() || primary_touch.id().is_some() || touches.iter().next().is_some() {
        let Some((phase, screen)) = touch_gesture else {
            return;
        };
        // a batch whose primary point misses the camera is dropped whole
        let Some(first) = cursor_world_pos(&camera_q, screen[0]) else {
            return;
        };
        let mut points: SmallVec<[Vec2; 4]> = SmallVec::new();
        points.push(first);
        points.extend(screen[1..].iter().filter_map(|p| cursor_world_pos(&camera_q, *p)));
        out.write(PointerEvent::new(phase, points));
        return;
    }

    let Ok(window) = windows_q.single() else {
        return;
    };
    let Some(world) = window
        .cursor_position()
        .and_then(|p| cursor_world_pos(&camera_q, p))
    else {
        return;
    };
    let moved = last_primary.is_some_and(|last| last != world);
    *last_primary = Some(world);
    if let Some(phase) = pointer_phase(
        buttons.just_pressed(MouseButton::Left),
        buttons.pressed(MouseButton::Left),
        buttons.just_released(MouseButton::Left),
        moved,
    ) {
        out.write(PointerEvent::new(phase, [world]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_wins_over_move() {
        assert_eq!(pointer_phase(true, true, false, true), Some(PointerPhase::Down));
        assert_eq!(pointer_phase(false, true, false, true), Some(PointerPhase::Moved));
        assert_eq!(pointer_phase(false, true, false, false), None);
        assert_eq!(pointer_phase(false, false, true, true), Some(PointerPhase::Up));
        assert_eq!(pointer_phase(false, false, false, true), None);
    }
}

use super::error::HudError;
use super::registry::OverlayRegistry;
use crate::geometry::{clamp_to_viewport, would_exit_viewport};

/// What the pointer is doing to the overlays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// The named group follows the pointer
    Dragging { group: String },
}

/// Drag, scroll and close handling for the layout editor.
///
/// The controller only remembers which group is being dragged; the registry
/// stays the owner of every group and is passed into each call.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Name of the group being dragged, if any.
    pub fn dragged(&self) -> Option<&str> {
        match &self.state {
            InteractionState::Dragging { group } => Some(group),
            InteractionState::Idle => None,
        }
    }

    /// Primary button pressed: start dragging the group under the pointer.
    ///
    /// Returns whether a drag started.
    pub fn pointer_down(&mut self, registry: &mut OverlayRegistry, x: i32, y: i32) -> bool {
        self.pointer_up(registry);

        let Some(name) = registry.group_at(x, y).map(|group| group.name().to_string()) else {
            return false;
        };

        if let Some(group) = registry.get_mut(&name) {
            group.set_dragging(true);
        }
        tracing::debug!("Dragging overlay '{}'", name);
        self.state = InteractionState::Dragging { group: name };
        true
    }

    /// Pointer moved by `(dx, dy)` while the primary button is held.
    ///
    /// A move that would cross the screen inset is not applied; the group
    /// snaps back to its last good position instead, kept on screen.
    pub fn pointer_moved(&mut self, registry: &mut OverlayRegistry, dx: i32, dy: i32) {
        let InteractionState::Dragging { group: name } = &self.state else {
            return;
        };

        let viewport = registry.viewport();
        let Some(group) = registry.get_mut(name) else {
            self.state = InteractionState::Idle;
            return;
        };

        let rect = group.rectangle();
        let (proposed_x, proposed_y) = (rect.x + dx, rect.y + dy);

        if would_exit_viewport(&rect, proposed_x, proposed_y, viewport) {
            let (last_x, last_y) = group.last_good_position();
            group.set_rectangle(clamp_to_viewport(&rect.at(last_x, last_y), viewport));
        } else {
            group.move_to(proposed_x, proposed_y);
            group.remember_position();
        }
    }

    /// Primary button released: the drag ends where it is.
    pub fn pointer_up(&mut self, registry: &mut OverlayRegistry) {
        if let InteractionState::Dragging { group } = std::mem::take(&mut self.state) {
            if let Some(group) = registry.get_mut(&group) {
                group.set_dragging(false);
            }
        }
    }

    /// Scroll over the screen: rescale the dragged group, or the group under
    /// the pointer when idle.
    ///
    /// Returns whether a scale changed.
    pub fn scroll(&mut self, registry: &mut OverlayRegistry, x: i32, y: i32, delta: f64) -> bool {
        let target = match &self.state {
            InteractionState::Dragging { group } => Some(group.clone()),
            InteractionState::Idle => registry.group_at(x, y).map(|group| group.name().to_string()),
        };

        match target {
            Some(name) => registry.rescale(&name, delta),
            None => false,
        }
    }

    /// Editor closed: end any drag and save every group.
    pub fn close(&mut self, registry: &mut OverlayRegistry) -> Vec<HudError> {
        self.pointer_up(registry);
        registry.save_all()
    }
}

use super::error::HudError;
use super::group::{stepped_scale, OverlayGroup};
use super::layout::measure_group;
use crate::geometry::{clamp_to_viewport, Rectangle, Viewport};
use crate::host::Host;
use crate::keystroke::{InputId, Widget};
use crate::placement::find_placement;
use crate::save::{OverlayStore, Saveable};
use crate::settings::HudSettings;

/// Most overlays that may exist at once (the default one included).
pub const MAX_OVERLAYS: usize = 5;

/// Outcome of reading the store at startup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    /// Record ids that could not be read and were removed from the store
    pub discarded: Vec<String>,
}

/// Owns every live overlay and keeps the store in step with them.
///
/// Groups are kept in registration order, which is also the order used for
/// hit testing and drawing. Exactly one non-custom group exists once
/// [`OverlayRegistry::ensure_default`] has run.
pub struct OverlayRegistry {
    groups: Vec<OverlayGroup>,
    store: Box<dyn OverlayStore>,
    host: Host,
}

impl OverlayRegistry {
    pub fn new(store: impl OverlayStore + 'static, host: Host) -> Self {
        OverlayRegistry {
            groups: Vec::new(),
            store: Box::new(store),
            host,
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn store(&self) -> &dyn OverlayStore {
        self.store.as_ref()
    }

    pub fn viewport(&self) -> Viewport {
        self.host.viewport.current_size()
    }

    pub fn groups(&self) -> &[OverlayGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Looks a group up by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&OverlayGroup> {
        self.groups.iter().find(|group| group.name_matches(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut OverlayGroup> {
        self.groups.iter_mut().find(|group| group.name_matches(name))
    }

    /// First group matching `predicate`, in registration order.
    pub fn find(&self, predicate: impl Fn(&OverlayGroup) -> bool) -> Option<&OverlayGroup> {
        self.groups.iter().find(|group| predicate(group))
    }

    /// The group a widget was registered in.
    pub fn owner_of(&self, widget: &Widget) -> Option<&OverlayGroup> {
        widget.owner().and_then(|name| self.get(name))
    }

    /// Reads every stored group. Unreadable records are deleted and skipped.
    pub fn load_all(&mut self) -> LoadReport {
        let mut report = LoadReport::default();

        let ids = match self.store.list() {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!("Could not list stored overlays: {}", err);
                return report;
            }
        };

        for id in ids {
            let group = self
                .store
                .read(&id)
                .and_then(|bytes| OverlayGroup::from_save_bytes(&bytes));

            match group {
                Ok(group) => match self.register(group) {
                    Ok(_) => report.loaded += 1,
                    Err(err) => tracing::warn!("Skipping stored overlay '{}': {}", id, err),
                },
                Err(err) => {
                    tracing::warn!("Discarding unreadable overlay '{}': {}", id, err);
                    self.store.delete(&id);
                    report.discarded.push(id);
                }
            }
        }

        tracing::info!(
            "Loaded {} overlays ({} discarded)",
            report.loaded,
            report.discarded.len()
        );
        report
    }

    /// Loads the store and makes sure the default group exists.
    pub fn initialize(&mut self) -> LoadReport {
        let report = self.load_all();
        self.ensure_default();
        report
    }

    pub fn default_group(&self) -> Option<&OverlayGroup> {
        self.groups.iter().find(|group| !group.is_custom())
    }

    /// Returns the default group, creating it first if needed.
    pub fn ensure_default(&mut self) -> &OverlayGroup {
        let index = match self.groups.iter().position(|group| !group.is_custom()) {
            Some(index) => index,
            None => {
                tracing::debug!("Creating the default overlay");
                let mut group = OverlayGroup::default_layout();
                group.assign_owner();
                self.groups.push(group);
                self.groups.len() - 1
            }
        };
        &self.groups[index]
    }

    /// Adds a group and points its widgets back at it.
    ///
    /// Names are unique ignoring case, and only one non-custom group may
    /// exist.
    pub fn register(&mut self, mut group: OverlayGroup) -> Result<&OverlayGroup, HudError> {
        let clashes = self.get(group.name()).is_some()
            || (!group.is_custom() && self.default_group().is_some());
        if clashes {
            return Err(HudError::DuplicateName(group.name().to_string()));
        }

        group.assign_owner();
        self.groups.push(group);
        Ok(&self.groups[self.groups.len() - 1])
    }

    /// Creates a one-key custom group for `input` at the first free spot.
    ///
    /// Nothing changes when the overlay limit is reached, the input is
    /// already shown somewhere, or no free spot exists.
    pub fn create_from_binding(&mut self, input: InputId) -> Result<&OverlayGroup, HudError> {
        if self.groups.len() >= MAX_OVERLAYS {
            return Err(HudError::OverlayLimitReached(MAX_OVERLAYS));
        }
        if self.is_input_busy(&input) {
            return Err(HudError::InputBusy(input));
        }

        let mut group =
            OverlayGroup::for_binding(input, self.host.inputs.as_ref(), self.host.text.as_ref());

        let existing: Vec<Rectangle> = self.groups.iter().map(OverlayGroup::rectangle).collect();
        let placed = find_placement(group.rectangle(), &existing, self.viewport())
            .ok_or(HudError::PlacementExhausted)?;

        group.set_rectangle(placed);
        group.remember_position();
        tracing::info!("Created overlay '{}' at ({}, {})", group.name(), placed.x, placed.y);

        self.register(group)
    }

    /// Removes a group from the live set and the store.
    ///
    /// The default group is never deleted; returns whether anything was
    /// removed.
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(index) = self.groups.iter().position(|group| group.name_matches(name)) else {
            return false;
        };

        if !self.groups[index].is_custom() {
            tracing::debug!("Refusing to delete the default overlay");
            return false;
        }

        let group = self.groups.remove(index);
        self.store.delete(&group.record_id());
        tracing::info!("Deleted overlay '{}'", group.name());
        true
    }

    /// Writes one group to the store.
    ///
    /// A failed write leaves the in-memory group untouched; the next save
    /// tries again.
    pub fn save(&mut self, name: &str) -> Result<(), HudError> {
        let group = self
            .groups
            .iter()
            .find(|group| group.name_matches(name))
            .ok_or_else(|| HudError::UnknownOverlay(name.to_string()))?;

        let id = group.record_id();
        let written = group
            .to_save_bytes()
            .and_then(|bytes| self.store.write(&id, &bytes));

        written.map_err(|source| {
            tracing::error!("Failed to save overlay '{}': {}", id, source);
            HudError::PersistenceWriteFailed {
                name: name.to_string(),
                source,
            }
        })
    }

    /// Saves every group, returning the failures.
    pub fn save_all(&mut self) -> Vec<HudError> {
        let names: Vec<String> = self.groups.iter().map(|g| g.name().to_string()).collect();

        names
            .iter()
            .filter_map(|name| self.save(name).err())
            .collect()
    }

    /// Whether any widget of any group is bound to `input`.
    pub fn is_input_busy(&self, input: &InputId) -> bool {
        self.groups.iter().any(|group| group.has_binding(input))
    }

    /// First group whose rectangle contains the point.
    pub fn group_at(&self, x: i32, y: i32) -> Option<&OverlayGroup> {
        self.groups.iter().find(|group| group.rectangle().contains(x, y))
    }

    /// Resizes every group to its widgets and pushes it back on screen.
    pub fn refresh_layouts(&mut self, settings: &HudSettings) {
        let viewport = self.viewport();

        for group in &mut self.groups {
            let layout = measure_group(group, settings);
            let sized = Rectangle {
                width: layout.width,
                height: layout.height,
                ..group.rectangle()
            };
            group.set_rectangle(clamp_to_viewport(&sized, viewport));
        }
    }

    /// Moves a group's scale one scroll step; `false` if it would leave the
    /// allowed range (or the group doesn't exist).
    pub fn rescale(&mut self, name: &str, delta: f64) -> bool {
        let Some(group) = self.groups.iter_mut().find(|group| group.name_matches(name)) else {
            return false;
        };
        let Some(scale) = stepped_scale(group.scale(), delta) else {
            return false;
        };

        group.apply_scale(scale, self.host.inputs.as_ref(), self.host.text.as_ref());
        true
    }
}

//! The placement session: owns the placed objects, the room, snap settings
//! and the drag state machine, and exposes the operations the UI calls.

use crate::constants::{ADD_COOLDOWN, OBJECT_PALETTE, SPAWN_STEP};
use crate::drag::{DragSession, DragState};
use crate::error::{PlacementError, Result};
use crate::furniture::{Dimensions, FurnitureKind};
use crate::input::InteractionGate;
use crate::object::{ObjectId, PlaceableObject};
use crate::picking::{pick_floor, pick_object, Ray};
use crate::room::Room;
use crate::snap::{self, Neighbor, SnapConfig, TieBreak};
use crate::units::Unit;
use glam::{Vec2, Vec3};
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub cooldown: Duration,
    pub spawn_step: f32,
    pub snap: SnapConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cooldown: ADD_COOLDOWN,
            spawn_step: SPAWN_STEP,
            snap: SnapConfig::default(),
        }
    }
}

pub struct PlacementEngine {
    room: Room,
    unit: Unit,
    config: EngineConfig,
    objects: Vec<PlaceableObject>,
    drag: DragState,
    selected: Option<ObjectId>,
    next_id: u32,
    palette_index: usize,
    // adds since the last clear; drives the spawn offset
    spawned: u32,
    last_added: Option<Instant>,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(Room::default(), EngineConfig::default())
    }
}

impl PlacementEngine {
    pub fn new(room: Room, config: EngineConfig) -> Self {
        Self {
            room,
            unit: Unit::Metric,
            config,
            objects: Vec::new(),
            drag: DragState::Idle,
            selected: None,
            next_id: 1,
            palette_index: 0,
            spawned: 0,
            last_added: None,
        }
    }

    // ---------------- Queries ----------------

    #[inline]
    pub fn room(&self) -> Room {
        self.room
    }

    #[inline]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[inline]
    pub fn snap_config(&self) -> &SnapConfig {
        &self.config.snap
    }

    #[inline]
    pub fn objects(&self) -> &[PlaceableObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&PlaceableObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    #[inline]
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[inline]
    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag.session()
    }

    /// True while a drag is in progress or an object is selected; the
    /// camera must stay still in that case.
    pub fn is_interaction_active(&self) -> bool {
        self.drag.is_dragging() || self.selected.is_some()
    }

    /// Time left before another object may be added, if any.
    pub fn cooldown_remaining(&self, now: Instant) -> Option<Duration> {
        let last = self.last_added?;
        let elapsed = if now > last { now - last } else { Duration::ZERO };
        (elapsed < self.config.cooldown).then(|| self.config.cooldown - elapsed)
    }

    // ---------------- Settings ----------------

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.config.snap.enabled = enabled;
        log::info!(
            "[snap] enabled={} increment={:.3}",
            enabled,
            self.config.snap.grid_increment()
        );
    }

    pub fn toggle_snap(&mut self) -> bool {
        let enabled = !self.config.snap.enabled;
        self.set_snap_enabled(enabled);
        enabled
    }

    /// Returns false when `increment` is rejected (zero, negative, NaN).
    pub fn set_grid_increment(&mut self, increment: f32) -> bool {
        let ok = self.config.snap.set_grid_increment(increment);
        if !ok {
            log::warn!("[snap] ignoring grid increment {}", increment);
        }
        ok
    }

    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.config.snap.tie_break = tie_break;
    }

    /// Switch the display unit; the grid increment follows, stored positions
    /// are untouched.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
        self.config.snap.set_unit(unit);
        log::info!(
            "[units] {} (grid {:.4}m)",
            unit,
            self.config.snap.grid_increment()
        );
    }

    /// Replace the room and drop every object the new walls cut through.
    /// Returns the removed ids.
    pub fn resize_room(&mut self, room: Room) -> Vec<ObjectId> {
        self.room = room;
        let removed: Vec<ObjectId> = self
            .objects
            .iter()
            .filter(|o| !room.contains_footprint(o.floor_position(), o.half_footprint()))
            .map(|o| o.id())
            .collect();
        for id in &removed {
            self.remove_object(*id);
        }
        log::info!(
            "[room] resized to {}x{}x{}, removed {} object(s)",
            room.width,
            room.length,
            room.height,
            removed.len()
        );
        removed
    }

    // ---------------- Creation / removal ----------------

    /// Add an object of `kind`; `dims` overrides the template defaults.
    /// Footprints that cannot fit inside the room are rejected.
    pub fn try_add_object_at(
        &mut self,
        kind: FurnitureKind,
        dims: Option<Dimensions>,
        now: Instant,
    ) -> Result<ObjectId> {
        if let Some(left) = self.cooldown_remaining(now) {
            return Err(PlacementError::CoolingDown {
                remaining_ms: left.as_millis() as u64,
            });
        }
        let dims = dims.unwrap_or_else(|| kind.default_dimensions()).validate()?;
        if !self
            .room
            .contains_footprint(Vec2::ZERO, dims.half_footprint())
        {
            return Err(PlacementError::DoesNotFit {
                width: dims.width,
                depth: dims.depth,
                room_width: self.room.width,
                room_length: self.room.length,
            });
        }

        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let color = OBJECT_PALETTE[self.palette_index % OBJECT_PALETTE.len()];
        self.palette_index += 1;

        let mut obj = PlaceableObject::new(id, kind, dims, color);
        let offset = self.spawned as f32 * self.config.spawn_step;
        self.spawned += 1;
        let start = snap::clamp_to_room(Vec2::splat(offset), dims.half_footprint(), &self.room);
        obj.set_floor_position(start);
        self.objects.push(obj);
        self.last_added = Some(now);

        log::info!(
            "[place] added {} {} ({} total)",
            kind,
            id,
            self.objects.len()
        );
        Ok(id)
    }

    /// Logging variant of [`Self::try_add_object_at`]: failures are reported
    /// as `None` and leave the engine untouched.
    pub fn add_object_at(
        &mut self,
        kind: FurnitureKind,
        dims: Option<Dimensions>,
        now: Instant,
    ) -> Option<ObjectId> {
        match self.try_add_object_at(kind, dims, now) {
            Ok(id) => Some(id),
            Err(PlacementError::CoolingDown { remaining_ms }) => {
                log::info!(
                    "[place] please wait before adding another piece ({} ms)",
                    remaining_ms
                );
                None
            }
            Err(e) => {
                log::warn!("[place] {}", e);
                None
            }
        }
    }

    pub fn add_object(&mut self, kind: FurnitureKind, dims: Option<Dimensions>) -> Option<ObjectId> {
        self.add_object_at(kind, dims, Instant::now())
    }

    /// Like [`Self::add_object_at`] but with the kind given by name.
    pub fn add_named_at(
        &mut self,
        kind: &str,
        dims: Option<Dimensions>,
        now: Instant,
    ) -> Option<ObjectId> {
        match kind.parse::<FurnitureKind>() {
            Ok(kind) => self.add_object_at(kind, dims, now),
            Err(e) => {
                log::warn!("[place] {}", e);
                None
            }
        }
    }

    pub fn add_named(&mut self, kind: &str, dims: Option<Dimensions>) -> Option<ObjectId> {
        self.add_named_at(kind, dims, Instant::now())
    }

    /// Remove one object. Selection and drag state pointing at it go too.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        let Some(idx) = self.objects.iter().position(|o| o.id() == id) else {
            return false;
        };
        self.objects.remove(idx);
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.drag.holds(id) {
            self.drag = DragState::Idle;
        }
        log::info!("[place] removed {}", id);
        true
    }

    pub fn remove_selected(&mut self) -> Option<ObjectId> {
        let id = self.selected?;
        self.remove_object(id).then_some(id)
    }

    /// Clear every object and reset the palette rotation and the add cooldown.
    pub fn remove_all_objects(&mut self) {
        self.objects.clear();
        self.drag = DragState::Idle;
        self.selected = None;
        self.palette_index = 0;
        self.spawned = 0;
        self.last_added = None;
        log::info!("[place] all objects cleared");
    }

    pub fn clear_selection(&mut self) {
        for o in &mut self.objects {
            o.set_selected(false);
        }
        self.selected = None;
        self.drag = DragState::Idle;
    }

    // ---------------- Drag state machine ----------------

    /// Deselect everything, then grab the nearest object under `ray`.
    pub fn pointer_down(&mut self, ray: &Ray) -> Option<ObjectId> {
        // a lost pointer-up leaves a stale session; it ends here
        self.clear_selection();

        let hit = pick_object(ray, &self.objects)?;
        let obj = self.objects.iter_mut().find(|o| o.id() == hit.id)?;
        obj.set_selected(true);
        self.selected = Some(hit.id);
        self.drag = DragState::Dragging(DragSession::grab(hit.id, obj.position(), hit.point));
        log::debug!("[drag] begin on {}", hit.id);
        Some(hit.id)
    }

    /// Move the grabbed object to follow `ray` across the floor. Returns the
    /// new position, or `None` when nothing moved.
    pub fn pointer_move(&mut self, ray: &Ray) -> Option<Vec3> {
        let session = self.drag.session()?;
        let Some(idx) = self.objects.iter().position(|o| o.id() == session.object) else {
            log::warn!("[drag] {} no longer exists; ending drag", session.object);
            self.drag = DragState::Idle;
            return None;
        };
        let floor = pick_floor(ray)?;

        let half = self.objects[idx].half_footprint();
        let neighbors = self
            .objects
            .iter()
            .filter(|o| o.id() != session.object)
            .map(|o| Neighbor {
                center: o.floor_position(),
                half: o.half_footprint(),
            });
        let target = snap::resolve(
            session.provisional(floor),
            half,
            neighbors,
            &self.config.snap,
            &self.room,
        );

        let obj = &mut self.objects[idx];
        obj.set_floor_position(target);
        Some(obj.position())
    }

    /// End the drag; the object stays selected. Returns whether a drag ended.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.drag.is_dragging();
        if let Some(s) = self.drag.session() {
            log::debug!("[drag] end on {}", s.object);
        }
        self.drag = DragState::Idle;
        was_dragging
    }
}

impl InteractionGate for PlacementEngine {
    fn is_interaction_active(&self) -> bool {
        PlacementEngine::is_interaction_active(self)
    }
}

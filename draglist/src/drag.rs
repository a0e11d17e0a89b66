use crate::DragPhase;

/// Snapshot of a drag session.
///
/// `accumulated_distance` is the signed sum of per-move deltas since the session started,
/// i.e. the live displacement of the active item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragState<K> {
    pub phase: DragPhase,
    pub active_item: Option<K>,
    pub base_pointer_y: f32,
    pub last_pointer_y: f32,
    pub accumulated_distance: f32,
}

impl<K> Default for DragState<K> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<K> DragState<K> {
    pub fn idle() -> Self {
        Self {
            phase: DragPhase::Idle,
            active_item: None,
            base_pointer_y: 0.0,
            last_pointer_y: 0.0,
            accumulated_distance: 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Returns the live displacement for `id`: the accumulated distance when `id` is the
    /// active item of a running session, `None` otherwise.
    pub fn displacement_of(&self, id: &K) -> Option<f32>
    where
        K: PartialEq,
    {
        match (&self.phase, &self.active_item) {
            (DragPhase::Dragging, Some(active)) if active == id => Some(self.accumulated_distance),
            _ => None,
        }
    }
}

/// Two-state tracker (`Idle`, `Dragging`) for a single pointer's vertical drag.
///
/// Every transition is total: `move_to`/`end` while idle are no-ops, and `start` while
/// dragging begins a fresh session. A move that arrives after `end` therefore cannot
/// resurrect the session it belonged to.
#[derive(Clone, Debug)]
pub struct DragSession<K> {
    state: DragState<K>,
    generation: u64,
}

impl<K> Default for DragSession<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DragSession<K> {
    pub fn new() -> Self {
        Self {
            state: DragState::idle(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &DragState<K> {
        &self.state
    }

    pub fn phase(&self) -> DragPhase {
        self.state.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn active_item(&self) -> Option<&K> {
        self.state.active_item.as_ref()
    }

    pub fn accumulated_distance(&self) -> f32 {
        self.state.accumulated_distance
    }

    /// Number of sessions started so far. Each `start` opens a new generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a session on `id`, replacing any running one.
    ///
    /// Returns `false` (and keeps the current state) for a non-finite pointer coordinate.
    pub fn start(&mut self, id: K, pointer_y: f32) -> bool {
        if !pointer_y.is_finite() {
            dwarn!(pointer_y, "DragSession::start: non-finite pointer coordinate");
            return false;
        }
        ddebug!(
            pointer_y,
            restarted = self.state.is_dragging(),
            generation = self.generation.wrapping_add(1),
            "DragSession::start"
        );
        self.generation = self.generation.wrapping_add(1);
        self.state = DragState {
            phase: DragPhase::Dragging,
            active_item: Some(id),
            base_pointer_y: pointer_y,
            last_pointer_y: pointer_y,
            accumulated_distance: 0.0,
        };
        true
    }

    /// Adds `pointer_y - last_pointer_y` to the accumulated distance.
    ///
    /// Returns the applied delta, or `None` when idle or when the coordinate is not finite.
    pub fn move_to(&mut self, pointer_y: f32) -> Option<f32> {
        if !self.state.is_dragging() {
            dtrace!(pointer_y, "DragSession::move_to: idle, ignored");
            return None;
        }
        if !pointer_y.is_finite() {
            dwarn!(pointer_y, "DragSession::move_to: non-finite pointer coordinate");
            return None;
        }
        let delta = pointer_y - self.state.last_pointer_y;
        self.state.accumulated_distance += delta;
        self.state.last_pointer_y = pointer_y;
        dtrace!(
            pointer_y,
            delta,
            distance = self.state.accumulated_distance,
            "DragSession::move_to"
        );
        Some(delta)
    }

    /// Ends the running session. Returns `false` when already idle.
    pub fn end(&mut self) -> bool {
        if !self.state.is_dragging() {
            return false;
        }
        ddebug!(
            distance = self.state.accumulated_distance,
            generation = self.generation,
            "DragSession::end"
        );
        self.state = DragState::idle();
        true
    }
}

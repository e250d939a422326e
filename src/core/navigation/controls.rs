/// Held keys sampled once per display tick, plus one-shot edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationControlsSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub reset_view_edge: bool,
}

use alloc::string::ToString;

use crate::domain::RobotState;
use crate::surface::{Readout, RenderSurface};

/// Keeps a render surface in line with the latest robot snapshot.
///
/// Holds no robot state of its own; whatever was drawn last lives in the
/// surface.
pub struct ViewSync<S: RenderSurface> {
    surface: S,
}

impl<S: RenderSurface> ViewSync<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Build the view and paint `initial` straight away.
    pub fn with_initial(surface: S, initial: &RobotState) -> Self {
        let mut view = Self::new(surface);
        view.apply(initial);
        view
    }

    /// Move the marker to `state` and refresh the readouts.
    ///
    /// Returns `false` when the target cell does not exist. The readouts are
    /// still updated in that case, so they can disagree with the grid.
    pub fn apply(&mut self, state: &RobotState) -> bool {
        for id in self.surface.active_cells() {
            self.surface.clear_marker(&id);
        }

        let target = state.position.cell_id();
        let drawn = self.surface.place_marker(&target, state.heading.glyph());

        self.surface
            .set_readout(Readout::PosX, &state.position.x.to_string());
        self.surface
            .set_readout(Readout::PosY, &state.position.y.to_string());
        self.surface
            .set_readout(Readout::Heading, state.heading.label());
        drawn
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

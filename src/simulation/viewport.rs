use crate::constants::{
    GROUND_LINE_NORM, HORIZONTAL_COMPRESSION, NOZZLE_TOP_NORM, PHYS_RANGE_BOTTOM, PHYS_RANGE_TOP,
};

/// Affine map from physical coordinates to normalized screen space.
/// Physical heights [0.25 m, 1.0 m] span the vertical band between the
/// ground line and the nozzle top; screen y grows downward.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub ground_line: f64,
    pub nozzle_top: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            ground_line: GROUND_LINE_NORM,
            nozzle_top: NOZZLE_TOP_NORM,
        }
    }
}

impl Viewport {
    fn vertical_scale(&self) -> f64 {
        (self.ground_line - self.nozzle_top) / (PHYS_RANGE_TOP - PHYS_RANGE_BOTTOM)
    }

    pub fn screen_y(&self, phys_y: f64) -> f64 {
        self.ground_line - (phys_y - PHYS_RANGE_BOTTOM) * self.vertical_scale()
    }

    /// Horizontal displacement is visually compressed by a fixed factor.
    pub fn screen_x(&self, start_x: f64, displacement: f64, direction_sign: f64) -> f64 {
        start_x + displacement * HORIZONTAL_COMPRESSION * direction_sign
    }

    /// Screen row splashes and impacted droplets are pinned to.
    pub fn ground_row(&self) -> f64 {
        self.ground_line
    }
}

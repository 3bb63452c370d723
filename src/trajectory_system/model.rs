use crate::constants::{GRAVITY, LINEAR_DRAG_COEFFICIENT};

/// Which closed-form solution family applies to a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRegime {
    Ballistic,
    LinearDrag,
}

#[derive(Debug, Clone, Copy)]
pub struct BallisticState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl BallisticState {
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

pub fn launch_components(angle_rad: f64, speed: f64) -> (f64, f64) {
    (speed * angle_rad.cos(), speed * angle_rad.sin())
}

/// Flight state `t` seconds after release from height `h0`.
///
/// Both the closed-form solver and the per-frame particle evaluation read
/// from this one function, so the two can never drift apart.
pub fn flight_state(
    regime: DragRegime,
    h0: f64,
    angle_rad: f64,
    speed: f64,
    t: f64,
) -> BallisticState {
    let (vx0, vy0) = launch_components(angle_rad, speed);
    match regime {
        DragRegime::Ballistic => BallisticState {
            x: vx0 * t,
            y: h0 + vy0 * t - 0.5 * GRAVITY * t * t,
            vx: vx0,
            vy: vy0 - GRAVITY * t,
        },
        DragRegime::LinearDrag => {
            let beta = LINEAR_DRAG_COEFFICIENT;
            let decay = (-beta * t).exp();
            let terminal = GRAVITY / beta;
            BallisticState {
                x: vx0 / beta * (1.0 - decay),
                y: h0 + (vy0 + terminal) / beta * (1.0 - decay) - terminal * t,
                vx: vx0 * decay,
                vy: (vy0 + terminal) * decay - terminal,
            }
        }
    }
}

/// Time of the highest point of the flight. Zero when the launch is level
/// or already descending, in which case the release height is the apex.
pub fn apex_time(regime: DragRegime, vy0: f64) -> f64 {
    if vy0 <= 0.0 {
        return 0.0;
    }
    match regime {
        DragRegime::Ballistic => vy0 / GRAVITY,
        DragRegime::LinearDrag => {
            let beta = LINEAR_DRAG_COEFFICIENT;
            -(GRAVITY / (GRAVITY + beta * vy0)).ln() / beta
        }
    }
}

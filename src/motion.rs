use crate::constants::*;
use glam::Vec2;

/// Logical (CSS-unit) surface dimensions, as established by the surface
/// adapter. Recomputed on every resize; read each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn base_radius(&self) -> f32 {
        self.width.min(self.height) * BASE_RADIUS_FRACTION
    }
}

/// Which of the two gradient palettes the renderer uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Primary,
    Alternate,
}

impl ColorMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Primary => ColorMode::Alternate,
            ColorMode::Alternate => ColorMode::Primary,
        }
    }
}

/// Where a retarget command came from. Reduced motion suppresses the mouse
/// path only; the touch path stays live (preserved source asymmetry, see
/// DESIGN notes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Input effects on the motion state, produced by the event layer and
/// applied synchronously. Keeps the input tracker free of drawing concerns.
#[derive(Clone, Copy, Debug)]
pub enum Command {
    Retarget { point: Vec2, source: PointerSource },
    Release,
    Pulse { at_sec: f64 },
    ToggleMode,
}

/// The per-frame mutable state of the blob: where it is, where it is headed,
/// how large it is, and any live pulse.
#[derive(Clone, Debug)]
pub struct MotionState {
    pub position: Vec2,
    pub target: Vec2,
    pub radius: f32,
    pub base_radius: f32,
    pub pulse_phase: f32,
    pub pulse_started: Option<f64>,
    pub color_mode: ColorMode,
    pub pointer_active: bool,
}

impl MotionState {
    /// State at mount: resting at the surface center, no pulse, primary mode.
    pub fn new(surface: SurfaceSize) -> Self {
        let center = surface.center();
        let base = surface.base_radius();
        Self {
            position: center,
            target: center,
            radius: base,
            base_radius: base,
            pulse_phase: 0.0,
            pulse_started: None,
            color_mode: ColorMode::Primary,
            pointer_active: false,
        }
    }

    /// Apply one input command. Runs synchronously with event delivery and
    /// never mid-frame, so no partial state is observable.
    pub fn apply(&mut self, cmd: Command, reduced_motion: bool, surface: SurfaceSize) {
        match cmd {
            Command::Retarget { point, source } => {
                if reduced_motion && source == PointerSource::Mouse {
                    return;
                }
                self.target = point;
                self.pointer_active = true;
            }
            Command::Release => {
                self.pointer_active = false;
                self.target = surface.center();
            }
            Command::Pulse { at_sec } => {
                self.pulse_phase = 1.0;
                self.pulse_started = Some(at_sec);
            }
            Command::ToggleMode => {
                self.color_mode = self.color_mode.toggled();
            }
        }
    }

    /// Advance one animation frame. `now_sec` is the high-resolution clock;
    /// only the pulse decay consumes absolute time, so the first frame needs
    /// no dt bookkeeping. Easing is per-frame by design (frame-rate-coupled).
    pub fn step(&mut self, now_sec: f64, surface: SurfaceSize, reduced_motion: bool) {
        // Reading dimensions every frame picks up resizes without a
        // dedicated callback path.
        self.base_radius = surface.base_radius();

        let ease = if reduced_motion {
            EASE_POSITION_REDUCED
        } else {
            EASE_POSITION
        };
        self.position += (self.target - self.position) * ease;

        let stretch = if self.pointer_active {
            self.position.distance(self.target).min(STRETCH_MAX)
        } else {
            0.0
        };
        let radius_target = self.base_radius + stretch;
        self.radius += (radius_target - self.radius) * EASE_RADIUS;

        if let Some(started) = self.pulse_started {
            let elapsed = (now_sec - started).max(0.0);
            self.pulse_phase = (1.0 - elapsed * PULSE_DECAY_PER_SEC).max(0.0) as f32;
            if self.pulse_phase == 0.0 {
                self.pulse_started = None;
            }
        }
    }

    /// Radius the renderer actually draws: the eased radius plus the pulse
    /// swell (up to 28% at full phase).
    #[inline]
    pub fn visual_radius(&self) -> f32 {
        self.radius * (1.0 + PULSE_SWELL * self.pulse_phase)
    }
}

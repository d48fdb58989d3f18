//! Frame sequencing for palette cycling.
//!
//! The animator never touches pixels. Each [`Animator::tick`] says which
//! rotation of the colour table to show and how far it is faded; composing
//! the frame is left to the caller.

use tracing::debug;

use crate::core::animation::view_state::ViewState;
use crate::core::palettes::colour_table::TABLE_SIZE;

pub const DEFAULT_FADE_FRAMES: u32 = 60;
pub const DEFAULT_NORMAL_FRAMES: u32 = 1200;

/// What to show for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub state: ViewState,
    /// Colour table rotation, always below 256.
    pub offset: usize,
    /// Brightness in `[0, 1]`.
    pub fade: f64,
}

#[derive(Debug, Clone)]
pub struct Animator {
    state: ViewState,
    counter: u64,
    phase_ticks: u32,
    fade_frames: u32,
    normal_frames: u32,
    scene_ready: bool,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_FRAMES, DEFAULT_NORMAL_FRAMES)
    }
}

impl Animator {
    /// Zero frame counts are raised to one so every state is shown at least once.
    #[must_use]
    pub fn new(fade_frames: u32, normal_frames: u32) -> Self {
        Self {
            state: ViewState::Calc,
            counter: 0,
            phase_ticks: 0,
            fade_frames: fade_frames.max(1),
            normal_frames: normal_frames.max(1),
            scene_ready: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn counter(&self) -> u64 {
        self.counter
    }

    #[must_use]
    pub fn fade_frames(&self) -> u32 {
        self.fade_frames
    }

    #[must_use]
    pub fn normal_frames(&self) -> u32 {
        self.normal_frames
    }

    /// True while the animator sits in `Calc` without a scene to show.
    #[must_use]
    pub fn needs_scene(&self) -> bool {
        self.state == ViewState::Calc && !self.scene_ready
    }

    /// Marks the new scene as computed; the next tick starts fading it in.
    pub fn scene_ready(&mut self) {
        self.scene_ready = true;
    }

    pub fn tick(&mut self) -> FrameState {
        if self.state == ViewState::Calc {
            if !self.scene_ready {
                return FrameState {
                    state: ViewState::Calc,
                    offset: 0,
                    fade: 0.0,
                };
            }
            self.scene_ready = false;
            self.enter(ViewState::FadeIn);
        }

        self.counter += 1;
        self.phase_ticks += 1;

        let progress = f64::from(self.phase_ticks) / f64::from(self.fade_frames);
        let fade = match self.state {
            ViewState::FadeIn => progress.min(1.0),
            ViewState::FadeOut => (1.0 - progress).max(0.0),
            ViewState::Normal | ViewState::Calc => 1.0,
        };
        let frame = FrameState {
            state: self.state,
            offset: (self.counter % TABLE_SIZE as u64) as usize,
            fade,
        };

        let phase_length = match self.state {
            ViewState::Normal => self.normal_frames,
            _ => self.fade_frames,
        };
        if self.phase_ticks >= phase_length {
            self.enter(self.state.next());
        }

        frame
    }

    fn enter(&mut self, state: ViewState) {
        debug!(from = %self.state, to = %state, counter = self.counter, "view state change");

        self.state = state;
        self.phase_ticks = 0;
        if state == ViewState::Calc {
            self.counter = 0;
        }
    }
}

//! Animation lifecycle.
//!
//! The site runs one set of scripted effects on desktop viewports and a
//! lighter set on mobile, switching at a single breakpoint. This module
//! models that lifecycle as an explicit state machine so effect setup and
//! teardown are driven by transitions, never by ad-hoc flags.
//!
//! Rules:
//! - effects are set up exactly once per activation and torn down exactly
//!   once per deactivation, whatever order events arrive in
//! - a resize re-initializes only when it crosses the breakpoint
//! - teardown is idempotent and always releases the scroll lock

/// Viewports this wide or wider get the desktop effects.
pub const BREAKPOINT_PX: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    /// No effects installed yet.
    Uninitialized,
    ActiveDesktop,
    ActiveMobile,
    /// Effects released. A later `init` may activate again.
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    pub fn of_width(width: u32) -> Self {
        if width >= BREAKPOINT_PX {
            ViewportMode::Desktop
        } else {
            ViewportMode::Mobile
        }
    }
}

/// One scripted effect. Implementations install listeners or timers in
/// `setup` and must undo all of it in `teardown`.
pub trait Effect {
    fn setup(&mut self, mode: ViewportMode);
    fn teardown(&mut self);
}

/// Drives [`Effect`]s through the lifecycle.
pub struct MotionController {
    state: MotionState,
    effects: Vec<Box<dyn Effect>>,
    scroll_locked: bool,
}

impl MotionController {
    pub fn new(effects: Vec<Box<dyn Effect>>) -> Self {
        Self {
            state: MotionState::Uninitialized,
            effects,
            scroll_locked: false,
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Activate for the given viewport width. Re-initializing while
    /// already active tears the previous activation down first.
    pub fn init(&mut self, width: u32) {
        if matches!(
            self.state,
            MotionState::ActiveDesktop | MotionState::ActiveMobile
        ) {
            self.teardown();
        }
        let mode = ViewportMode::of_width(width);
        for effect in &mut self.effects {
            effect.setup(mode);
        }
        self.state = match mode {
            ViewportMode::Desktop => MotionState::ActiveDesktop,
            ViewportMode::Mobile => MotionState::ActiveMobile,
        };
    }

    /// React to a viewport resize. Only a breakpoint crossing triggers a
    /// teardown and re-init; same-side resizes are ignored, and so are
    /// resizes while inactive.
    pub fn handle_resize(&mut self, width: u32) {
        let current = match self.state {
            MotionState::ActiveDesktop => ViewportMode::Desktop,
            MotionState::ActiveMobile => ViewportMode::Mobile,
            MotionState::Uninitialized | MotionState::TornDown => return,
        };
        if ViewportMode::of_width(width) != current {
            self.init(width);
        }
    }

    /// Halt page scrolling until teardown or explicit release.
    pub fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    pub fn release_scroll(&mut self) {
        self.scroll_locked = false;
    }

    /// Tear all effects down. Safe to call in any state and any number of
    /// times; only the first call after an activation reaches the effects.
    pub fn teardown(&mut self) {
        if matches!(
            self.state,
            MotionState::ActiveDesktop | MotionState::ActiveMobile
        ) {
            for effect in &mut self.effects {
                effect.teardown();
            }
        }
        self.scroll_locked = false;
        self.state = MotionState::TornDown;
    }
}

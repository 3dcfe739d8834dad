//! Enter/leave animation wrapped around an [`Overlay`]
//!
//! The wrapped overlay flips state immediately; the transition only decides
//! whether the overlay is still drawn and how far along the animation is.
//! Time is passed in so phases can be driven without a real clock.

use super::{Focus, Overlay};
use std::time::{Duration, Instant};

/// Animation phase of an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// Not drawn
    #[default]
    Hidden,
    /// Animating in
    Entering,
    /// Fully presented
    Shown,
    /// Animating out, still drawn
    Leaving,
}

#[derive(Debug, Clone)]
pub struct Transition {
    overlay: Overlay,
    phase: TransitionPhase,
    phase_started: Option<Instant>,
    /// Visibility when the current phase started (for interrupted phases)
    start_visibility: f32,
    enter: Duration,
    leave: Duration,
}

impl Transition {
    pub fn new(overlay: Overlay, enter: Duration, leave: Duration) -> Self {
        Self {
            overlay,
            phase: TransitionPhase::Hidden,
            phase_started: None,
            start_visibility: 0.0,
            enter,
            leave,
        }
    }

    #[cfg(test)]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    #[cfg(test)]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Whether the overlay subtree belongs in the frame
    pub fn is_rendered(&self) -> bool {
        self.phase != TransitionPhase::Hidden
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::Entering | TransitionPhase::Leaving
        )
    }

    /// Open the overlay and start the enter animation
    pub fn open(&mut self, trigger: Option<Focus>, now: Instant) -> Option<Focus> {
        if self.overlay.is_open() {
            return None;
        }
        let focus = self.overlay.open(trigger);
        self.begin(TransitionPhase::Entering, now);
        focus
    }

    /// Close the overlay and start the leave animation
    pub fn close(&mut self, now: Instant) -> Option<Focus> {
        if !self.overlay.is_open() {
            return None;
        }
        let focus = self.overlay.close();
        self.begin(TransitionPhase::Leaving, now);
        focus
    }

    /// Settle the current phase once its duration has elapsed
    pub fn tick(&mut self, now: Instant) {
        let Some(started) = self.phase_started else {
            return;
        };
        let elapsed = now.saturating_duration_since(started);
        match self.phase {
            TransitionPhase::Entering if elapsed >= self.enter => {
                self.settle(TransitionPhase::Shown);
            }
            TransitionPhase::Leaving if elapsed >= self.leave => {
                self.settle(TransitionPhase::Hidden);
            }
            _ => {}
        }
    }

    /// Eased visibility between 0.0 (hidden) and 1.0 (fully shown)
    pub fn visibility(&self, now: Instant) -> f32 {
        match self.phase {
            TransitionPhase::Hidden => 0.0,
            TransitionPhase::Shown => 1.0,
            TransitionPhase::Entering => {
                let eased = simple_easing::cubic_out(self.progress(now, self.enter));
                self.start_visibility + (1.0 - self.start_visibility) * eased
            }
            TransitionPhase::Leaving => {
                let eased = simple_easing::cubic_in(self.progress(now, self.leave));
                self.start_visibility * (1.0 - eased)
            }
        }
    }

    fn begin(&mut self, phase: TransitionPhase, now: Instant) {
        // An interrupted phase continues from wherever it got to
        self.start_visibility = self.visibility(now);
        self.phase = phase;
        self.phase_started = Some(now);
        tracing::debug!("overlay transition {phase:?}");
        self.tick(now);
    }

    fn settle(&mut self, phase: TransitionPhase) {
        self.phase = phase;
        self.phase_started = None;
        tracing::debug!("overlay transition settled at {phase:?}");
    }

    fn progress(&self, now: Instant, duration: Duration) -> f32 {
        let Some(started) = self.phase_started else {
            return 1.0;
        };
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

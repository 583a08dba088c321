//! One-shot "count up when scrolled into view" animation.
//!
//! [`RevealAnimation`] is a plain state machine driven by two abstract events:
//! visibility changes and frame ticks. Time and scheduling come from a
//! [`FrameSource`], so the whole thing runs without a display.

use std::cell::Cell;
use std::future::Future;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_DURATION_MS: f64 = 2000.0;
pub const DEFAULT_THRESHOLD: f64 = 0.1;
const EASE_EXPONENT: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPhase {
    Unobserved,
    Observing,
    /// `started_at` is fixed by the first tick after the threshold crossing.
    Animating { started_at: Option<f64> },
    Settled,
}

/// One intersection observation, as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub fn hidden() -> Self {
        Self {
            intersecting: false,
            ratio: 0.0,
        }
    }

    pub fn visible(ratio: f64) -> Self {
        Self {
            intersecting: true,
            ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealAnimation {
    target: u64,
    duration_ms: f64,
    threshold: f64,
    phase: RevealPhase,
    displayed: u64,
}

impl RevealAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_DURATION_MS,
            threshold: DEFAULT_THRESHOLD,
            phase: RevealPhase::Unobserved,
            displayed: 0,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, RevealPhase::Animating { .. })
    }

    pub fn is_settled(&self) -> bool {
        self.phase == RevealPhase::Settled
    }

    pub fn observe(&mut self) {
        if self.phase == RevealPhase::Unobserved {
            self.phase = RevealPhase::Observing;
        }
    }

    /// Returns `true` when this observation started the animation.
    pub fn on_visibility(&mut self, visibility: Visibility) -> bool {
        if self.phase != RevealPhase::Observing {
            return false;
        }
        if visibility.intersecting && visibility.ratio >= self.threshold {
            self.phase = RevealPhase::Animating { started_at: None };
            return true;
        }
        false
    }

    /// Advance to `now_ms`. Returns the displayed value while animating.
    pub fn tick(&mut self, now_ms: f64) -> Option<u64> {
        let RevealPhase::Animating { started_at } = self.phase else {
            return None;
        };
        let start = match started_at {
            Some(start) => start,
            None => {
                self.phase = RevealPhase::Animating {
                    started_at: Some(now_ms),
                };
                now_ms
            }
        };

        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        };

        if progress >= 1.0 {
            self.settle();
            return Some(self.displayed);
        }

        let eased = 1.0 - (1.0 - progress).powi(EASE_EXPONENT);
        let value = ((self.target as f64) * eased).round() as u64;
        self.displayed = value.clamp(self.displayed, self.target);
        Some(self.displayed)
    }

    /// Jump to the final value.
    pub fn settle(&mut self) {
        self.displayed = self.target;
        self.phase = RevealPhase::Settled;
    }
}

/// Clock plus frame scheduler.
pub trait FrameSource {
    fn now_ms(&self) -> f64;
    fn next_frame(&self) -> impl Future<Output = ()>;
}

/// Tick `animation` until it leaves the animating phase.
pub async fn drive<F: FrameSource>(
    animation: &mut RevealAnimation,
    frames: &F,
    mut on_frame: impl FnMut(u64),
) {
    while animation.is_animating() {
        frames.next_frame().await;
        if let Some(value) = animation.tick(frames.now_ms()) {
            on_frame(value);
        }
    }
}

/// Browser frames: `performance.now()` and ~60 Hz timeouts.
pub struct BrowserFrames {
    frame: Duration,
    /// Frame-counted time, used when no high resolution clock exists.
    counted_ms: Cell<f64>,
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl BrowserFrames {
    pub fn new() -> Self {
        Self {
            frame: Duration::from_millis(16),
            counted_ms: Cell::new(0.0),
            #[cfg(not(target_arch = "wasm32"))]
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for BrowserFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for BrowserFrames {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_else(|| self.counted_ms.get())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn next_frame(&self) -> impl Future<Output = ()> {
        self.counted_ms
            .set(self.counted_ms.get() + self.frame.as_secs_f64() * 1000.0);
        gloo_timers::future::sleep(self.frame)
    }
}

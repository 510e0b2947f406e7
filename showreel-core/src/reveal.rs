//! Viewport-triggered reveal
//!
//! A wrapper starts hidden, observes its region while the visitor scrolls and
//! switches to revealed once enough of it is visible. Revealing releases the
//! observation, and so does dropping the wrapper before it ever reveals.

use std::fmt;

/// Fraction of the element that must be visible before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;

/// Visibility ratio in `0.0..=1.0` that triggers a reveal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Returns `None` when the ratio is not a finite value in `0.0..=1.0`.
    pub fn new(ratio: f64) -> Option<Self> {
        (ratio.is_finite() && (0.0..=1.0).contains(&ratio)).then_some(Self(ratio))
    }

    pub fn ratio(self) -> f64 {
        self.0
    }

    /// Whether an observed intersection ratio crosses this threshold.
    ///
    /// A zero ratio never counts, even against a zero threshold: the element
    /// has to be at least partly on screen.
    pub fn is_crossed_by(self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of intersection reports for reveal wrappers.
///
/// `observe` hands out a registration that keeps the observation alive;
/// dropping the registration must detach it. Returning `None` means the
/// runtime cannot observe intersections at all.
pub trait Viewport {
    type Registration;

    fn observe(&self, target: &str, threshold: Threshold) -> Option<Self::Registration>;
}

/// Lifecycle of a reveal wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Mounted and watching the viewport, not yet visible.
    Observing,
    /// Terminal; no observation remains.
    Revealed,
}

/// One reveal wrapper bound to its observation.
#[derive(Debug)]
pub struct Reveal<R> {
    target: String,
    threshold: Threshold,
    registration: Option<R>,
    state: RevealState,
}

impl<R> Reveal<R> {
    /// Mounts the wrapper and attaches its observation.
    ///
    /// Without viewport support the wrapper mounts straight into
    /// [`RevealState::Revealed`] so content is never left hidden.
    pub fn mount<V>(viewport: &V, target: impl Into<String>, threshold: Threshold) -> Self
    where
        V: Viewport<Registration = R> + ?Sized,
    {
        let target = target.into();
        match viewport.observe(&target, threshold) {
            Some(registration) => Self {
                target,
                threshold,
                registration: Some(registration),
                state: RevealState::Observing,
            },
            None => {
                tracing::debug!(element = %target, "Viewport observation unavailable, revealing immediately");
                Self {
                    target,
                    threshold,
                    registration: None,
                    state: RevealState::Revealed,
                }
            }
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Whether an observation is still registered for this wrapper.
    pub fn is_observing(&self) -> bool {
        self.registration.is_some()
    }

    /// Feeds one intersection report.
    ///
    /// Returns `true` only for the report that caused the reveal. Reports after
    /// the reveal are ignored.
    pub fn on_intersection(&mut self, ratio: f64) -> bool {
        if self.state == RevealState::Revealed || !self.threshold.is_crossed_by(ratio) {
            return false;
        }
        self.state = RevealState::Revealed;
        self.registration = None;
        tracing::trace!(element = %self.target, ratio, "Revealed");
        true
    }

    /// Unmounts the wrapper, releasing any observation still held.
    pub fn unmount(self) {}
}

/// Viewport whose observation is carried out by the browser.
///
/// Markup mounted against it renders hidden; the client script performs the
/// actual intersection observation with the same threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientViewport;

/// Registration held for a wrapper observed by the browser.
#[derive(Debug)]
pub struct ClientObservation;

impl Viewport for ClientViewport {
    type Registration = ClientObservation;

    fn observe(&self, _target: &str, _threshold: Threshold) -> Option<ClientObservation> {
        Some(ClientObservation)
    }
}

/// Viewport for runtimes without intersection observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedViewport;

impl Viewport for UnsupportedViewport {
    type Registration = ClientObservation;

    fn observe(&self, _target: &str, _threshold: Threshold) -> Option<ClientObservation> {
        None
    }
}

//! Floating label animation.
//!
//! The label of a text-like field rests in one of two positions: *stacked*
//! above the input (caption size) or *inline* over the input where a
//! placeholder would be (body size). Moving between them is an explicit
//! [`Interpolation`] sampled by whoever drives frames:
//!
//! - a scheduler holding an [`AnimationTicket`] calls
//!   [`LabelAnimation::tick`] with a progress value in `[0, 1]`, or
//! - a frame loop calls [`LabelAnimation::sample`] with the current time.
//!
//! Starting a new interpolation always cancels the previous one first, so
//! two interpolations never write the same label.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::form::FieldId;
use crate::theme::Theme;

/// Easing curve applied to interpolation progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Slow start, fast end
    EaseIn,
    /// Fast start, slow end
    EaseOut,
    /// Slow start and end
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a normalized time value (clamped to `0.0..=1.0`).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Timing of label transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelAnimationConfig {
    /// Length of one transition. Zero makes transitions instant.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for LabelAnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 150,
            easing: Easing::EaseOut,
        }
    }
}

impl LabelAnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Visual state of the label: text size and vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelMetrics {
    pub text_size: f32,
    pub pos_y: f32,
}

impl LabelMetrics {
    /// Label above the input.
    pub fn stacked(theme: &dyn Theme) -> Self {
        Self {
            text_size: theme.caption_text_size(),
            pos_y: theme.input_border_size() * 2.0,
        }
    }

    /// Label over the input, in placeholder position.
    pub fn inline(theme: &dyn Theme) -> Self {
        Self {
            text_size: theme.text_size(),
            pos_y: theme.input_border_size() * 7.0,
        }
    }

    /// Linear blend towards `to`.
    pub fn lerp(self, to: LabelMetrics, t: f32) -> LabelMetrics {
        LabelMetrics {
            text_size: self.text_size + (to.text_size - self.text_size) * t,
            pos_y: self.pos_y + (to.pos_y - self.pos_y) * t,
        }
    }
}

/// The two rest positions of a floating label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelEndpoint {
    Stacked,
    Inline,
}

/// Where the label is, including the in-between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelPhase {
    Stacked,
    Inline,
    AnimatingToStacked,
    AnimatingToInline,
}

impl LabelPhase {
    /// The endpoint this phase rests at or moves towards.
    pub fn target(self) -> LabelEndpoint {
        match self {
            LabelPhase::Stacked | LabelPhase::AnimatingToStacked => LabelEndpoint::Stacked,
            LabelPhase::Inline | LabelPhase::AnimatingToInline => LabelEndpoint::Inline,
        }
    }

    pub fn is_animating(self) -> bool {
        matches!(
            self,
            LabelPhase::AnimatingToStacked | LabelPhase::AnimatingToInline
        )
    }
}

/// One running transition between two label states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    pub from: LabelMetrics,
    pub to: LabelMetrics,
    pub started: Instant,
    pub duration: Duration,
    pub easing: Easing,
    generation: u64,
}

impl Interpolation {
    /// Label state at `progress` (linear time, eased here).
    pub fn sample(&self, progress: f32) -> LabelMetrics {
        self.from.lerp(self.to, self.easing.apply(progress))
    }

    /// Linear progress at `now`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Handle given to a scheduler for one interpolation.
///
/// A ticket expires when its interpolation finishes, is stopped, is
/// superseded by a newer one, or when the owning field is dropped. Ticks
/// delivered with an expired ticket are ignored.
#[derive(Debug, Clone)]
pub struct AnimationTicket {
    generation: u64,
    duration: Duration,
    expired: Arc<AtomicBool>,
}

impl AnimationTicket {
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// True once the interpolation no longer accepts ticks.
    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::SeqCst)
    }
}

/// Animation scheduler collaborator.
///
/// Receives a ticket each time a field starts a label transition. The
/// scheduler is expected to call [`crate::form::Form::tick_label`]
/// repeatedly with increasing progress until it reaches `1.0` or the ticket
/// expires.
pub trait AnimationScheduler {
    fn schedule(&mut self, field: FieldId, ticket: AnimationTicket);
}

/// Label position state plus the interpolation currently driving it.
#[derive(Debug)]
pub struct LabelAnimation {
    stacked: LabelMetrics,
    inline: LabelMetrics,
    config: LabelAnimationConfig,
    current: LabelMetrics,
    target: LabelEndpoint,
    active: Option<Interpolation>,
    progress: f32,
    generation: u64,
    expired: Arc<AtomicBool>,
}

impl LabelAnimation {
    /// Create a label resting at `at`.
    pub fn new(
        stacked: LabelMetrics,
        inline: LabelMetrics,
        config: LabelAnimationConfig,
        at: LabelEndpoint,
    ) -> Self {
        let current = match at {
            LabelEndpoint::Stacked => stacked,
            LabelEndpoint::Inline => inline,
        };
        Self {
            stacked,
            inline,
            config,
            current,
            target: at,
            active: None,
            progress: 1.0,
            generation: 0,
            expired: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a label with endpoints taken from `theme`.
    pub fn themed(theme: &dyn Theme, config: LabelAnimationConfig, at: LabelEndpoint) -> Self {
        Self::new(
            LabelMetrics::stacked(theme),
            LabelMetrics::inline(theme),
            config,
            at,
        )
    }

    /// Move towards the stacked position.
    pub fn forward(&mut self) -> Option<AnimationTicket> {
        self.animate_to(LabelEndpoint::Stacked)
    }

    /// Move towards the inline position.
    pub fn reverse(&mut self) -> Option<AnimationTicket> {
        self.animate_to(LabelEndpoint::Inline)
    }

    /// Cancel any running interpolation and start one from the current
    /// state towards `endpoint`.
    ///
    /// Returns `None` when the label already rests at `endpoint` or the
    /// configured duration is zero (the label snaps).
    pub fn animate_to(&mut self, endpoint: LabelEndpoint) -> Option<AnimationTicket> {
        self.stop();
        self.target = endpoint;
        let to = self.endpoint_metrics(endpoint);
        if self.current == to {
            return None;
        }

        let duration = self.config.duration();
        if duration.is_zero() {
            self.current = to;
            self.progress = 1.0;
            return None;
        }

        self.generation += 1;
        self.expired = Arc::new(AtomicBool::new(false));
        self.progress = 0.0;
        self.active = Some(Interpolation {
            from: self.current,
            to,
            started: Instant::now(),
            duration,
            easing: self.config.easing,
            generation: self.generation,
        });
        log::debug!(
            "label animation {} started towards {:?}",
            self.generation,
            endpoint
        );

        Some(AnimationTicket {
            generation: self.generation,
            duration,
            expired: Arc::clone(&self.expired),
        })
    }

    /// Cancel the running interpolation, leaving the label where it is.
    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            self.expired.store(true, Ordering::SeqCst);
            log::trace!("label animation {} stopped", self.generation);
        }
    }

    /// Cancel any interpolation and jump straight to `endpoint`.
    pub fn snap_to(&mut self, endpoint: LabelEndpoint) {
        self.stop();
        self.target = endpoint;
        self.current = self.endpoint_metrics(endpoint);
        self.progress = 1.0;
    }

    /// Apply a scheduler tick. Returns false when the ticket is stale.
    pub fn tick(&mut self, ticket: &AnimationTicket, progress: f32) -> bool {
        if ticket.is_expired() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        if active.generation != ticket.generation {
            return false;
        }
        self.apply(active, progress);
        true
    }

    /// Advance the running interpolation to `now`. Returns false when idle.
    pub fn sample(&mut self, now: Instant) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.apply(active, active.progress_at(now));
        true
    }

    fn apply(&mut self, active: Interpolation, progress: f32) {
        let progress = progress.clamp(0.0, 1.0);
        self.progress = progress;
        if progress >= 1.0 {
            self.current = active.to;
            self.active = None;
            self.expired.store(true, Ordering::SeqCst);
        } else {
            self.current = active.sample(progress);
        }
    }

    fn endpoint_metrics(&self, endpoint: LabelEndpoint) -> LabelMetrics {
        match endpoint {
            LabelEndpoint::Stacked => self.stacked,
            LabelEndpoint::Inline => self.inline,
        }
    }

    pub fn phase(&self) -> LabelPhase {
        match (self.active.is_some(), self.target) {
            (true, LabelEndpoint::Stacked) => LabelPhase::AnimatingToStacked,
            (true, LabelEndpoint::Inline) => LabelPhase::AnimatingToInline,
            (false, LabelEndpoint::Stacked) => LabelPhase::Stacked,
            (false, LabelEndpoint::Inline) => LabelPhase::Inline,
        }
    }

    /// Endpoint the label rests at or moves towards.
    pub fn target(&self) -> LabelEndpoint {
        self.target
    }

    /// Linear progress of the current interpolation; `1.0` at rest.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn metrics(&self) -> LabelMetrics {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn interpolation(&self) -> Option<&Interpolation> {
        self.active.as_ref()
    }

    pub fn config(&self) -> LabelAnimationConfig {
        self.config
    }
}

impl Drop for LabelAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

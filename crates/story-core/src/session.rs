//! Camera/tracking session lifecycle and frame timing.

use crate::error::{StoryError, StoryResult};
use instant::Instant;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Starting,
    Running,
    /// Terminal. Start is never retried.
    Failed,
}

#[derive(Debug, Default)]
pub struct SessionDriver {
    phase: SessionPhase,
    failure: Option<String>,
}

impl SessionDriver {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    fn transition(&mut self, from: SessionPhase, to: SessionPhase) -> StoryResult<()> {
        if self.phase != from {
            return Err(StoryError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        self.phase = to;
        Ok(())
    }

    /// Call from the start control's click handler, before asking the
    /// tracker to open the camera.
    pub fn begin_start(&mut self) -> StoryResult<()> {
        self.transition(SessionPhase::Idle, SessionPhase::Starting)
    }

    pub fn started(&mut self) -> StoryResult<()> {
        self.transition(SessionPhase::Starting, SessionPhase::Running)?;
        log::info!("[session] running");
        Ok(())
    }

    pub fn failed(&mut self, reason: impl Into<String>) -> StoryResult<()> {
        self.transition(SessionPhase::Starting, SessionPhase::Failed)?;
        let reason = reason.into();
        log::error!("[session] start failed: {}", reason);
        self.failure = Some(reason);
        Ok(())
    }
}

/// Elapsed time between consecutive frames.
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl FrameClock {
    /// Seconds since the previous call (or since construction).
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt.as_secs_f32()
    }
}

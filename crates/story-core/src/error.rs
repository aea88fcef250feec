use crate::session::SessionPhase;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoryError {
    #[error("anchor {0} already has a scene bound")]
    AnchorInUse(u8),
    #[error("anchor {index} is out of range (max {max})")]
    AnchorOutOfRange { index: u8, max: usize },
    #[error("no scene bound to anchor {0}")]
    UnboundAnchor(u8),
    #[error("cannot move session from {from:?} to {to:?}")]
    InvalidTransition { from: SessionPhase, to: SessionPhase },
    #[error("invalid story config: {0}")]
    InvalidConfig(String),
}

pub type StoryResult<T> = Result<T, StoryError>;

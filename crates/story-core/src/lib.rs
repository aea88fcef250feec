//! Platform-free scene lifecycle logic for the AR storybook.
//!
//! Nothing in this crate touches the browser. The web front end implements
//! the collaborator traits in [`platform`] on top of MindAR/three.js handles
//! and drives a [`Storybook`] from its event listeners and frame loop.

pub mod anchor;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod gesture;
pub mod mixer;
pub mod page;
pub mod platform;
pub mod session;
pub mod storybook;

pub use anchor::*;
pub use config::*;
pub use constants::*;
pub use dispatch::*;
pub use error::*;
pub use gesture::*;
pub use mixer::*;
pub use platform::*;
pub use session::*;
pub use storybook::*;

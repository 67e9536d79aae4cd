mod gate;
mod navigator;

use thiserror::Error;

use crate::models::section::SectionId;

pub use gate::ScrollGate;
pub use navigator::{ScrollRequest, SectionNavigator, WheelOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no section with anchor '{0}'")]
    UnknownAnchor(String),
    #[error("section '{0}' is not part of this page")]
    NotInList(SectionId),
}

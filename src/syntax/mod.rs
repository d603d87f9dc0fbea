//! Syntax-level document classification: which mode a file is edited in.

mod mode;

pub use mode::{MODE_ASSOCIATIONS, Mode, ModeAssociation};

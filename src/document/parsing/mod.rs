//! Script parsing utilities
//!
//! This module contains the text-level analysis applied to each
//! paragraph: dialogue detection and parenthetical segmentation.

pub mod dialogue;
pub(crate) mod formatting;
pub mod parenthetical;

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod chain;
mod entry;
mod error;
mod fallback;
mod step;
mod walk;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use chain::Chain;
pub use entry::{attr_or_default, attr_or_else, item_or_default, item_or_else};
pub use entry::{resolve_attr, resolve_attr_with, resolve_item, resolve_item_with};
pub use error::AccessError;
pub use fallback::{Call, Factory, Fallback, Static};
pub use step::{Attribute, Index, Step, StepFailure};
pub use walk::{walk, walk_strict};

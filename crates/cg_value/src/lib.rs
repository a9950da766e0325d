#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod dict;
mod error;
mod func;
mod key;
mod object;
mod ops;
mod value;

pub mod serde;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use dict::Dict;
pub use error::{ErrorKind, HostError};
pub use func::Func;
pub use key::HashKey;
pub use object::{Object, Record};
pub use value::{Value, ValueKind};

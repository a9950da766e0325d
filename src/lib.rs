#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use cg_access as access;
pub use cg_utils as utils;
pub use cg_value as value;

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;

mod choice;
mod question;

pub use choice::Choice;
pub use error::{Error, ErrorKind, Result};
pub use question::Question;

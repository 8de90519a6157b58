#![no_std]

pub mod register;
pub use crate::register::{ByteRegister, RWRegister};

mod soc;
pub use soc::*;

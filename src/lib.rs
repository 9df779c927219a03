//! Shloka application library: the project modules mounted on the kernel.

pub mod modules;
pub mod utils;

//! IO and logging helpers

pub mod io;
pub mod logging;

//! Library side of the `email-burst` command line.

pub mod logging;
pub mod render;
pub mod session;
pub mod settings;

//! Backend bridge: the command queue from UI to the backend worker thread.

pub mod commands;
pub mod runtime;

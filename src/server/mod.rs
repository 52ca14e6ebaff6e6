//! Connection dispatch: accept loop and per-connection scheduling.

pub mod listener;

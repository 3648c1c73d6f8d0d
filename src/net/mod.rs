//! Network helpers for mirroring the theme preference to the server.

pub mod sync;

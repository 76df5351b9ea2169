//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns route-scoped orchestration (restoring the saved countdown,
//! driving the tick timer, persisting on submit) and delegates rendering
//! details to `components`.

pub mod countdown;

//! Utility helpers isolating browser concerns from page and component logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every module here has a hydrate implementation backed by web-sys or
//! js-sys and a non-hydrate fallback, so pages stay renderable under SSR and
//! testable natively.

pub mod alert;
pub mod clock;
pub mod storage;
pub mod ticker;

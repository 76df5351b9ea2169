//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component per view of the countdown lifecycle. Each renders from the
//! typed values its props carry and reports user intent through callbacks;
//! none of them touch storage or timers directly.

pub mod complete_panel;
pub mod countdown_panel;
pub mod setup_form;

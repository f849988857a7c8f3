//! Utility helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from controller
//! logic to improve reuse and testability.

pub mod storage;

//! Preference value types shared by the controllers.
//!
//! DESIGN
//! ======
//! Each controller owns its current value in memory; these modules only
//! define the value types and their storage encoding.

pub mod prefs;

//! Game rules: role assignment per mode and win conditions.
//!
//! - `roles`: the mode → roles lookup table
//! - `result`: `GameResult` and outcome messages
//! - `detector`: join / separation detection

pub mod detector;
pub mod result;
pub mod roles;

pub use detector::evaluate;
pub use result::{EndReason, GameResult};
pub use roles::{Automation, ModeRoles};

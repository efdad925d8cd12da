//! CLI command implementations

mod signup;

pub use signup::{SignupArgs, cmd_signup};

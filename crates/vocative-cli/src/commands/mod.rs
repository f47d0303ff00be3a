//! CLI command implementations.

mod check;
mod greet;
mod list;

pub use check::{run_check, CheckArgs};
pub use greet::{run_greet, GreetArgs};
pub use list::{run_list, ListArgs};

//! CLI command implementations

pub mod check;
pub mod config;
pub mod list;
pub mod repl;

pub use check::execute as check;
pub use config::execute as config;
pub use list::execute as list;
pub use repl::execute as repl;

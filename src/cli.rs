//! CLI domain: parse, route, and output only.
//! No tree logic; the route selects an input mode and dispatches to the
//! session driver.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;

//! Command handler modules for the Klondike CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`, and `&mut dyn
//!   BufRead` for interactive input) passed as parameters so tests drive
//!   them with in-memory buffers
//! - Error propagation: all errors surface through the `CliError` enum

mod cfg;
mod deal;
mod play;
mod rng;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;

//! Configuration display command.
//!
//! Prints the resolved configuration together with the source each value
//! came from (default, file, or env), so precedence problems are visible
//! at a glance.

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match config::resolve() {
        Ok(resolved) => {
            let cfg = &resolved.config;
            let src = &resolved.sources;
            writeln!(out, "Configuration:")?;
            writeln!(out, "  seed       = {:?} ({})", cfg.seed, src.seed.label())?;
            writeln!(
                out,
                "  recycle    = {:?} ({})",
                cfg.recycle,
                src.recycle.label()
            )?;
            writeln!(
                out,
                "  empty_pile = {:?} ({})",
                cfg.empty_pile,
                src.empty_pile.label()
            )?;
            Ok(())
        }
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            Err(CliError::Config(e.to_string()))
        }
    }
}

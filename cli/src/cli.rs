//! Command-line surface for the `klondike` binary.

use clap::{Parser, Subcommand, ValueEnum};
use klondike_engine::rules::{EmptyPileRule, RecycleOrder};

#[derive(Debug, Parser)]
#[command(name = "klondike", version, about = "Klondike solitaire engine CLI")]
pub struct KlondikeCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive game in the terminal
    Play {
        /// RNG seed for a reproducible layout
        #[arg(long)]
        seed: Option<u64>,
        /// Write a JSONL game record to this file
        #[arg(long)]
        log: Option<String>,
        /// Waste recycle order
        #[arg(long)]
        recycle: Option<RecycleOpt>,
        /// Empty tableau pile rule
        #[arg(long)]
        empty_pile: Option<EmptyPileOpt>,
    },
    /// Deal a single layout and print it
    Deal {
        /// RNG seed for a reproducible layout
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a ChaCha20 sample for a seed
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration
    Cfg,
}

/// Waste-recycle order option, mapped onto the engine rule.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum RecycleOpt {
    /// Repeat the same draw sequence on every pass
    KeepOrder,
    /// Reverse the waste on its way back to the stock
    Reverse,
}

impl RecycleOpt {
    pub fn to_rule(self) -> RecycleOrder {
        match self {
            RecycleOpt::KeepOrder => RecycleOrder::KeepOrder,
            RecycleOpt::Reverse => RecycleOrder::Reverse,
        }
    }
}

/// Empty-pile placement option, mapped onto the engine rule.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum EmptyPileOpt {
    /// Any card may start an empty pile
    AnyCard,
    /// Standard Klondike: Kings only
    KingOnly,
}

impl EmptyPileOpt {
    pub fn to_rule(self) -> EmptyPileRule {
        match self {
            EmptyPileOpt::AnyCard => EmptyPileRule::AnyCard,
            EmptyPileOpt::KingOnly => EmptyPileRule::KingOnly,
        }
    }
}

//! Decision-making core for the automated tic-tac-toe player.
//!
//! This crate combines a heuristic move selector with a persistent,
//! symmetry-aware memory of past losses:
//!
//! 1. **Board symmetry** ([`symmetry`]) - Canonical text keys for boards and
//!    their rotation/reflection classes.
//! 2. **Loss memory** ([`loss_memory`]) - Durable map from board keys to
//!    moves that previously preceded a loss, with fuzzy board matching.
//! 3. **Turn evaluation** ([`turn_evaluator`]) - Win/block detection, safety
//!    lookahead, and positional heuristics over the candidate moves.
//! 4. **Session recording** ([`session_recorder`]) - Per-game move log that
//!    feeds the loss memory when a game is lost.
//!
//! [`AutoPlayer`] ties the pieces together behind the two calls a host game
//! loop makes: ask for a move, report the outcome.
//!
//! # Architecture
//!
//! ```text
//! AutoPlayer (host-facing facade)
//!     ↓ asks
//! Turn Evaluator (pick a cell)
//!     ↓ consults          ↓ logs into
//! Loss Memory          Session Recorder
//!     ↑ committed on loss ↵
//! ```
//!
//! Despite the learning vocabulary, nothing here is statistical: the memory
//! is an exact record of punished moves, generalized only through board
//! symmetry and a fixed fuzzy-match threshold.

pub use self::{auto_player::*, loss_memory::*, session_recorder::*, symmetry::*};

mod auto_player;
mod loss_memory;
mod session_recorder;
pub mod symmetry;
pub mod turn_evaluator;

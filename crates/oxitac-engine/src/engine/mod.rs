//! Game bookkeeping on top of the core board types.
//!
//! - [`GameSession`] - turn alternation, legality checks, and outcome
//!   detection for a single game
//! - [`MatchStats`] - running win/loss/draw tallies across games
//!
//! A typical host loop creates a [`GameSession`], alternates calls to
//! [`GameSession::play`] between the human side and the automated side,
//! and reports the final [`SessionState`] to the interested parties.

pub use self::{game_session::*, match_stats::*};

mod game_session;
mod match_stats;

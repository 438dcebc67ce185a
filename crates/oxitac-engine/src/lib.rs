pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cell {pos} is already occupied")]
pub struct CellOccupiedError {
    pub pos: CellPos,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PlayError {
    #[display("{_0}")]
    CellOccupied(CellOccupiedError),
    #[display("game is already over")]
    GameOver,
}

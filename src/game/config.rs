use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction-contract violations caught when a configuration is built
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size must be positive, got {0}x{1} pixels")]
    ZeroBoard(u32, u32),
    #[error("cell size must be positive")]
    ZeroCell,
    #[error("cell size {cell} does not divide board size {board} evenly")]
    UnevenCell { board: u32, cell: u32 },
}

/// Board geometry supplied once by the host.
///
/// The host thinks in pixels (total board size, size of one cell); the
/// simulation thinks in cells. The conversion happens exactly once, here,
/// so no pixel unit ever reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Board width in pixels
    pub board_width: u32,
    /// Board height in pixels
    pub board_height: u32,
    /// Side length of one square cell in pixels
    pub cell_size: u32,
}

impl GridConfig {
    /// Validate host-supplied geometry. Fails fast on zero dimensions or a
    /// cell size that does not tile the board exactly.
    pub fn new(board_width: u32, board_height: u32, cell_size: u32) -> Result<Self, ConfigError> {
        if board_width == 0 || board_height == 0 {
            return Err(ConfigError::ZeroBoard(board_width, board_height));
        }
        if cell_size == 0 {
            return Err(ConfigError::ZeroCell);
        }
        if board_width % cell_size != 0 {
            return Err(ConfigError::UnevenCell {
                board: board_width,
                cell: cell_size,
            });
        }
        if board_height % cell_size != 0 {
            return Err(ConfigError::UnevenCell {
                board: board_height,
                cell: cell_size,
            });
        }

        Ok(Self {
            board_width,
            board_height,
            cell_size,
        })
    }

    /// Grid width in cells
    pub fn grid_width(&self) -> u32 {
        self.board_width / self.cell_size
    }

    /// Grid height in cells
    pub fn grid_height(&self) -> u32 {
        self.board_height / self.cell_size
    }
}

impl Default for GridConfig {
    /// 600x600 pixel board, 25 pixel cells: a 24x24 grid
    fn default() -> Self {
        Self {
            board_width: 600,
            board_height: 600,
            cell_size: 25,
        }
    }
}

use std::ops::Range;

use crate::error::{Result, TensorError};

/// Queue depth of the vector unit; each tile is split across this many buffers.
pub const BUFFER_NUM: usize = 2;

/// Number of cores a tensor is divided across.
pub const DEFAULT_BLOCK_DIM: usize = 8;

/// Number of tiles each core's block is split into.
pub const DEFAULT_TILE_NUM: usize = 8;

/// Partition of a flat tensor into per-core blocks and double-buffered tiles.
///
/// Every core owns `block_length()` contiguous elements and walks them in
/// `loop_count()` steps of `tile_length()` elements each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiling {
    total_length: usize,
    block_dim: usize,
    tile_num: usize,
}

impl Tiling {
    /// Build a tiling for `total_length` elements.
    ///
    /// # Errors
    /// Returns `TensorError::Tiling` if `block_dim` or `tile_num` is zero, or
    /// if `total_length` does not split into whole, non-empty tiles.
    pub fn new(total_length: usize, block_dim: usize, tile_num: usize) -> Result<Self> {
        if block_dim == 0 {
            return Err(TensorError::Tiling("block dim can not be zero".to_string()));
        }
        if tile_num == 0 {
            return Err(TensorError::Tiling("tile num can not be zero".to_string()));
        }
        let tiles = block_dim
            .checked_mul(tile_num)
            .and_then(|n| n.checked_mul(BUFFER_NUM))
            .ok_or_else(|| {
                TensorError::Tiling(format!(
                    "{} blocks of {} tiles overflow the tile count",
                    block_dim, tile_num
                ))
            })?;
        if total_length == 0 || total_length % tiles != 0 {
            return Err(TensorError::Tiling(format!(
                "{} elements do not split into {} equal tiles",
                total_length, tiles
            )));
        }
        Ok(Tiling {
            total_length,
            block_dim,
            tile_num,
        })
    }

    /// Tiling with the default block and tile counts.
    pub fn with_defaults(total_length: usize) -> Result<Self> {
        Tiling::new(total_length, DEFAULT_BLOCK_DIM, DEFAULT_TILE_NUM)
    }

    pub fn total_length(&self) -> usize {
        self.total_length
    }

    pub fn block_dim(&self) -> usize {
        self.block_dim
    }

    pub fn tile_num(&self) -> usize {
        self.tile_num
    }

    /// Elements owned by each core.
    pub fn block_length(&self) -> usize {
        self.total_length / self.block_dim
    }

    /// Elements processed per loop iteration.
    pub fn tile_length(&self) -> usize {
        self.block_length() / self.tile_num / BUFFER_NUM
    }

    /// Iterations each core runs to cover its block.
    pub fn loop_count(&self) -> usize {
        self.tile_num * BUFFER_NUM
    }

    /// Element ranges in core-major, then progress order.
    pub fn tiles(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let block_length = self.block_length();
        let tile_length = self.tile_length();
        (0..self.block_dim).flat_map(move |block| {
            (0..self.loop_count()).map(move |progress| {
                let start = block * block_length + progress * tile_length;
                start..start + tile_length
            })
        })
    }
}

//! Logical board model: dims, per-cell type codes, JSON loading.

mod index;

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::scene::materials::CUBE_COLORS;

pub use index::CubeIndex;

/// Cell type code after the empty filter. `0` is immovable, `> 0` movable.
pub type CellType = u8;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board dims must be non-zero on every axis, got {0:?}")]
    ZeroDims(UVec3),
    #[error("dims {dims:?} require {expected} cells, file has {got}")]
    CellCount {
        dims: UVec3,
        expected: usize,
        got: usize,
    },
    #[error("cell {coord:?} has type {code} but the palette has {palette} entries")]
    UnknownCellType {
        coord: UVec3,
        code: i8,
        palette: usize,
    },
    #[error("failed to read board file {path}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse board file {path}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// The logical board: a dense grid of cell type codes, immutable for the
/// scene's lifetime. Negative codes mark empty cells.
///
/// Cells are stored in `(i * Y + j) * Z + k` order.
#[derive(Resource, Debug, Clone)]
pub struct Board {
    dims: UVec3,
    cells: Vec<i8>,
}

impl Board {
    /// Validates and wraps a raw cell grid. Fails fast on malformed dims, a
    /// cell count mismatch, or a type code with no material in the palette.
    pub fn new(dims: UVec3, cells: Vec<i8>) -> Result<Self, BoardError> {
        if dims.x == 0 || dims.y == 0 || dims.z == 0 {
            return Err(BoardError::ZeroDims(dims));
        }
        let expected = (dims.x * dims.y * dims.z) as usize;
        if cells.len() != expected {
            return Err(BoardError::CellCount {
                dims,
                expected,
                got: cells.len(),
            });
        }
        for (idx, &code) in cells.iter().enumerate() {
            if code >= 0 && code as usize >= CUBE_COLORS.len() {
                let idx = idx as u32;
                let coord = UVec3::new(
                    idx / (dims.y * dims.z),
                    (idx / dims.z) % dims.y,
                    idx % dims.z,
                );
                return Err(BoardError::UnknownCellType {
                    coord,
                    code,
                    palette: CUBE_COLORS.len(),
                });
            }
        }
        Ok(Self { dims, cells })
    }

    pub fn dims(&self) -> UVec3 {
        self.dims
    }

    /// Cell type at `coord`, or `None` for empty cells and coordinates
    /// outside the bounding box.
    pub fn get(&self, coord: UVec3) -> Option<CellType> {
        let code = self.cells[self.offset(coord)?];
        (code >= 0).then_some(code as CellType)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&code| code >= 0).count()
    }

    /// Every coordinate in the bounding box, in storage order.
    pub fn coords(&self) -> impl Iterator<Item = UVec3> + '_ {
        let UVec3 { x, y, z } = self.dims;
        (0..x).flat_map(move |i| {
            (0..y).flat_map(move |j| (0..z).map(move |k| UVec3::new(i, j, k)))
        })
    }

    fn offset(&self, coord: UVec3) -> Option<usize> {
        (coord.x < self.dims.x && coord.y < self.dims.y && coord.z < self.dims.z)
            .then(|| ((coord.x * self.dims.y + coord.y) * self.dims.z + coord.z) as usize)
    }

    /// Built-in board used when no board file is configured: an immovable
    /// base layer with movable stacks and a few gaps above it.
    pub fn demo() -> Self {
        let dims = UVec3::new(5, 4, 3);
        let mut cells = vec![-1i8; (dims.x * dims.y * dims.z) as usize];
        let at = |i: u32, j: u32, k: u32| ((i * dims.y + j) * dims.z + k) as usize;
        for i in 0..dims.x {
            for j in 0..dims.y {
                cells[at(i, j, 0)] = 0;
                if (i + j) % 3 != 0 {
                    cells[at(i, j, 1)] = 1 + ((i + j) % 4) as i8;
                }
                if (i + j) % 4 == 0 {
                    cells[at(i, j, 2)] = 1 + (i % 4) as i8;
                }
            }
        }
        Self { dims, cells }
    }
}

#[derive(Deserialize)]
struct BoardFile {
    dims: [u32; 3],
    cells: Vec<i8>,
}

/// Loads a board from a JSON file: `{"dims": [x, y, z], "cells": [...]}`.
pub fn load_board(path: &Path) -> Result<Board, BoardError> {
    let raw = fs::read_to_string(path).map_err(|source| BoardError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file: BoardFile = serde_json::from_str(&raw).map_err(|source| BoardError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Board::new(UVec3::from_array(file.dims), file.cells)
}

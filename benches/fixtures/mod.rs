// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic board sets for benchmarks (no RNG in the fixtures themselves).

use obf_bridge::format::obf::{FileMap, ImportedBoard};
use obf_bridge::model::{Board, BoardId, Cell, CellId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    /// Levels below the root.
    pub depth: usize,
    /// Navigation cells per non-leaf board.
    pub fanout: usize,
    pub rows: u32,
    pub columns: u32,
}

impl TreeParams {
    pub const fn new(depth: usize, fanout: usize, rows: u32, columns: u32) -> Self {
        Self {
            depth,
            fanout,
            rows,
            columns,
        }
    }

    pub fn board_count(self) -> usize {
        (0..=self.depth).map(|level| self.fanout.pow(level as u32)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumWide,
    LargeDeep,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumWide => "medium_wide",
            Self::LargeDeep => "large_deep",
        }
    }

    pub const fn params(self) -> TreeParams {
        match self {
            Self::Small => TreeParams::new(2, 3, 4, 5),
            Self::MediumWide => TreeParams::new(2, 12, 6, 8),
            Self::LargeDeep => TreeParams::new(4, 6, 8, 10),
        }
    }
}

fn board_id(path: &str) -> BoardId {
    BoardId::new(format!("b{path}")).expect("valid board id")
}

fn cell_id(path: &str, index: usize) -> CellId {
    CellId::new(format!("b{path}-c{index:03}")).expect("valid cell id")
}

/// A navigation tree: every board fills its grid with words and links its first `fanout` cells
/// to child boards. Leaves also carry one link back to the root to exercise cross links.
pub fn tree(params: TreeParams) -> Vec<Board> {
    assert!(params.fanout >= 1, "fanout must be >= 1");
    let slots = (params.rows * params.columns) as usize;
    assert!(slots > params.fanout, "grid must fit fanout + 1 cells");

    let mut boards = Vec::with_capacity(params.board_count());
    let mut level = vec![String::new()];

    for depth in 0..=params.depth {
        let mut next_level = Vec::new();
        for path in &level {
            let mut board = Board::new(
                board_id(path),
                format!("Board {path}"),
                params.rows,
                params.columns,
            );

            for index in 0..slots {
                let mut cell = Cell::with_caption(cell_id(path, index), index, format!("w{index}"));
                if index % 4 == 0 {
                    cell.set_image_url(Some(format!("https://symbols.example.com/{index}.png")));
                }

                if depth < params.depth && index < params.fanout {
                    let child = format!("{path}.{index}");
                    cell.set_linked_board_id(Some(board_id(&child)));
                    next_level.push(child);
                } else if depth == params.depth && index == slots - 1 {
                    cell.set_linked_board_id(Some(board_id("")));
                }

                board.push_cell(cell);
            }

            boards.push(board);
        }
        level = next_level;
    }

    boards
}

pub fn fixture(case: Case) -> Vec<Board> {
    tree(case.params())
}

pub fn checksum_file_map(file_map: &FileMap) -> u64 {
    let mut acc = file_map.manifest().paths.boards.len() as u64;
    for (entry_name, document) in file_map.boards() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(entry_name.len() as u64);
        acc = acc.wrapping_add(document.buttons.len() as u64);
    }
    acc
}

pub fn checksum_imported(boards: &[ImportedBoard]) -> u64 {
    let mut acc = 0u64;
    for board in boards {
        for cell in board.cells() {
            acc = acc.wrapping_mul(31).wrapping_add(cell.index() as u64);
            if cell.linked_to_obf_id().is_some() {
                acc = acc.wrapping_add(7);
            }
        }
    }
    acc
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::board::{Board, Cell};
use super::ids::{BoardId, CellId};

pub(crate) fn bid(value: &str) -> BoardId {
    BoardId::new(value).expect("board id")
}

pub(crate) fn cid(value: &str) -> CellId {
    CellId::new(value).expect("cell id")
}

pub(crate) fn captioned(board: &mut Board, cell_id: &str, index: usize, caption: &str) {
    board.push_cell(Cell::with_caption(cid(cell_id), index, caption));
}

pub(crate) fn link_cell(
    board: &mut Board,
    cell_id: &str,
    index: usize,
    caption: &str,
    target: &str,
) {
    let mut cell = Cell::with_caption(cid(cell_id), index, caption);
    cell.set_linked_board_id(Some(bid(target)));
    board.push_cell(cell);
}

/// `home -> food -> fruit`, each a 2x2 board with one navigation cell.
pub(crate) fn linked_board_chain() -> Vec<Board> {
    let mut home = Board::new(bid("home"), "Home", 2, 2);
    captioned(&mut home, "h0", 0, "I");
    link_cell(&mut home, "h1", 1, "food", "food");

    let mut food = Board::new(bid("food"), "Food", 2, 2);
    captioned(&mut food, "f0", 0, "bread");
    link_cell(&mut food, "f3", 3, "fruit", "fruit");

    let mut fruit = Board::new(bid("fruit"), "Fruit", 2, 2);
    captioned(&mut fruit, "r0", 0, "apple");
    captioned(&mut fruit, "r2", 2, "pear");

    vec![home, food, fruit]
}

/// A 3x4 board with captions, colours and images but no links.
pub(crate) fn core_vocabulary_board() -> Board {
    let mut board = Board::new(bid("core"), "Core vocabulary", 3, 4);

    let words = ["I", "want", "more", "stop", "go", "help", "you", "like", "not"];
    for (index, word) in words.iter().enumerate() {
        // Leave slot 5 empty to cover gaps in the grid.
        let index = if index >= 5 { index + 1 } else { index };
        let mut cell = Cell::with_caption(cid(&format!("core-{index}")), index, *word);
        if index % 2 == 0 {
            cell.set_image_url(Some(format!("https://symbols.example.com/{word}.png")));
        }
        if index % 3 == 0 {
            cell.set_background_colour(Some("rgb(255, 255, 170)"));
        }
        board.push_cell(cell);
    }

    board
}

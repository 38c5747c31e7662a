// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{BoardId, CellId};

/// One communication board: a `rows x columns` grid of cells.
///
/// Cells address their slot through a zero-based row-major `index`. Slots without a cell are
/// empty; cells whose index falls outside the declared grid are kept here but never exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board_id: BoardId,
    name: String,
    rows: u32,
    columns: u32,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(board_id: BoardId, name: impl Into<String>, rows: u32, columns: u32) -> Self {
        Self {
            board_id,
            name: name.into(),
            rows,
            columns,
            cells: Vec::new(),
        }
    }

    pub fn board_id(&self) -> &BoardId {
        &self.board_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn set_dimensions(&mut self, rows: u32, columns: u32) {
        self.rows = rows;
        self.columns = columns;
    }

    /// Number of grid slots declared by `rows x columns`.
    pub fn slot_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.cells
    }

    pub fn push_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.index == index)
    }

    /// Ids of every board this board links to, in cell order. May contain duplicates.
    pub fn linked_board_ids(&self) -> impl Iterator<Item = &BoardId> + '_ {
        self.cells.iter().filter_map(Cell::linked_board_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    cell_id: CellId,
    index: usize,
    caption: Option<String>,
    background_colour: Option<String>,
    image_url: Option<String>,
    linked_board_id: Option<BoardId>,
}

impl Cell {
    pub fn new(cell_id: CellId, index: usize) -> Self {
        Self {
            cell_id,
            index,
            caption: None,
            background_colour: None,
            image_url: None,
            linked_board_id: None,
        }
    }

    pub fn with_caption(cell_id: CellId, index: usize, caption: impl Into<String>) -> Self {
        let mut cell = Self::new(cell_id, index);
        cell.caption = Some(caption.into());
        cell
    }

    pub fn cell_id(&self) -> &CellId {
        &self.cell_id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn set_caption<T: Into<String>>(&mut self, caption: Option<T>) {
        self.caption = caption.map(Into::into);
    }

    pub fn background_colour(&self) -> Option<&str> {
        self.background_colour.as_deref()
    }

    pub fn set_background_colour<T: Into<String>>(&mut self, colour: Option<T>) {
        self.background_colour = colour.map(Into::into);
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn set_image_url<T: Into<String>>(&mut self, url: Option<T>) {
        self.image_url = url.map(Into::into);
    }

    pub fn linked_board_id(&self) -> Option<&BoardId> {
        self.linked_board_id.as_ref()
    }

    /// Sets or clears the navigation target. No graph rules are checked here; see
    /// [`crate::model::LinkGraph::check_link`].
    pub fn set_linked_board_id(&mut self, board_id: Option<BoardId>) {
        self.linked_board_id = board_id;
    }
}

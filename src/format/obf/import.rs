// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! OBF -> board graph import.
//!
//! Imported boards cannot carry internal ids yet: those are minted when the persistence layer
//! saves them. Each [`ImportedBoard`] therefore keeps its document id (`obf_id`) and each
//! [`ImportedCell`] its link target in the external id space (`linked_to_obf_id`).
//! [`finish_import`] performs the handoff once real ids exist.
//!
//! Import never fails on a parsed archive: missing buttons and images become empty content and
//! links to documents that are not in the archive are dropped.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::{debug, warn};

use super::document::{Button, Document, FileMap, ImageRef};
use crate::model::{Board, BoardId, Cell, CellId, MediaId};

/// A media file already mirrored by the media-storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    pub url: String,
    pub media_id: MediaId,
}

/// Resolves archive-relative image paths to mirrored media.
pub trait MediaLookup {
    fn media_for_path(&self, path: &str) -> Option<MediaRecord>;
}

/// A lookup that knows no media; only inline image urls are imported.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMedia;

impl MediaLookup for NoMedia {
    fn media_for_path(&self, _path: &str) -> Option<MediaRecord> {
        None
    }
}

impl<S: BuildHasher> MediaLookup for HashMap<String, MediaRecord, S> {
    fn media_for_path(&self, path: &str) -> Option<MediaRecord> {
        self.get(path).cloned()
    }
}

impl MediaLookup for BTreeMap<String, MediaRecord> {
    fn media_for_path(&self, path: &str) -> Option<MediaRecord> {
        self.get(path).cloned()
    }
}

impl<M: MediaLookup + ?Sized> MediaLookup for &M {
    fn media_for_path(&self, path: &str) -> Option<MediaRecord> {
        (**self).media_for_path(path)
    }
}

/// A board built from one document, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedBoard {
    obf_id: String,
    name: String,
    rows: u32,
    columns: u32,
    cells: Vec<ImportedCell>,
}

impl ImportedBoard {
    /// Id of the source document; the key links are resolved against.
    pub fn obf_id(&self) -> &str {
        &self.obf_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// One cell per slot of the imported `grid.order` in row-major order, empty slots
    /// included. Slots declared beyond the order matrix are not materialized.
    pub fn cells(&self) -> &[ImportedCell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [ImportedCell] {
        &mut self.cells
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportedCell {
    index: usize,
    caption: Option<String>,
    background_colour: Option<String>,
    image_url: Option<String>,
    media_id: Option<MediaId>,
    linked_to_obf_id: Option<String>,
}

impl ImportedCell {
    pub fn empty(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn background_colour(&self) -> Option<&str> {
        self.background_colour.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Set when the image url came from the media lookup.
    pub fn media_id(&self) -> Option<&MediaId> {
        self.media_id.as_ref()
    }

    pub fn linked_to_obf_id(&self) -> Option<&str> {
        self.linked_to_obf_id.as_deref()
    }

    pub fn set_linked_to_obf_id<T: Into<String>>(&mut self, obf_id: Option<T>) {
        self.linked_to_obf_id = obf_id.map(Into::into);
    }

    pub fn is_empty(&self) -> bool {
        self.caption.is_none()
            && self.background_colour.is_none()
            && self.image_url.is_none()
            && self.linked_to_obf_id.is_none()
    }
}

/// Converts one document. Links stay in the external id space.
///
/// Cells come from walking `grid.order`, clipped to the declared dimensions; declared
/// dimensions alone never produce cells.
pub fn import_document<M: MediaLookup + ?Sized>(document: &Document, media: &M) -> ImportedBoard {
    let (rows, columns) = grid_dimensions(document);
    let order = &document.grid.order;
    let walked_rows = rows.min(order.len());
    let walked_columns = columns.min(
        order
            .iter()
            .take(walked_rows)
            .map(Vec::len)
            .max()
            .unwrap_or(0),
    );

    let mut buttons: HashMap<&str, &Button> = HashMap::with_capacity(document.buttons.len());
    for button in &document.buttons {
        buttons.entry(button.id.as_str()).or_insert(button);
    }
    let mut images: HashMap<&str, &ImageRef> = HashMap::with_capacity(document.images.len());
    for image in &document.images {
        images.entry(image.id.as_str()).or_insert(image);
    }

    let mut cells = Vec::new();
    for row in 0..walked_rows {
        for column in 0..walked_columns {
            let index = row.saturating_mul(columns).saturating_add(column);
            let mut cell = ImportedCell::empty(index);

            if let Some(button_id) = document.grid.slot(row, column) {
                match buttons.get(button_id) {
                    Some(button) => fill_cell(&mut cell, button, &images, media),
                    None => warn!(
                        document_id = %document.id,
                        button_id,
                        index,
                        "grid references a missing button; importing an empty cell"
                    ),
                }
            }

            cells.push(cell);
        }
    }

    ImportedBoard {
        obf_id: document.id.clone(),
        name: document.name.clone(),
        rows: u32::try_from(rows).unwrap_or(u32::MAX),
        columns: u32::try_from(columns).unwrap_or(u32::MAX),
        cells,
    }
}

/// Declared dimensions, falling back to the shape of `grid.order` when they are missing.
fn grid_dimensions(document: &Document) -> (usize, usize) {
    let grid = &document.grid;
    let rows = match grid.rows {
        0 => grid.order.len(),
        rows => rows as usize,
    };
    let columns = match grid.columns {
        0 => grid.order.iter().map(Vec::len).max().unwrap_or(0),
        columns => columns as usize,
    };
    (rows, columns)
}

fn fill_cell<M: MediaLookup + ?Sized>(
    cell: &mut ImportedCell,
    button: &Button,
    images: &HashMap<&str, &ImageRef>,
    media: &M,
) {
    cell.caption = non_blank(button.label.as_deref());
    cell.background_colour = non_blank(button.background_color.as_deref());

    if let Some(image) = button
        .image_id
        .as_deref()
        .and_then(|image_id| images.get(image_id))
    {
        if let Some(url) = non_blank(image.url.as_deref()) {
            cell.image_url = Some(url);
        } else if let Some(record) = image
            .path
            .as_deref()
            .and_then(|path| media.media_for_path(path))
        {
            cell.image_url = Some(record.url);
            cell.media_id = Some(record.media_id);
        } else {
            debug!(
                button_id = %button.id,
                image_id = %image.id,
                "image has neither a url nor mirrored media; importing without image"
            );
        }
    }

    cell.linked_to_obf_id = button.load_board.as_ref().and_then(|load_board| {
        non_blank(load_board.path.as_deref()).or_else(|| non_blank(load_board.id.as_deref()))
    });
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(ToOwned::to_owned)
}

/// Confirms every link marker against the whole archive.
///
/// Markers naming a document of `file_map` (by entry name or id) are normalized to that
/// document's id; all others are dropped.
pub fn fixup_links(boards: &mut [ImportedBoard], file_map: &FileMap) {
    for board in boards.iter_mut() {
        for cell in &mut board.cells {
            let Some(marker) = cell.linked_to_obf_id.take() else {
                continue;
            };

            match file_map.find_board_entry(&marker) {
                Some((entry_name, target)) => {
                    cell.linked_to_obf_id = Some(canonical_id(entry_name, target).to_owned());
                }
                None => warn!(
                    board = %board.obf_id,
                    index = cell.index,
                    target = %marker,
                    "link target is not in the archive; dropping link"
                ),
            }
        }
    }
}

// Documents without an id are known by their entry name.
fn canonical_id<'a>(entry_name: &'a str, document: &'a Document) -> &'a str {
    if document.id.is_empty() {
        entry_name
    } else {
        &document.id
    }
}

/// Imports every document of an archive.
///
/// The manifest root comes first when the archive has it; the other documents follow in entry
/// name order.
#[tracing::instrument(level = "debug", skip_all, fields(boards = file_map.boards().len()))]
pub fn import_boards<M: MediaLookup + ?Sized>(
    file_map: &FileMap,
    media: &M,
) -> Vec<ImportedBoard> {
    let root_entry = file_map
        .manifest()
        .root
        .as_deref()
        .and_then(|root| file_map.find_board_entry(root))
        .map(|(entry_name, _)| entry_name);

    let ordered = root_entry.into_iter().chain(
        file_map
            .boards()
            .keys()
            .map(String::as_str)
            .filter(|entry_name| Some(*entry_name) != root_entry),
    );

    let mut boards: Vec<ImportedBoard> = ordered
        .map(|entry_name| {
            let document = &file_map.boards()[entry_name];
            let mut board = import_document(document, media);
            board.obf_id = canonical_id(entry_name, document).to_owned();
            board
        })
        .collect();

    fixup_links(&mut boards, file_map);
    boards
}

/// Supplies the identities the persistence layer mints while saving an import.
pub trait IdMinter {
    fn board_id(&mut self, board: &ImportedBoard) -> BoardId;
    fn cell_id(&mut self, board_id: &BoardId, cell: &ImportedCell) -> CellId;
}

/// Turns imported boards into internal boards.
///
/// Mints a board id per board, maps every `obf_id` to it, then resolves each cell's
/// `linked_to_obf_id` through that map. Empty cells become empty grid slots; scratch fields are
/// discarded.
pub fn finish_import<M: IdMinter + ?Sized>(
    boards: Vec<ImportedBoard>,
    minter: &mut M,
) -> Vec<Board> {
    let board_ids: Vec<BoardId> = boards.iter().map(|board| minter.board_id(board)).collect();
    let by_obf_id: HashMap<&str, &BoardId> = boards
        .iter()
        .zip(&board_ids)
        .map(|(board, board_id)| (board.obf_id(), board_id))
        .collect();

    let mut resolved = Vec::with_capacity(boards.len());
    for (imported, board_id) in boards.iter().zip(&board_ids) {
        let mut board = Board::new(
            board_id.clone(),
            imported.name(),
            imported.rows(),
            imported.columns(),
        );

        for imported_cell in imported.cells().iter().filter(|cell| !cell.is_empty()) {
            let cell_id = minter.cell_id(board_id, imported_cell);
            let mut cell = Cell::new(cell_id, imported_cell.index());
            cell.set_caption(imported_cell.caption());
            cell.set_background_colour(imported_cell.background_colour());
            cell.set_image_url(imported_cell.image_url());
            cell.set_linked_board_id(
                imported_cell
                    .linked_to_obf_id()
                    .and_then(|obf_id| by_obf_id.get(obf_id))
                    .map(|board_id| (*board_id).clone()),
            );
            board.push_cell(cell);
        }

        resolved.push(board);
    }

    resolved
}

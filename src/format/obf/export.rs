// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Board graph -> OBF export.
//!
//! Export runs in two passes. Each board becomes a [`Document`] on its own, with navigation
//! buttons holding the *internal* id of their target as a placeholder. Once every board in the
//! batch has an external id, [`rewrite_board_links`] swaps the placeholders for external ids.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use super::document::{Button, Document, FileMap, ImageRef, LoadBoard, Manifest};
use super::ident::{IdGenerator, IdKind};
use crate::model::{Board, BoardId, Cell};

/// Converts one board. Links are left as internal-id placeholders.
pub fn export_board<R: Rng>(board: &Board, ids: &mut IdGenerator<R>) -> Document {
    let document_id = ids.generate(IdKind::Board, board.board_id().as_str());
    let mut document = Document::new(document_id, board.name(), board.rows(), board.columns());

    let rows = board.rows() as usize;
    let columns = board.columns() as usize;

    // `index` decides placement, not insertion order.
    let mut cells: Vec<&Cell> = board.cells().iter().collect();
    cells.sort_by_key(|cell| cell.index());

    for cell in cells {
        let Some((row, column)) = grid_position(cell.index(), rows, columns) else {
            debug!(
                board_id = %board.board_id(),
                cell_id = %cell.cell_id(),
                index = cell.index(),
                rows,
                columns,
                "cell lies outside the declared grid; not exported"
            );
            continue;
        };

        let slot = &mut document.grid.order[row][column];
        if slot.is_some() {
            debug!(
                board_id = %board.board_id(),
                cell_id = %cell.cell_id(),
                index = cell.index(),
                "grid slot already taken; not exported"
            );
            continue;
        }

        let button = export_cell(cell, &mut document.images, ids);
        *slot = Some(button.id.clone());
        document.buttons.push(button);
    }

    document
}

fn grid_position(index: usize, rows: usize, columns: usize) -> Option<(usize, usize)> {
    if columns == 0 {
        return None;
    }
    let row = index / columns;
    (row < rows).then_some((row, index % columns))
}

fn export_cell<R: Rng>(
    cell: &Cell,
    images: &mut Vec<ImageRef>,
    ids: &mut IdGenerator<R>,
) -> Button {
    let origin = cell.cell_id().as_str();

    let mut button = Button {
        id: ids.generate(IdKind::Button, origin),
        label: non_blank(cell.caption()),
        background_color: non_blank(cell.background_colour()),
        ..Button::default()
    };

    if let Some(url) = non_blank(cell.image_url()) {
        let image_id = ids.generate(IdKind::Image, origin);
        images.push(ImageRef {
            id: image_id.clone(),
            url: Some(url),
            path: None,
        });
        button.image_id = Some(image_id);
    }

    if let Some(target) = cell.linked_board_id() {
        button.load_board = Some(LoadBoard {
            id: Some(target.as_str().to_owned()),
            path: None,
        });
    }

    button
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(ToOwned::to_owned)
}

/// Replaces internal-id placeholders in `load_board` with external document ids.
///
/// `external_ids` maps each internal board id of the batch to its document id. A button whose
/// target is not in the map loses its `load_board` entirely.
pub fn rewrite_board_links(
    documents: &mut [Document],
    external_ids: &BTreeMap<BoardId, String>,
) {
    for document in documents.iter_mut() {
        for button in &mut document.buttons {
            let Some(placeholder) = button.load_board.as_ref().map(|lb| lb.id.clone()) else {
                continue;
            };

            match placeholder
                .as_deref()
                .and_then(|internal_id| external_ids.get(internal_id))
            {
                Some(external_id) => {
                    button.load_board = Some(LoadBoard {
                        id: Some(external_id.clone()),
                        path: Some(external_id.clone()),
                    });
                }
                None => {
                    debug!(
                        document_id = %document.id,
                        button_id = %button.id,
                        target = ?placeholder,
                        "link target is not part of the export batch; dropping load_board"
                    );
                    button.load_board = None;
                }
            }
        }
    }
}

/// Builds the archive manifest. Every board path is its own id.
pub fn build_manifest(root: Option<&str>, documents: &[Document]) -> Manifest {
    let mut manifest = Manifest {
        root: root.map(ToOwned::to_owned),
        ..Manifest::default()
    };
    for document in documents {
        manifest
            .paths
            .boards
            .insert(document.id.clone(), document.id.clone());
    }
    manifest
}

/// Exports a batch of boards into the contents of one OBZ archive.
///
/// The first board in `boards` becomes the manifest root.
#[tracing::instrument(level = "debug", skip_all, fields(boards = boards.len()))]
pub fn export_boards<R: Rng>(boards: &[Board], ids: &mut IdGenerator<R>) -> FileMap {
    let mut documents: Vec<Document> = boards
        .iter()
        .map(|board| export_board(board, ids))
        .collect();

    let external_ids: BTreeMap<BoardId, String> = boards
        .iter()
        .zip(&documents)
        .map(|(board, document)| (board.board_id().clone(), document.id.clone()))
        .collect();
    rewrite_board_links(&mut documents, &external_ids);

    let root = documents.first().map(|document| document.id.clone());
    let mut file_map = FileMap::new(build_manifest(root.as_deref(), &documents));
    for document in documents {
        file_map.insert_board(document);
    }

    debug!(documents = file_map.boards().len(), "exported board batch");
    file_map
}

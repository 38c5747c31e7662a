// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Open Board Format (OBF) documents and OBZ archive contents.

pub mod document;
pub mod export;
pub mod ident;
pub mod import;

pub use document::{
    document_schema, manifest_schema, Button, Document, FileMap, FileMapError, Grid, ImageRef,
    LoadBoard, Manifest, ManifestPaths, MANIFEST_ENTRY, OBF_FORMAT,
};
pub use export::{build_manifest, export_board, export_boards, rewrite_board_links};
pub use ident::{IdGenerator, IdKind, BOARD_FILE_SUFFIX, MIN_RANDOM_DIGITS};
pub use import::{
    finish_import, fixup_links, import_boards, import_document, IdMinter, ImportedBoard,
    ImportedCell, MediaLookup, MediaRecord, NoMedia,
};

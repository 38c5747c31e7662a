// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::io::{self, Cursor, Read, Write};
use std::path::{Component, Path};

use thiserror::Error;
use tracing::debug;
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::config::{Compression, ObfOptions};
use crate::format::obf::{FileMap, FileMapError, BOARD_FILE_SUFFIX, MANIFEST_ENTRY};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("zip error: {0}")]
    Zip(#[from] ZipError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    FileMap(#[from] FileMapError),
    #[error("unsafe archive entry name: {name:?}")]
    UnsafeEntryName { name: String },
    #[error("archive entry {name:?} is written twice")]
    DuplicateEntry { name: String },
}

/// Decoded archive contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObzArchive {
    pub file_map: FileMap,
    /// Non-JSON entries (images, sounds) keyed by entry name.
    pub media: BTreeMap<String, Vec<u8>>,
}

/// Packs `file_map` and `media` into OBZ bytes.
///
/// Media names must be safe relative paths and must not shadow `manifest.json` or a board
/// entry.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(boards = file_map.boards().len(), media = media.len())
)]
pub fn write_obz(
    file_map: &FileMap,
    media: &BTreeMap<String, Vec<u8>>,
    options: &ObfOptions,
) -> Result<Vec<u8>, ArchiveError> {
    let json_entries = file_map.to_json_entries(options.pretty_json)?;
    for name in json_entries.keys() {
        check_entry_name(name)?;
    }
    for name in media.keys() {
        check_entry_name(name)?;
        if json_entries.contains_key(name) || is_json_entry(name) {
            return Err(ArchiveError::DuplicateEntry { name: name.clone() });
        }
    }

    let method = match options.compression {
        Compression::Stored => CompressionMethod::Stored,
        Compression::Deflated => CompressionMethod::Deflated,
    };
    let file_options = FileOptions::default().compression_method(method);

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut zip = ZipWriter::new(&mut cursor);
        let entries = json_entries
            .iter()
            .chain(media.iter())
            .map(|(name, bytes)| (name.as_str(), bytes.as_slice()));
        for (name, bytes) in entries {
            zip.start_file(name, file_options)?;
            zip.write_all(bytes)?;
        }
        zip.finish()?;
    }

    let bytes = cursor.into_inner();
    debug!(size = bytes.len(), "wrote obz archive");
    Ok(bytes)
}

/// Unpacks OBZ bytes.
///
/// `manifest.json` and `*.obf` entries are parsed as JSON; every other file is returned as
/// media. The first unsafe name, unreadable entry or invalid document aborts the read.
#[tracing::instrument(level = "debug", skip_all, fields(size = bytes.len()))]
pub fn read_obz(bytes: &[u8]) -> Result<ObzArchive, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut json_entries: Vec<(String, Vec<u8>)> = Vec::new();
    let mut media = BTreeMap::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_owned();
        check_entry_name(&name)?;

        // The declared size is archive input; let the buffer grow with the actual data.
        let mut buffer = Vec::new();
        entry.read_to_end(&mut buffer)?;

        if is_json_entry(&name) {
            json_entries.push((name, buffer));
        } else {
            media.insert(name, buffer);
        }
    }

    let file_map = FileMap::from_json_entries(json_entries)?;
    debug!(
        boards = file_map.boards().len(),
        media = media.len(),
        "read obz archive"
    );
    Ok(ObzArchive { file_map, media })
}

fn is_json_entry(name: &str) -> bool {
    name == MANIFEST_ENTRY || name.ends_with(BOARD_FILE_SUFFIX)
}

fn check_entry_name(name: &str) -> Result<(), ArchiveError> {
    let unsafe_name = || ArchiveError::UnsafeEntryName {
        name: name.to_owned(),
    };

    if name.is_empty() || name.contains('\\') || name.starts_with('/') {
        return Err(unsafe_name());
    }

    let path = Path::new(name);
    if path.is_absolute() {
        return Err(unsafe_name());
    }
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::ParentDir => {
                return Err(unsafe_name());
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    Ok(())
}

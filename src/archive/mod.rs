// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory OBZ (zipped OBF) archives.
//!
//! The transforms in [`crate::format::obf`] only deal with a [`FileMap`]. This module packs a
//! file map plus media bytes into zip bytes and back. Nothing is written to disk.
//!
//! [`FileMap`]: crate::format::obf::FileMap

mod obz;

pub use obz::{read_obz, write_obz, ArchiveError, ObzArchive};

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! obf-bridge: Open Board Format export and import for linked AAC communication boards.
//!
//! - [`model`] holds the internal board graph (boards, cells, navigation links).
//! - [`format::obf`] converts between that graph and OBF documents plus their manifest.
//! - [`archive`] packs and unpacks the zipped OBZ form in memory.
//! - [`config`] carries the export options.
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod archive;
pub mod config;
pub mod format;
pub mod model;

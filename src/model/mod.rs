// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Internal board model.
//!
//! Boards own grid-positioned cells; a cell may link to another board of the same batch.

pub mod board;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;

pub use board::{Board, Cell};
pub use graph::{LinkError, LinkGraph};
pub use ids::{BoardId, CellId, Id, IdError, MediaId};

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Board link graph and link validation.
//!
//! Cells link boards freely; this graph is where the persistence layer asks whether a new link
//! keeps the board set a hierarchy. The OBF transforms never consult it.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use thiserror::Error;

use super::board::Board;
use super::ids::BoardId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("board is not part of this graph: {board_id}")]
    UnknownBoard { board_id: BoardId },
    #[error("board cannot link to itself: {board_id}")]
    SelfLink { board_id: BoardId },
    #[error("board {from} cannot link to its ancestor {to}")]
    TargetIsAncestor { from: BoardId, to: BoardId },
    #[error("board {from} cannot link to its descendant {to}")]
    TargetIsDescendant { from: BoardId, to: BoardId },
}

/// Parent/child adjacency over a set of boards. A board is the parent of every board one of
/// its cells links to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkGraph {
    children: BTreeMap<BoardId, BTreeSet<BoardId>>,
    parents: BTreeMap<BoardId, BTreeSet<BoardId>>,
}

impl LinkGraph {
    pub fn from_boards<'a>(boards: impl IntoIterator<Item = &'a Board>) -> Self {
        let boards: Vec<&Board> = boards.into_iter().collect();
        let mut graph = Self::default();

        for board in &boards {
            graph.add_board(board.board_id().clone());
        }
        for board in &boards {
            for target in board.linked_board_ids() {
                graph.add_link(board.board_id().clone(), target.clone());
            }
        }

        graph
    }

    pub fn add_board(&mut self, board_id: BoardId) {
        self.children.entry(board_id.clone()).or_default();
        self.parents.entry(board_id).or_default();
    }

    /// Records an edge without any validation; unknown endpoints are added as boards.
    pub fn add_link(&mut self, from: BoardId, to: BoardId) {
        self.add_board(from.clone());
        self.add_board(to.clone());
        self.children
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
        self.parents.entry(to).or_default().insert(from);
    }

    pub fn contains(&self, board_id: &BoardId) -> bool {
        self.children.contains_key(board_id)
    }

    pub fn children(&self, board_id: &BoardId) -> impl Iterator<Item = &BoardId> + '_ {
        self.children.get(board_id).into_iter().flatten()
    }

    pub fn parents(&self, board_id: &BoardId) -> impl Iterator<Item = &BoardId> + '_ {
        self.parents.get(board_id).into_iter().flatten()
    }

    /// Every board reachable by following links forward, excluding `board_id` itself.
    pub fn descendants(&self, board_id: &BoardId) -> BTreeSet<BoardId> {
        bfs_reachable(&self.children, board_id)
    }

    /// Every board that can reach `board_id`, excluding `board_id` itself.
    pub fn ancestors(&self, board_id: &BoardId) -> BTreeSet<BoardId> {
        bfs_reachable(&self.parents, board_id)
    }

    /// Checks whether `from -> to` may be added.
    ///
    /// Re-linking an existing direct child is allowed because it adds no new edge.
    pub fn check_link(&self, from: &BoardId, to: &BoardId) -> Result<(), LinkError> {
        for board_id in [from, to] {
            if !self.contains(board_id) {
                return Err(LinkError::UnknownBoard {
                    board_id: board_id.clone(),
                });
            }
        }

        if from == to {
            return Err(LinkError::SelfLink {
                board_id: from.clone(),
            });
        }

        if self.ancestors(from).contains(to) {
            return Err(LinkError::TargetIsAncestor {
                from: from.clone(),
                to: to.clone(),
            });
        }

        let is_child = self.children(from).any(|child| child == to);
        if !is_child && self.descendants(from).contains(to) {
            return Err(LinkError::TargetIsDescendant {
                from: from.clone(),
                to: to.clone(),
            });
        }

        Ok(())
    }
}

fn bfs_reachable(
    adjacency: &BTreeMap<BoardId, BTreeSet<BoardId>>,
    start: &BoardId,
) -> BTreeSet<BoardId> {
    let mut visited: BTreeSet<BoardId> = BTreeSet::new();
    if !adjacency.contains_key(start) {
        return visited;
    }

    let mut queue: VecDeque<&BoardId> = VecDeque::new();
    queue.push_back(start);

    while let Some(board_id) = queue.pop_front() {
        for next_id in adjacency.get(board_id).into_iter().flatten() {
            if visited.insert(next_id.clone()) {
                queue.push_back(next_id);
            }
        }
    }

    // Imported board sets may already contain cycles.
    visited.remove(start);
    visited
}

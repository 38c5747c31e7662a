// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! External identifiers for OBF archives.
//!
//! Identifiers look like `button-4172093385c17`: a kind tag, a run of random decimal digits and
//! the internal id they were generated for. Board identifiers end in `.obf` because they are
//! also the archive entry names. Collisions are not checked.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Suffix carried by board identifiers.
pub const BOARD_FILE_SUFFIX: &str = ".obf";

/// Lower bound on random digits per identifier (about 33 bits).
pub const MIN_RANDOM_DIGITS: usize = 10;

// 10^18 still fits in a u64 draw.
const MAX_DIGITS_PER_DRAW: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Board,
    Button,
    Image,
}

impl IdKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Button => "button",
            Self::Image => "image",
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdGenerator<R = StdRng> {
    rng: R,
    digits: usize,
}

impl IdGenerator<StdRng> {
    /// A generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for IdGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> IdGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            digits: MIN_RANDOM_DIGITS,
        }
    }

    /// Values below [`MIN_RANDOM_DIGITS`] are raised to it.
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits.max(MIN_RANDOM_DIGITS);
        self
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn generate(&mut self, kind: IdKind, origin: &str) -> String {
        let tag = kind.tag();
        let mut id = String::with_capacity(
            tag.len() + 1 + self.digits + origin.len() + BOARD_FILE_SUFFIX.len(),
        );
        id.push_str(tag);
        id.push('-');
        self.push_random_digits(&mut id);
        id.push_str(origin);
        if kind == IdKind::Board {
            id.push_str(BOARD_FILE_SUFFIX);
        }
        id
    }

    fn push_random_digits(&mut self, out: &mut String) {
        let mut buffer = itoa::Buffer::new();
        let mut remaining = self.digits;

        while remaining > 0 {
            let width = remaining.min(MAX_DIGITS_PER_DRAW);
            let value: u64 = self.rng.gen_range(0..10u64.pow(width as u32));
            let formatted = buffer.format(value);
            for _ in formatted.len()..width {
                out.push('0');
            }
            out.push_str(formatted);
            remaining -= width;
        }
    }
}

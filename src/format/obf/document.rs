// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! OBF wire types.
//!
//! Decoding is lenient: missing fields fall back to defaults and ids written as JSON numbers
//! (common in third-party exports) are read as strings. Encoding omits absent optional fields.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The `format` literal written on every document and manifest.
pub const OBF_FORMAT: &str = "open-board-0.1";

/// Archive entry name of the manifest.
pub const MANIFEST_ENTRY: &str = "manifest.json";

/// One board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Document {
    pub format: String,
    #[serde(deserialize_with = "lenient::id")]
    #[schemars(with = "String")]
    pub id: String,
    pub name: String,
    pub grid: Grid,
    pub buttons: Vec<Button>,
    pub images: Vec<ImageRef>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            format: OBF_FORMAT.to_owned(),
            id: String::new(),
            name: String::new(),
            grid: Grid::default(),
            buttons: Vec::new(),
            images: Vec::new(),
        }
    }
}

impl Document {
    /// A document with a dense grid of empty slots.
    pub fn new(id: impl Into<String>, name: impl Into<String>, rows: u32, columns: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grid: Grid::empty(rows, columns),
            ..Self::default()
        }
    }

    pub fn button(&self, button_id: &str) -> Option<&Button> {
        self.buttons.iter().find(|button| button.id == button_id)
    }

    pub fn image(&self, image_id: &str) -> Option<&ImageRef> {
        self.images.iter().find(|image| image.id == image_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Grid {
    pub rows: u32,
    pub columns: u32,
    /// `rows x columns` button ids; `null` marks an empty slot.
    #[serde(deserialize_with = "lenient::order")]
    #[schemars(with = "Vec<Vec<Option<String>>>")]
    pub order: Vec<Vec<Option<String>>>,
}

impl Grid {
    pub fn empty(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            order: vec![vec![None; columns as usize]; rows as usize],
        }
    }

    pub fn slot(&self, row: usize, column: usize) -> Option<&str> {
        self.order.get(row)?.get(column)?.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Button {
    #[serde(deserialize_with = "lenient::id")]
    #[schemars(with = "String")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_id"
    )]
    #[schemars(with = "Option<String>")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_board: Option<LoadBoard>,
}

/// Navigation target of a button. Exported archives keep `id == path`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LoadBoard {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_id"
    )]
    #[schemars(with = "Option<String>")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ImageRef {
    #[serde(deserialize_with = "lenient::id")]
    #[schemars(with = "String")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Archive-relative location of an embedded image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Manifest {
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    pub paths: ManifestPaths,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            format: OBF_FORMAT.to_owned(),
            root: None,
            paths: ManifestPaths::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ManifestPaths {
    pub boards: BTreeMap<String, String>,
    pub images: BTreeMap<String, String>,
    pub sounds: BTreeMap<String, String>,
}

pub fn document_schema() -> schemars::Schema {
    schemars::schema_for!(Document)
}

pub fn manifest_schema() -> schemars::Schema {
    schemars::schema_for!(Manifest)
}

#[derive(Debug, Error)]
pub enum FileMapError {
    #[error("archive has no {}", MANIFEST_ENTRY)]
    MissingManifest,
    #[error("invalid JSON in archive entry {entry}: {source}")]
    Json {
        entry: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The complete JSON contents of an OBZ archive, keyed by archive entry name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileMap {
    manifest: Manifest,
    boards: BTreeMap<String, Document>,
}

impl FileMap {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            boards: BTreeMap::new(),
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn manifest_mut(&mut self) -> &mut Manifest {
        &mut self.manifest
    }

    pub fn boards(&self) -> &BTreeMap<String, Document> {
        &self.boards
    }

    pub fn boards_mut(&mut self) -> &mut BTreeMap<String, Document> {
        &mut self.boards
    }

    /// Inserts a document under its own id (flat archive layout).
    pub fn insert_board(&mut self, document: Document) {
        self.boards.insert(document.id.clone(), document);
    }

    pub fn insert_board_at(&mut self, entry_name: impl Into<String>, document: Document) {
        self.boards.insert(entry_name.into(), document);
    }

    pub fn board(&self, entry_name: &str) -> Option<&Document> {
        self.boards.get(entry_name)
    }

    /// Resolves a board reference by entry name, then by document id.
    pub fn find_board(&self, reference: &str) -> Option<&Document> {
        self.find_board_entry(reference).map(|(_, document)| document)
    }

    /// Like [`FileMap::find_board`], also returning the entry name.
    pub fn find_board_entry(&self, reference: &str) -> Option<(&str, &Document)> {
        if let Some((entry_name, document)) = self.boards.get_key_value(reference) {
            return Some((entry_name.as_str(), document));
        }
        self.boards
            .iter()
            .find(|(_, document)| document.id == reference)
            .map(|(entry_name, document)| (entry_name.as_str(), document))
    }

    /// Entry names, starting with the manifest.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(MANIFEST_ENTRY).chain(self.boards.keys().map(String::as_str))
    }

    pub fn to_json_entries(
        &self,
        pretty: bool,
    ) -> Result<BTreeMap<String, Vec<u8>>, FileMapError> {
        fn encode<T: Serialize>(
            entry: &str,
            value: &T,
            pretty: bool,
        ) -> Result<Vec<u8>, FileMapError> {
            let encoded = if pretty {
                serde_json::to_vec_pretty(value)
            } else {
                serde_json::to_vec(value)
            };
            encoded.map_err(|source| FileMapError::Json {
                entry: entry.to_owned(),
                source,
            })
        }

        let mut entries = BTreeMap::new();
        entries.insert(
            MANIFEST_ENTRY.to_owned(),
            encode(MANIFEST_ENTRY, &self.manifest, pretty)?,
        );
        for (entry_name, document) in &self.boards {
            entries.insert(entry_name.clone(), encode(entry_name, document, pretty)?);
        }
        Ok(entries)
    }

    /// Parses `manifest.json` and treats every other entry as a board document.
    pub fn from_json_entries<I, K, B>(entries: I) -> Result<Self, FileMapError>
    where
        I: IntoIterator<Item = (K, B)>,
        K: Into<String>,
        B: AsRef<[u8]>,
    {
        let mut manifest = None;
        let mut boards = BTreeMap::new();

        for (entry_name, bytes) in entries {
            let entry_name = entry_name.into();
            let json_error = |source: serde_json::Error| FileMapError::Json {
                entry: entry_name.clone(),
                source,
            };

            if entry_name == MANIFEST_ENTRY {
                manifest = Some(serde_json::from_slice(bytes.as_ref()).map_err(json_error)?);
            } else {
                let document: Document =
                    serde_json::from_slice(bytes.as_ref()).map_err(json_error)?;
                boards.insert(entry_name, document);
            }
        }

        let manifest = manifest.ok_or(FileMapError::MissingManifest)?;
        Ok(Self { manifest, boards })
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn value_to_id(value: Value) -> Option<String> {
        match value {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub(super) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(value_to_id(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub(super) fn opt_id<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(value_to_id(Value::deserialize(deserializer)?))
    }

    pub(super) fn order<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<Option<String>>>, D::Error> {
        let Value::Array(rows) = Value::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };

        Ok(rows
            .into_iter()
            .map(|row| match row {
                Value::Array(slots) => slots.into_iter().map(value_to_id).collect(),
                _ => Vec::new(),
            })
            .collect())
    }
}

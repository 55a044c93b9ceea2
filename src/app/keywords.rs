// multiprompt - An embeddable multi-line terminal prompt
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Keyword-list suggestion provider.

use super::autocomplete::Suggestion;
use crate::error::{Error, Result};
use std::path::Path;

const SQL_KEYWORDS: &[(&str, &str)] = &[
    ("SELECT", "Select data from a table"),
    ("FROM", "Specify the source table"),
    ("WHERE", "Filter rows"),
    ("INSERT", "Insert new rows"),
    ("INTO", "Target table for INSERT"),
    ("VALUES", "Row values for INSERT"),
    ("UPDATE", "Modify existing rows"),
    ("SET", "Columns to change in UPDATE"),
    ("DELETE", "Remove rows"),
    ("CREATE", "Create a table, index or view"),
    ("TABLE", "Table object"),
    ("DROP", "Remove a database object"),
    ("JOIN", "Combine rows from two tables"),
    ("LEFT", "Left outer join"),
    ("INNER", "Inner join"),
    ("ON", "Join condition"),
    ("GROUP", "Group rows (GROUP BY)"),
    ("ORDER", "Sort rows (ORDER BY)"),
    ("BY", "Grouping or ordering key"),
    ("HAVING", "Filter groups"),
    ("LIMIT", "Cap the number of rows"),
    ("DISTINCT", "Drop duplicate rows"),
    ("COUNT", "Count rows"),
    ("AND", "Logical and"),
    ("OR", "Logical or"),
    ("NOT", "Logical negation"),
    ("NULL", "Missing value"),
    ("AS", "Alias a column or table"),
];

/// Suggests keywords that start with the typed fragment, in list order.
#[derive(Debug, Clone, Default)]
pub struct KeywordCompleter {
    keywords: Vec<Suggestion>,
}

impl KeywordCompleter {
    pub fn new(keywords: Vec<Suggestion>) -> Self {
        Self { keywords }
    }

    /// Common SQL keywords with short descriptions.
    pub fn sql() -> Self {
        Self::new(SQL_KEYWORDS.iter().map(|(text, desc)| Suggestion::new(*text, *desc)).collect())
    }

    /// Load a JSON array of `{"text": ..., "description": ...}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| Error::KeywordFile { path: path.to_path_buf(), source })?;
        let keywords: Vec<Suggestion> = serde_json::from_str(&raw)
            .map_err(|source| Error::KeywordFormat { path: path.to_path_buf(), source })?;
        tracing::info!(path = %path.display(), count = keywords.len(), "loaded keyword file");
        Ok(Self::new(keywords))
    }

    pub fn keywords(&self) -> &[Suggestion] {
        &self.keywords
    }

    /// Case-insensitive prefix match on the fragment.
    ///
    /// The text before the cursor is accepted for signature compatibility with
    /// context-aware completers but not consulted.
    pub fn complete(&self, _text_before_cursor: &str, fragment: &str) -> Vec<Suggestion> {
        if fragment.is_empty() {
            return Vec::new();
        }
        let needle = fragment.to_lowercase();
        self.keywords
            .iter()
            .filter(|kw| kw.text.to_lowercase().starts_with(&needle))
            .cloned()
            .collect()
    }
}

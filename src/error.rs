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

use std::path::PathBuf;

/// Errors from the fallible edges of the crate. Editing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read keyword file {}", .path.display())]
    KeywordFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid keyword file {}", .path.display())]
    KeywordFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

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

//! Embeddable multi-line terminal prompt.
//!
//! A [`Prompt`] tracks a buffer of lines and a cursor, keeps a history of
//! submitted inputs, and offers autocomplete suggestions for the word left of
//! the cursor. The host feeds it one [`PromptEvent`] at a time and renders the
//! resulting state, for example with [`ui::render`].
//!
//! Behaviour that depends on the input language is injected through
//! [`PromptConfig`]: the word classifier, the completeness check, the
//! suggestion provider and the executor.

pub mod app;
pub mod error;
pub mod ui;

pub use app::autocomplete::Suggestion;
pub use app::config::{PromptConfig, default_is_complete, default_is_word_char};
pub use app::events::{EventOutcome, PromptEvent};
pub use app::keywords::KeywordCompleter;
pub use app::{ExecutionOutput, Prompt, SubmitOutcome};
pub use error::{Error, Result};

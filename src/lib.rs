// This file is part of Pwgen.
//
// Copyright (c) 2025  René Coignard <contact@renecoignard.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod phrase;
pub mod wordlist;

pub use config::{GeneratorConfig, WORDLIST_PATH};
pub use error::{PwgenError, Result};
pub use format::{Layout, format_password};
pub use generator::{generate, transform};
pub use phrase::{Digest, hash_phrase, join_phrase};
pub use wordlist::WordList;

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

/// Word list read from the working directory.
pub const WORDLIST_PATH: &str = "wordlist.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Words sampled into the phrase.
    pub word_count: usize,
    /// Characters drawn from the digest before the symbol goes in.
    pub selection_len: usize,
    pub block_size: usize,
    /// Total draws allowed before giving up on finding a capitalizable letter.
    pub max_draws: usize,
}

impl GeneratorConfig {
    pub const STANDARD: Self = Self {
        word_count: 4,
        selection_len: 15,
        block_size: 4,
        max_draws: 16,
    };

    /// Length of the finished password, symbol included.
    pub const fn password_len(&self) -> usize {
        self.selection_len + 1
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

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

use zeroize::Zeroizing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Blocks separated by a single space.
    #[default]
    Spaced,
    /// Blocks run together, for systems that reject spaces.
    Compact,
}

impl Layout {
    fn separator(self) -> &'static str {
        match self {
            Layout::Spaced => " ",
            Layout::Compact => "",
        }
    }
}

/// Left-to-right chunks of `size` chars; the last one may be shorter.
pub fn blocks(text: &str, size: usize) -> Vec<Zeroizing<String>> {
    let chars: Vec<char> = text.chars().collect();

    chars
        .chunks(size.max(1))
        .map(|chunk| Zeroizing::new(chunk.iter().collect()))
        .collect()
}

pub fn format_password(text: &str, size: usize, layout: Layout) -> Zeroizing<String> {
    let blocks = blocks(text, size);
    let parts: Vec<&str> = blocks.iter().map(|block| block.as_str()).collect();

    Zeroizing::new(parts.join(layout.separator()))
}

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

use crate::error::{PwgenError, Result};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Reads the whole file up front; nothing is held open afterwards.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let data = fs::read_to_string(path).map_err(|source| PwgenError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let wordlist = Self::parse(&data)?;
        debug!(
            "Loaded {} words from \"{}\"",
            wordlist.words().len(),
            path.display()
        );

        Ok(wordlist)
    }

    /// Lines that are blank after trimming are not entries.
    pub fn parse(data: &str) -> Result<Self> {
        let words: Vec<String> = data
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        if words.is_empty() {
            return Err(PwgenError::EmptySource);
        }

        Ok(Self { words })
    }

    /// Draws `count` words independently, with replacement.
    pub fn sample<'a, R>(&'a self, rng: &mut R, count: usize) -> Vec<&'a str>
    where
        R: Rng + ?Sized,
    {
        (0..count)
            .filter_map(|_| self.words.choose(&mut *rng))
            .map(String::as_str)
            .collect()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

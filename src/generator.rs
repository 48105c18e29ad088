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

use crate::config::GeneratorConfig;
use crate::error::{PwgenError, Result};
use crate::phrase::{hash_phrase, join_phrase};
use crate::wordlist::WordList;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use zeroize::Zeroizing;

/// Letters that stay unambiguous once uppercased (no b/6, i/1, o/0).
pub const ELIGIBLE_LETTERS: &[u8] = b"acdefghjklmnpqrstuvwxyz";

pub const SYMBOLS: &[u8] = b"=-!$%^&*(){}[]";

pub fn is_eligible(c: char) -> bool {
    c.is_ascii() && ELIGIBLE_LETTERS.contains(&(c as u8))
}

pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOLS.contains(&(c as u8))
}

/// Draws `len` characters from `digest`, uniformly and with replacement.
pub fn select<R>(digest: &str, len: usize, rng: &mut R) -> Zeroizing<String>
where
    R: Rng + ?Sized,
{
    let pool: Vec<char> = digest.chars().collect();

    let selection: String = (0..len)
        .filter_map(|_| pool.choose(&mut *rng))
        .collect();

    Zeroizing::new(selection)
}

pub fn eligible_positions(selection: &str) -> Vec<usize> {
    selection
        .chars()
        .enumerate()
        .filter(|(_, c)| is_eligible(*c))
        .map(|(i, _)| i)
        .collect()
}

/// Uppercases the character at `index` (counted in chars) and leaves the rest untouched.
pub fn capitalize_at(selection: &str, index: usize) -> Zeroizing<String> {
    let capitalized: String = selection
        .chars()
        .enumerate()
        .map(|(i, c)| if i == index { c.to_ascii_uppercase() } else { c })
        .collect();

    Zeroizing::new(capitalized)
}

/// Returns `None` when the selection has nothing safe to capitalize.
pub fn capitalize<R>(selection: &str, rng: &mut R) -> Option<Zeroizing<String>>
where
    R: Rng + ?Sized,
{
    let positions = eligible_positions(selection);
    let index = *positions.choose(rng)?;

    Some(capitalize_at(selection, index))
}

/// Inserts `symbol` before the char at `index`; an index at or past the end appends.
pub fn insert_symbol_at(text: &str, index: usize, symbol: char) -> Zeroizing<String> {
    let offset = text
        .char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset);

    let mut result = Zeroizing::new(String::with_capacity(text.len() + symbol.len_utf8()));
    result.push_str(&text[..offset]);
    result.push(symbol);
    result.push_str(&text[offset..]);

    result
}

pub fn insert_symbol<R>(text: &str, rng: &mut R) -> Zeroizing<String>
where
    R: Rng + ?Sized,
{
    let index = rng.random_range(0..=text.chars().count());
    let symbol = SYMBOLS[rng.random_range(0..SYMBOLS.len())] as char;

    insert_symbol_at(text, index, symbol)
}

/// Selection, capitalization and symbol insertion over a digest.
///
/// A selection without a capitalizable letter is thrown away and drawn again,
/// up to `config.max_draws` draws in total.
pub fn transform<R>(
    digest: &str,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Zeroizing<String>>
where
    R: Rng + ?Sized,
{
    for attempt in 1..=config.max_draws {
        let selection = select(digest, config.selection_len, rng);

        match capitalize(&selection, rng) {
            Some(capitalized) => return Ok(insert_symbol(&capitalized, rng)),
            None => debug!(
                "Draw {}/{} has no capitalizable letter, drawing again",
                attempt, config.max_draws
            ),
        }
    }

    Err(PwgenError::NoEligibleLetter {
        attempts: config.max_draws,
    })
}

/// Runs the whole pipeline and returns the password without block formatting.
pub fn generate<R>(
    wordlist: &WordList,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Zeroizing<String>>
where
    R: Rng + ?Sized,
{
    let words = wordlist.sample(rng, config.word_count);
    let phrase = join_phrase(&words);
    let digest = hash_phrase(&phrase);
    debug!(
        "Hashed a {}-word phrase into a {}-char digest",
        words.len(),
        digest.as_str().len()
    );

    transform(digest.as_str(), config, rng)
}

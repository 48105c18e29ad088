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

use sha2::{Digest as _, Sha256};
use zeroize::Zeroizing;

pub const DIGEST_LEN: usize = 64;

const SEPARATOR: &str = " ";

/// Lowercase hex rendering of a SHA-256 hash.
#[derive(Clone)]
pub struct Digest(Zeroizing<String>);

impl Digest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

pub fn join_phrase<S: AsRef<str>>(words: &[S]) -> Zeroizing<String> {
    let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    Zeroizing::new(words.join(SEPARATOR))
}

pub fn hash_phrase(phrase: &str) -> Digest {
    let hash = Sha256::digest(phrase.as_bytes());

    Digest(Zeroizing::new(format!("{:x}", hash)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_DIGEST: &str =
        "e31bfcd86f94613f0098e76211482cd47a4557c68172be47becb9d9da2ad8c6c";

    #[test]
    fn test_join_single_space() {
        let phrase = join_phrase(&["apple", "delta", "echo", "banana"]);
        assert_eq!(&*phrase, "apple delta echo banana");
    }

    #[test]
    fn test_join_keeps_order() {
        let forward = join_phrase(&["apple", "delta"]);
        let backward = join_phrase(&["delta", "apple"]);
        assert_ne!(*forward, *backward);
    }

    #[test]
    fn test_join_owned_words() {
        let words = vec!["solo".to_string(); 4];
        assert_eq!(&*join_phrase(&words), "solo solo solo solo");
    }

    #[test]
    fn test_known_digest() {
        let digest = hash_phrase("apple delta echo banana");
        assert_eq!(digest.as_str(), SCENARIO_DIGEST);
    }

    #[test]
    fn test_single_entry_digest() {
        let phrase = join_phrase(&["apple"; 4]);
        let digest = hash_phrase(&phrase);
        assert_eq!(
            digest.as_str(),
            "2f2211169951d06115059dfd020db558025cc149d212da7a6dabf15f781e3927"
        );
    }

    #[test]
    fn test_deterministic() {
        let first = hash_phrase("correct horse battery staple");
        let second = hash_phrase("correct horse battery staple");
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_digest_shape() {
        let phrases = [
            "a",
            "apple delta echo banana",
            "жизнь café 生活 🌍",
            "a b c d",
        ];

        for phrase in phrases {
            let digest = hash_phrase(phrase);
            assert_eq!(
                digest.as_str().len(),
                DIGEST_LEN,
                "Bad length for {:?}",
                phrase
            );
            assert!(
                digest
                    .as_str()
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "Digest of {:?} is not lowercase hex: {}",
                phrase,
                digest.as_str()
            );
        }
    }
}

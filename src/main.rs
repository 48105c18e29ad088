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

mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use pwgen::{GeneratorConfig, Layout, WORDLIST_PATH, WordList};

#[derive(Parser)]
#[command(
    name = "pwgen",
    version,
    author,
    about = "Typeable password from four random words, SHA-256 and one symbol"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    ui::init_logger();

    let config = GeneratorConfig::STANDARD;

    let wordlist = WordList::load(WORDLIST_PATH).context("Failed to read the word list")?;

    let mut rng = rand::rng();
    let password = pwgen::generate(&wordlist, &config, &mut rng)
        .context("Failed to generate a password")?;
    debug!("Generated a {}-char password", password.chars().count());

    let output = pwgen::format_password(&password, config.block_size, Layout::Spaced);
    ui::display_output(&output)?;

    Ok(())
}

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

use anyhow::Result;
use console::{Style, Term};
use log::Level;
use std::io::Write;

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

pub fn get_status_marker(level: Level) -> &'static str {
    match level {
        Level::Error | Level::Warn => "[!]",
        _ => "[*]",
    }
}

fn marker_style(level: Level, color_support: bool) -> Style {
    let style = Style::new().for_stderr();
    if !color_support {
        return style;
    }

    match level {
        Level::Error => style.red(),
        Level::Warn => style.yellow(),
        _ => style.green(),
    }
}

/// Logs go to stderr so stdout only ever carries the password line.
pub fn init_logger() {
    let color_support = detect_color_support();
    let env = env_logger::Env::default().default_filter_or("warn");

    env_logger::Builder::from_env(env)
        .format(move |buf, record| {
            let level = record.level();
            let marker = marker_style(level, color_support).apply_to(get_status_marker(level));
            writeln!(buf, "{} {}", marker, record.args())
        })
        .target(env_logger::Target::Stderr)
        .init();
}

pub fn display_output(output: &str) -> Result<()> {
    let term = Term::stdout();
    term.write_line(output)?;
    term.flush()?;

    Ok(())
}

/*
    stshifter
    https://github.com/dbalsom/stshifter

    Copyright 2025-2026 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    shifter_headless::lib.rs

    Headless frontend: draws a test pattern through the public API and dumps
    the deplaned frame as a PGM file.

*/

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_derive::Deserialize;

use shifter_core::devices::shifter::{self, ShifterScreen, LOWRES_HEIGHT, LOWRES_WIDTH};

const CONFIG_PATH: &str = "stshifter.toml";

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub output: PathBuf,
    pub tile_size: u16,
    pub border_color: u8,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("frame.pgm"),
            tile_size: 21,
            border_color: 15,
        }
    }
}

fn load_config(path: &Path) -> Result<DemoConfig> {
    if !path.exists() {
        log::debug!("No config file at {}; using defaults", path.display());
        return Ok(DemoConfig::default());
    }

    let raw = fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Parsing {}", path.display()))
}

/// Tile the screen with boxes cycling through all 16 colors, framed by a
/// one-scanline border.
fn draw_test_pattern(screen: &mut ShifterScreen, config: &DemoConfig) -> Result<()> {
    let width = LOWRES_WIDTH as u16;
    let height = LOWRES_HEIGHT as u16;
    let tile = config.tile_size.clamp(2, height / 2);

    screen.clear(0);
    screen.draw_box(0, 0, width - 1, 1, config.border_color)?;
    screen.draw_box(0, height - 2, width - 1, height - 1, config.border_color)?;
    screen.draw_box(0, 0, 1, height - 1, config.border_color)?;
    screen.draw_box(width - 2, 0, width - 1, height - 1, config.border_color)?;

    let mut color = 0u8;
    let mut y = 2;
    while y + tile < height - 2 {
        let mut x = 2;
        while x + tile < width - 2 {
            screen.draw_box(x, y, x + tile - 1, y + tile - 1, color)?;
            color = color.wrapping_add(1);
            x += tile + 1;
        }
        y += tile + 1;
    }

    Ok(())
}

/// Write the indexed frame as a binary PGM, expanding each 4-bit index to
/// an 8-bit gray value.
fn write_pgm(path: &Path, indexed: &[u8]) -> Result<()> {
    let mut out = Vec::with_capacity(indexed.len() + 32);
    write!(out, "P5\n{} {}\n255\n", LOWRES_WIDTH, LOWRES_HEIGHT)?;
    out.extend(indexed.iter().map(|&i| i * 17));
    fs::write(path, out)?;
    Ok(())
}

pub fn run() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config(Path::new(CONFIG_PATH))?;
    log::info!("Using config: {:?}", config);

    shifter::init_tables();

    let mut screen = ShifterScreen::new();
    draw_test_pattern(&mut screen, &config)?;

    let mut indexed = vec![0u8; LOWRES_WIDTH * LOWRES_HEIGHT];
    screen.deplane_frame(&mut indexed)?;

    write_pgm(&config.output, &indexed)
        .with_context(|| format!("Writing {}", config.output.display()))?;

    log::info!(
        "Wrote {}x{} frame to {}",
        LOWRES_WIDTH,
        LOWRES_HEIGHT,
        config.output.display()
    );
    Ok(())
}

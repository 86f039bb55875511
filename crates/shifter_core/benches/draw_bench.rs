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

    ---------------------------------------------------------------------------

    benches::draw_bench.rs

    Benchmarks for the planar rasterizer.

*/

use shifter_core::devices::shifter::{init_tables, ShifterScreen, LOWRES_HEIGHT, LOWRES_WIDTH};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn draw_bench(c: &mut Criterion) {
    // One-time setup code goes here
    init_tables();

    c.bench_function("draw_box_full_screen", |b| {
        // Per-sample (note that a sample can be many iterations) setup goes here
        let mut screen = ShifterScreen::new();

        b.iter(|| {
            // Measured code goes here
            screen.draw_box(black_box(0), 0, 319, 199, 7).unwrap();
        });
    });

    c.bench_function("draw_box_single_column", |b| {
        let mut screen = ShifterScreen::new();

        b.iter(|| {
            screen.draw_box(black_box(4), 10, 11, 180, 9).unwrap();
        });
    });

    c.bench_function("draw_box_one_scanline_pair", |b| {
        let mut screen = ShifterScreen::new();

        b.iter(|| {
            screen.draw_box(black_box(20), 5, 35, 6, 7).unwrap();
        });
    });

    c.bench_function("deplane_frame", |b| {
        let mut screen = ShifterScreen::new();
        screen.draw_box(0, 0, 319, 199, 11).unwrap();
        let mut indexed = vec![0u8; LOWRES_WIDTH * LOWRES_HEIGHT];

        b.iter(|| {
            screen.deplane_frame(black_box(&mut indexed)).unwrap();
        });
    });
}

criterion_group!(benches, draw_bench);
criterion_main!(benches);

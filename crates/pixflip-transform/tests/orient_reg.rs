//! Orientation regression test
//!
//! Checks the group structure of the orthogonal orientations on every
//! channel layout:
//!   1. LR flip, TB flip, transpose and anti-diagonal mirror are involutions
//!   2. Four successive 90-degree rotations = identity
//!   3. 90cw + 90ccw = identity
//!   4. Anti-diagonal mirror = transpose of the 180-degree rotation
//!   5. Transpose + anti-diagonal mirror = 180-degree rotation

use pixflip_core::{Channels, PixelGrid};
use pixflip_test::{RegParams, synthetic};
use pixflip_transform::{
    flip_lr, flip_tb, mirror_anti_diagonal, rotate_90, rotate_180, rotate_orth, transpose,
};

#[test]
fn orient_reg() {
    let mut rp = RegParams::new("orient");

    for channels in [
        Channels::Gray,
        Channels::GrayAlpha,
        Channels::Rgb,
        Channels::Rgba,
    ] {
        let square = synthetic::position_grid(6, 6, channels).expect("square grid");
        test_orientations(&mut rp, &square, channels);

        let wide = synthetic::position_grid(9, 4, channels).expect("wide grid");
        test_orientations(&mut rp, &wide, channels);
    }

    assert!(rp.cleanup(), "orient regression test failed");
}

fn test_orientations(rp: &mut RegParams, grid: &PixelGrid, channels: Channels) {
    let w = grid.width();
    let h = grid.height();
    eprintln!("Testing {:?} orientations: {}x{}", channels, w, h);

    // --- Involutions ---
    let twice = flip_lr(&flip_lr(grid).expect("flip_lr")).expect("flip_lr twice");
    rp.compare_grids(grid, &twice);
    let twice = flip_tb(&flip_tb(grid).expect("flip_tb")).expect("flip_tb twice");
    rp.compare_grids(grid, &twice);
    let twice = transpose(&transpose(grid).expect("transpose")).expect("transpose twice");
    rp.compare_grids(grid, &twice);
    let once = mirror_anti_diagonal(grid).expect("mirror");
    rp.compare_values(h as f64, once.width() as f64, 0.0);
    rp.compare_values(w as f64, once.height() as f64, 0.0);
    let twice = mirror_anti_diagonal(&once).expect("mirror twice");
    rp.compare_grids(grid, &twice);

    // --- Four 90-degree rotations = identity ---
    let mut r = grid.clone();
    for _ in 0..4 {
        r = rotate_90(&r, true).expect("rotate_90 cw");
    }
    rp.compare_grids(grid, &r);

    // --- 90cw + 90ccw = identity ---
    let cw = rotate_90(grid, true).expect("rotate_90 cw");
    let back = rotate_90(&cw, false).expect("rotate_90 ccw");
    rp.compare_grids(grid, &back);

    // --- rotate_orth(2) = rotate_180 ---
    let r2 = rotate_orth(grid, 2).expect("rotate_orth 2");
    let r180 = rotate_180(grid).expect("rotate_180");
    rp.compare_grids(&r180, &r2);

    // --- Anti-diagonal mirror = transpose(rotate_180) ---
    let composed = transpose(&r180).expect("transpose of 180");
    rp.compare_grids(&composed, &once);

    // --- Transpose then anti-diagonal mirror = rotate_180 ---
    let t = transpose(grid).expect("transpose");
    let tm = mirror_anti_diagonal(&t).expect("mirror of transpose");
    rp.compare_grids(&r180, &tm);

    // Channel layout is preserved
    rp.compare_values(
        channels.count() as f64,
        once.channels().count() as f64,
        0.0,
    );
}

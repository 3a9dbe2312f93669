mod common;

use common::synthetic_image::{noise_rgb, unique_rgb};
use layer_shift::histogram::ColorHistogram;
use layer_shift::image::RgbImage;
use layer_shift::layers::{ring_count, rings, Ring};
use layer_shift::{transform, LayerShifter, ShiftError, ShiftOptions, ShiftPolicy};

const SIZES: [(usize, usize); 8] = [(1, 1), (1, 6), (6, 1), (2, 2), (3, 5), (7, 4), (8, 8), (9, 13)];

fn ring_values(img: &RgbImage, ring: &Ring) -> Vec<[u8; 3]> {
    ring.coords().map(|(r, c)| img.get(r, c)).collect()
}

#[test]
fn shape_is_preserved() {
    for (h, w) in SIZES {
        for shift in [-5, 1, 3, 1000] {
            let img = noise_rgb(w, h, 7);
            let out = transform(&img, shift, 20).unwrap();
            assert_eq!(out.dimensions(), (h, w));
            assert_eq!(out.pixels().len(), h * w);
        }
    }
}

#[test]
fn ring_lengths_cover_every_pixel_once() {
    for h in 1..=16 {
        for w in 1..=16 {
            let total: usize = rings(h, w).map(|r| r.len()).sum();
            assert_eq!(total, h * w, "{h}x{w}");
            assert_eq!(rings(h, w).count(), ring_count(h, w));
        }
    }
}

#[test]
fn shifting_is_a_permutation() {
    for (h, w) in SIZES {
        let img = noise_rgb(w, h, 12345);
        let before = ColorHistogram::from_image(&img);
        for policy in [ShiftPolicy::Constant, ShiftPolicy::Decreasing] {
            let outcome = LayerShifter::new(ShiftOptions::new(11).with_policy(policy))
                .process(&img)
                .unwrap();
            assert_eq!(ColorHistogram::from_image(&outcome.image), before);
            for ring in rings(h, w) {
                let mut a = ring_values(&img, &ring);
                let mut b = ring_values(&outcome.image, &ring);
                a.sort_unstable();
                b.sort_unstable();
                assert_eq!(a, b, "{h}x{w} ring {}", ring.index);
            }
        }
    }
}

#[test]
fn zero_shift_is_identity() {
    for (h, w) in SIZES {
        let img = noise_rgb(w, h, 99);
        for k in [0, 1, 2, 50] {
            assert_eq!(transform(&img, 0, k).unwrap(), img);
        }
        let decreasing = LayerShifter::new(ShiftOptions::new(0).with_policy(ShiftPolicy::Decreasing))
            .process(&img)
            .unwrap();
        assert_eq!(decreasing.image, img);
    }
}

#[test]
fn full_perimeter_shift_restores_the_ring() {
    let img = unique_rgb(9, 7);
    for ring in rings(7, 9) {
        let len = ring.len() as i64;
        let out = transform(&img, len, ring.index + 1).unwrap();
        assert_eq!(
            ring_values(&out, &ring),
            ring_values(&img, &ring),
            "ring {}",
            ring.index
        );
    }
    // Outer ring of 7x9 has 28 cells.
    assert_eq!(transform(&img, 28, 1).unwrap(), img);
}

#[test]
fn opposite_shifts_cancel() {
    let img = unique_rgb(10, 6);
    let forward = transform(&img, 13, 3).unwrap();
    let back = transform(&forward, -13, 3).unwrap();
    assert_eq!(back, img);
}

#[test]
fn rings_rotate_independently() {
    // Rotating all rings at once equals rotating ring by ring from the
    // outside in, because no ring reads cells of another.
    let img = unique_rgb(11, 8);
    let all = transform(&img, 5, 4).unwrap();
    let mut stepwise = img.clone();
    for ring in rings(8, 11) {
        let mut values = ring_values(&img, &ring);
        values.rotate_right(5 % ring.len());
        for ((r, c), px) in ring.coords().zip(values) {
            stepwise.set(r, c, px);
        }
    }
    assert_eq!(all, stepwise);
}

#[test]
fn empty_grids_are_rejected() {
    for (w, h) in [(0, 0), (0, 4), (4, 0)] {
        let err = transform(&RgbImage::new(w, h), 1, 1).unwrap_err();
        assert_eq!(err, ShiftError::EmptyImage { width: w, height: h });
    }
}

#[test]
fn malformed_grids_never_reach_the_engine() {
    assert!(matches!(
        RgbImage::from_rows(vec![vec![[1, 2, 3]; 4], vec![[1, 2, 3]; 5]]),
        Err(ShiftError::RaggedRow { row: 1, .. })
    ));
    assert!(matches!(
        RgbImage::from_interleaved(2, 2, 4, &[0; 16]),
        Err(ShiftError::ChannelDepth(4))
    ));
}

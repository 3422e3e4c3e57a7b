//! Classify a handful of segment pairs and print the records.
//!
//! Purpose
//! - A runnable tour of the classifier outcomes: crossing, endpoint
//!   touch, collinear overlap, parallel separation, identity, and a
//!   degenerate input.
//! - One line per pair, suitable for eyeballing after a change.
//!
//! Run: `cargo run -p netgeom --example crossings`

use netgeom::seg2::segment_intersect_with;
use netgeom::{segment_intersect, Edge2, DEFAULT_TOL};

fn main() {
    let cases = [
        (
            "crossing",
            Edge2::new((0.0, 0.0), (1.0, 1.0)),
            Edge2::new((0.0, 1.0), (1.0, 0.0)),
        ),
        (
            "endpoint touch",
            Edge2::new((0.0, 0.0), (1.0, 0.0)),
            Edge2::new((1.0, 0.0), (1.0, 1.0)),
        ),
        (
            "t-junction",
            Edge2::new((0.0, 0.0), (2.0, 0.0)),
            Edge2::new((1.0, 0.0), (1.0, 1.0)),
        ),
        (
            "collinear overlap",
            Edge2::new((0.0, 0.0), (2.0, 0.0)),
            Edge2::new((1.0, 0.0), (3.0, 0.0)),
        ),
        (
            "parallel",
            Edge2::new((0.0, 0.0), (1.0, 0.0)),
            Edge2::new((0.0, 1.0), (1.0, 1.0)),
        ),
        (
            "identical",
            Edge2::new((0.0, 0.0), (1.0, 1.0)),
            Edge2::new((0.0, 0.0), (1.0, 1.0)),
        ),
    ];
    for (label, s1, s2) in cases {
        let r = segment_intersect(&s1, &s2, DEFAULT_TOL);
        println!("{label:>18}: {r}");
    }

    let point = Edge2::new((0.5, 0.5), (0.5, 0.5));
    let r = segment_intersect_with(&point, &point, DEFAULT_TOL, |d| {
        println!(
            "         degenerate: ends collapsed (s1 end {}, s2 end {})",
            d.s1_end, d.s2_end
        );
    });
    println!("{:>18}: {r}", "zero-length");
}

//! Encode a point, then turn a box into index ranges for range scans.

use std::error::Error;

use hilbert_query::HilbertCurve;

fn main() -> Result<(), Box<dyn Error>> {
    // 2D Hilbert curve on a 256x256 grid
    let curve = HilbertCurve::new(8, 2)?;
    println!(
        "{}D Hilbert curve, {} bits per axis, {} cells",
        curve.dimensions(),
        curve.bits(),
        curve.length()
    );

    let point = [100, 37];
    let index = curve.encode(&point)?;
    println!("Index for {point:?}: {index}");
    assert_eq!(curve.decode(index)?.as_slice(), &point);

    let (a, b) = ([90, 30], [140, 60]);
    for depth in 0..4 {
        let ranges = curve.query(&a, &b, depth)?;
        let scanned: u128 = ranges.iter().map(|r| r.size()).sum();
        println!(
            "depth {depth}: {} ranges covering {scanned} indices",
            ranges.len()
        );
    }

    let ranges = curve.query(&a, &b, 3)?;
    assert!(ranges.iter().any(|r| r.contains(index)));
    Ok(())
}

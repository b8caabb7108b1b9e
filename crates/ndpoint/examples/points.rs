//! Build a few points, combine them, and move between dimensions.

use std::error::Error;

use ndpoint::{Point, Point3, make_point2, point3_from};

fn main() -> Result<(), Box<dyn Error>> {
    let a = make_point2(1.0, 2.0);
    let b = make_point2(0.5, -1.0);
    let c = (a + b) * 2.0;
    println!("({a} + {b}) * 2 = {c}");

    let lifted: Point3<f64> = point3_from(&c);
    println!("lifted to 3D: {lifted}");

    let parsed: Point<f64, 4> = "1.0 2.5 -3 4"
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<f64>, _>>()?
        .try_into()?;
    println!("{}D point from text: {parsed}", parsed.dimension());

    let flattened = parsed.resize::<2>();
    assert_eq!(flattened.as_array(), &[1.0, 2.5]);

    Ok(())
}

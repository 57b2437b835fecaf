//! Walk through the named operations and their operator forms

use complexnum::{scalar_subtract, Complex};

fn main() {
    let a = Complex::new(3.0, 4.0);
    let b = Complex::new(1.0, 2.0);

    println!("a = {a}");
    println!("b = {b}");
    println!("|a| = {}", a.abs());

    println!("\nComplex with complex:");
    println!("  a + b = {}", a.add(b));
    println!("  a - b = {}", a.subtract(b));
    println!("  a * b = {}", a * b);

    println!("\nComplex with scalar:");
    println!("  a + 2 = {}", a + 2.0);
    println!("  2 - a = {}", scalar_subtract(2.0, a));
    println!("  a * 2 = {}", 2.0 * a);
    println!("  a / 2 = {}", a / 2.0);
    println!("  a / 0 = {}", a.divide_scalar(0.0));

    println!("\nCompound assignment:");
    let mut c = a;
    c.add_assign(b).multiply_assign(Complex::I).divide_assign_scalar(2.0);
    println!("  ((a + b) * i) / 2 = {c:.3}");

    c.assign_scalar(-1.5);
    println!("  after assign_scalar(-1.5): {c}");
}

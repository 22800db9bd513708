use crate::console::Console;
use crate::open_closed::shapes::Shape;

pub fn area_line(shape: &dyn Shape) -> String {
    format!("Area: {}", shape.area())
}

/// Works for any [`Shape`]. Two shapes with the same area print the same line.
pub fn print_area(shape: &dyn Shape, console: &dyn Console) {
    console.print_line(&area_line(shape));
}

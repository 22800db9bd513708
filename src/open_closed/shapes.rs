use std::f64::consts::PI;

pub trait Shape {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Sums areas left to right. An empty slice has a total of zero.
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().fold(0.0, |total, shape| total + shape.area())
}

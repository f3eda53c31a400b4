#![allow(dead_code)]

use fabrik_factory::Product;
use std::any::Any;

/// Base capability for the shape fixtures.
pub trait Shape: Any {
    fn kind(&self) -> &'static str;
    fn area(&self) -> f64;
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Product)]
#[product(dyn Shape)]
pub struct Circle {
    pub radius: f64,
}

#[derive(Debug, Product)]
#[product(dyn Shape)]
pub struct Square {
    pub side: f64,
}

#[derive(Debug, Default, Product)]
#[product(dyn Shape)]
pub struct Point;

impl Default for Circle {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Default for Square {
    fn default() -> Self {
        Self { side: 2.0 }
    }
}

impl Shape for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Shape for Square {
    fn kind(&self) -> &'static str {
        "square"
    }
    fn area(&self) -> f64 {
        self.side * self.side
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Shape for Point {
    fn kind(&self) -> &'static str {
        "point"
    }
    fn area(&self) -> f64 {
        0.0
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Two unrelated widgets used to exercise duplicate registrations.
pub trait Widget {
    fn label(&self) -> &'static str;
}

#[derive(Debug, Default, Product)]
#[product(dyn Widget)]
pub struct Button;

#[derive(Debug, Default, Product)]
#[product(dyn Widget)]
pub struct Slider;

impl Widget for Button {
    fn label(&self) -> &'static str {
        "button"
    }
}

impl Widget for Slider {
    fn label(&self) -> &'static str {
        "slider"
    }
}

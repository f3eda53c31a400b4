use fabrik_factory::{FactoryConfig, Product, StringFactory};
use std::fmt;

/// Base capability shared by every shape the shell can build.
pub(crate) trait Shape: fmt::Display {
    fn area(&self) -> f64;
}

#[derive(Debug, Product)]
#[product(dyn Shape)]
pub(crate) struct Circle {
    radius: f64,
}

#[derive(Debug, Product)]
#[product(dyn Shape)]
pub(crate) struct Square {
    side: f64,
}

#[derive(Debug, Product)]
#[product(dyn Shape)]
pub(crate) struct Triangle {
    base: f64,
    height: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Default for Square {
    fn default() -> Self {
        Self { side: 1.0 }
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self { base: 2.0, height: 1.0 }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        self.base * self.height / 2.0
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle(r={}) area={:.3}", self.radius, self.area())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "square(side={}) area={:.3}", self.side, self.area())
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "triangle(base={}, height={}) area={:.3}", self.base, self.height, self.area())
    }
}

/// Builds the shell's factory with every built-in shape registered.
///
/// # Errors
/// Returns an error if a built-in key is registered twice under a rejecting policy.
pub(crate) fn builtin(config: &FactoryConfig) -> anyhow::Result<StringFactory<dyn Shape>> {
    let mut shapes = StringFactory::<dyn Shape>::from_config(config);
    shapes.register::<Circle>("circle")?;
    shapes.register::<Square>("square")?;
    shapes.register::<Triangle>("triangle")?;
    Ok(shapes)
}

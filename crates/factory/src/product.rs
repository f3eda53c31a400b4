use std::sync::Arc;

/// A concrete type a [`Factory`](crate::Factory) can build for the base `B`.
///
/// `B` is usually a trait object such as `dyn Shape`. The trait carries the two
/// constraints a registration needs: the type is default-constructible, and a
/// value of it can be moved behind a `Box<B>` or an `Arc<B>`. Stable Rust has no
/// generic "unsizes to `B`" bound, so the upcast is spelled out per type, either
/// with `#[derive(Product)]` or with [`impl_product!`](crate::impl_product).
///
/// ```rust
/// use fabrik_factory::Product;
///
/// trait Shape {
///     fn sides(&self) -> u32;
/// }
///
/// #[derive(Default, Product)]
/// #[product(dyn Shape)]
/// struct Square;
///
/// impl Shape for Square {
///     fn sides(&self) -> u32 {
///         4
///     }
/// }
///
/// let shape: Box<dyn Shape> = Square::default().into_unique();
/// assert_eq!(shape.sides(), 4);
/// ```
pub trait Product<B: ?Sized>: Default + 'static {
    /// Moves the value behind an exclusively owned handle.
    fn into_unique(self) -> Box<B>;

    /// Moves the value behind a reference-counted handle.
    fn into_shared(self) -> Arc<B>;
}

/// Implements [`Product`] for one or more types against a single base.
///
/// ```rust
/// use fabrik_factory::{Product, impl_product};
///
/// trait Codec {
///     fn name(&self) -> &'static str;
/// }
///
/// #[derive(Default)]
/// struct Gzip;
/// #[derive(Default)]
/// struct Zstd;
///
/// impl Codec for Gzip {
///     fn name(&self) -> &'static str { "gzip" }
/// }
/// impl Codec for Zstd {
///     fn name(&self) -> &'static str { "zstd" }
/// }
///
/// impl_product!(dyn Codec => Gzip, Zstd);
///
/// assert_eq!(Zstd.into_shared().name(), "zstd");
/// ```
#[macro_export]
macro_rules! impl_product {
    ($base:ty => $($product:ty),+ $(,)?) => {
        $(
            impl $crate::Product<$base> for $product {
                #[inline]
                fn into_unique(self) -> ::std::boxed::Box<$base> {
                    ::std::boxed::Box::new(self)
                }

                #[inline]
                fn into_shared(self) -> ::std::sync::Arc<$base> {
                    ::std::sync::Arc::new(self)
                }
            }
        )+
    };
}

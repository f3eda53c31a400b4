use crate::product::Product;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Type-erased constructor stored behind every registry key.
///
/// A creator is fixed to one concrete type when it is registered and is owned by
/// exactly one registry entry.
pub(crate) trait Creator<B: ?Sized>: Send + Sync {
    /// Builds a new default instance behind a `Box<B>`.
    fn create_unique(&self) -> Box<B>;

    /// Builds a new default instance behind an `Arc<B>`.
    fn create_shared(&self) -> Arc<B>;

    /// Name of the concrete type this creator builds.
    fn type_name(&self) -> &'static str;
}

/// Creator for any `T: Product<B>`, built with `T::default()`.
pub(crate) struct DefaultCreator<T> {
    // `fn() -> T` keeps the creator `Send + Sync` whatever `T` is.
    product: PhantomData<fn() -> T>,
}

impl<T> DefaultCreator<T> {
    pub(crate) const fn new() -> Self {
        Self { product: PhantomData }
    }
}

impl<T> fmt::Debug for DefaultCreator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefaultCreator").field(&std::any::type_name::<T>()).finish()
    }
}

impl<B, T> Creator<B> for DefaultCreator<T>
where
    B: ?Sized,
    T: Product<B>,
{
    #[inline]
    fn create_unique(&self) -> Box<B> {
        T::default().into_unique()
    }

    #[inline]
    fn create_shared(&self) -> Arc<B> {
        T::default().into_shared()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

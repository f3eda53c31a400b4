use crate::creator::{Creator, DefaultCreator};
use crate::error::FactoryError;
use crate::policy::{DuplicatePolicy, FactoryConfig};
use crate::product::Product;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::{self, Debug};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Keyed registry that builds new `B` instances from registered concrete types.
///
/// Keys are kept in ascending `Ord` order, so [`Factory::list_keys`] never
/// depends on registration order. A key bound once stays bound to exactly one
/// concrete type until it is replaced (see [`DuplicatePolicy`]) or unregistered.
///
/// The factory is not synchronized. Registration takes `&mut self`; share a
/// factory across threads behind a lock of your choice.
///
/// # Example
/// ```rust
/// use fabrik_factory::{Product, StringFactory};
///
/// trait Shape {
///     fn name(&self) -> &'static str;
/// }
///
/// #[derive(Default, Product)]
/// #[product(dyn Shape)]
/// struct Circle;
///
/// impl Shape for Circle {
///     fn name(&self) -> &'static str {
///         "circle"
///     }
/// }
///
/// let mut shapes = StringFactory::<dyn Shape>::new();
/// shapes.register::<Circle>("circle").unwrap();
///
/// assert_eq!(shapes.create_unique("circle").map(|s| s.name()), Some("circle"));
/// assert!(shapes.create_shared("triangle").is_none());
/// ```
pub struct Factory<K, B: ?Sized> {
    creators: BTreeMap<K, Box<dyn Creator<B>>>,
    policy: DuplicatePolicy,
}

/// A [`Factory`] keyed by owned strings; lookups accept `&str`.
pub type StringFactory<B> = Factory<String, B>;

impl<K: Ord, B: ?Sized> Factory<K, B> {
    /// Creates an empty factory that rejects duplicate keys.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_policy(DuplicatePolicy::Reject)
    }

    /// Creates an empty factory with an explicit duplicate-key policy.
    #[must_use]
    pub const fn with_policy(policy: DuplicatePolicy) -> Self {
        Self { creators: BTreeMap::new(), policy }
    }

    /// Creates an empty factory from loaded settings.
    #[must_use]
    pub const fn from_config(config: &FactoryConfig) -> Self {
        Self::with_policy(config.duplicates)
    }

    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Binds `key` to the concrete type `T`.
    ///
    /// With [`DuplicatePolicy::Replace`] an existing binding is swapped out and
    /// the call succeeds. With [`DuplicatePolicy::Reject`] the existing binding
    /// is kept.
    ///
    /// # Errors
    /// Returns [`FactoryError::DuplicateKey`] if `key` is already bound and the
    /// policy is [`DuplicatePolicy::Reject`].
    pub fn register<T>(&mut self, key: impl Into<K>) -> Result<(), FactoryError>
    where
        K: Debug,
        T: Product<B>,
    {
        let key = key.into();
        let creator: Box<dyn Creator<B>> = Box::new(DefaultCreator::<T>::new());

        match self.creators.entry(key) {
            Entry::Vacant(slot) => {
                debug!(key = ?slot.key(), product = creator.type_name(), "Registered product");
                slot.insert(creator);
                Ok(())
            },
            Entry::Occupied(mut slot) => match self.policy {
                DuplicatePolicy::Replace => {
                    let previous = slot.insert(creator);
                    warn!(
                        key = ?slot.key(),
                        previous = previous.type_name(),
                        product = slot.get().type_name(),
                        "Replaced product binding"
                    );
                    Ok(())
                },
                DuplicatePolicy::Reject => {
                    debug!(
                        key = ?slot.key(),
                        bound = slot.get().type_name(),
                        rejected = creator.type_name(),
                        "Rejected duplicate registration"
                    );
                    let message =
                        format!("{:?} is already bound to {}", slot.key(), slot.get().type_name());
                    Err(FactoryError::DuplicateKey { message: message.into(), context: None })
                },
            },
        }
    }

    /// Removes the binding for `key`. Returns `true` if one existed.
    pub fn unregister<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + Debug + ?Sized,
    {
        let removed = self.creators.remove(key).is_some();
        if removed {
            trace!(?key, "Unregistered product");
        }
        removed
    }

    /// Builds a new instance bound to `key`, owned solely by the caller.
    ///
    /// Returns `None` if nothing is registered under `key`.
    #[must_use]
    pub fn create_unique<Q>(&self, key: &Q) -> Option<Box<B>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.creators.get(key).map(|creator| creator.create_unique())
    }

    /// Builds a new instance bound to `key` behind a reference-counted handle.
    ///
    /// Returns `None` if nothing is registered under `key`.
    #[must_use]
    pub fn create_shared<Q>(&self, key: &Q) -> Option<Arc<B>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.creators.get(key).map(|creator| creator.create_shared())
    }

    /// Like [`Factory::create_unique`], but reports a missing key as an error.
    ///
    /// # Errors
    /// Returns [`FactoryError::UnknownKey`] if nothing is registered under `key`.
    pub fn try_create_unique<Q>(&self, key: &Q) -> Result<Box<B>, FactoryError>
    where
        K: Borrow<Q>,
        Q: Ord + Debug + ?Sized,
    {
        self.create_unique(key).ok_or_else(|| unknown_key(key))
    }

    /// Like [`Factory::create_shared`], but reports a missing key as an error.
    ///
    /// # Errors
    /// Returns [`FactoryError::UnknownKey`] if nothing is registered under `key`.
    pub fn try_create_shared<Q>(&self, key: &Q) -> Result<Arc<B>, FactoryError>
    where
        K: Borrow<Q>,
        Q: Ord + Debug + ?Sized,
    {
        self.create_shared(key).ok_or_else(|| unknown_key(key))
    }

    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.creators.contains_key(key)
    }

    /// Name of the concrete type bound to `key`, for diagnostics.
    #[must_use]
    pub fn type_name_of<Q>(&self, key: &Q) -> Option<&'static str>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.creators.get(key).map(|creator| creator.type_name())
    }

    /// Iterates over registered keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.creators.keys()
    }

    /// Returns every registered key in ascending order.
    #[must_use]
    pub fn list_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.creators.keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.creators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

impl<K: Ord, B: ?Sized> Default for Factory<K, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, B: ?Sized> Debug for Factory<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Bindings<'a, K, B: ?Sized>(&'a BTreeMap<K, Box<dyn Creator<B>>>);

        impl<K: Debug, B: ?Sized> Debug for Bindings<'_, K, B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.0.iter().map(|(k, c)| (k, c.type_name()))).finish()
            }
        }

        f.debug_struct("Factory")
            .field("policy", &self.policy)
            .field("creators", &Bindings(&self.creators))
            .finish()
    }
}

fn unknown_key<Q: Debug + ?Sized>(key: &Q) -> FactoryError {
    FactoryError::UnknownKey { message: format!("{key:?}").into(), context: None }
}

//! Singleton bindings
//!
//! A [`Singleton`] resolves to one shared instance per binding. The default
//! instance is built lazily by a factory on first use and cached; an override
//! replaces it until [`Singleton::reset`] restores the default.

use shelf_domain::error::{Error, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

type Factory<T> = Box<dyn Fn() -> Result<Arc<T>> + Send + Sync>;

struct Binding<T: ?Sized> {
    instance: Option<Arc<T>>,
    overridden: bool,
}

/// Lazily constructed, overridable shared instance
///
/// # Example
///
/// ```
/// use shelf_infrastructure::di::Singleton;
/// use std::sync::Arc;
///
/// let greeting: Singleton<str> = Singleton::new("greeting", || Ok(Arc::from("hello")));
/// assert_eq!(&*greeting.get().unwrap(), "hello");
///
/// greeting.override_with(Arc::from("hi")).unwrap();
/// assert_eq!(&*greeting.get().unwrap(), "hi");
///
/// greeting.reset().unwrap();
/// assert_eq!(&*greeting.get().unwrap(), "hello");
/// ```
pub struct Singleton<T: ?Sized + Send + Sync> {
    name: &'static str,
    factory: Factory<T>,
    binding: RwLock<Binding<T>>,
}

impl<T: ?Sized + Send + Sync> Singleton<T> {
    /// Bind `name` to the instance produced by `factory`
    ///
    /// The factory is not called until the first [`get`](Self::get).
    pub fn new<F>(name: &'static str, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self {
            name,
            factory: Box::new(factory),
            binding: RwLock::new(Binding {
                instance: None,
                overridden: false,
            }),
        }
    }

    /// Resolve the bound instance, building the default on first use
    pub fn get(&self) -> Result<Arc<T>> {
        if let Some(instance) = &self.read()?.instance {
            return Ok(Arc::clone(instance));
        }

        let mut binding = self.write()?;
        // Another caller may have built it while we waited for the write lock
        if let Some(instance) = &binding.instance {
            return Ok(Arc::clone(instance));
        }
        let instance = (self.factory)()?;
        debug!(binding = self.name, "Constructed default instance");
        binding.instance = Some(Arc::clone(&instance));
        Ok(instance)
    }

    /// Replace the bound instance
    pub fn override_with(&self, instance: Arc<T>) -> Result<()> {
        let mut binding = self.write()?;
        binding.instance = Some(instance);
        binding.overridden = true;
        debug!(binding = self.name, "Binding overridden");
        Ok(())
    }

    /// Drop any override and the cached default
    ///
    /// The next [`get`](Self::get) builds a fresh default instance.
    pub fn reset(&self) -> Result<()> {
        let mut binding = self.write()?;
        binding.instance = None;
        binding.overridden = false;
        debug!(binding = self.name, "Binding reset");
        Ok(())
    }

    /// Whether an override is currently active
    pub fn is_overridden(&self) -> bool {
        self.read().map(|b| b.overridden).unwrap_or(false)
    }

    /// Whether an instance (default or override) is currently held
    pub fn is_resolved(&self) -> bool {
        self.read().map(|b| b.instance.is_some()).unwrap_or(false)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Binding<T>>> {
        self.binding.read().map_err(|_| self.poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Binding<T>>> {
        self.binding.write().map_err(|_| self.poisoned())
    }

    fn poisoned(&self) -> Error {
        Error::internal(format!("binding '{}' lock poisoned", self.name))
    }
}

impl<T: ?Sized + Send + Sync> std::fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Singleton")
            .field("name", &self.name)
            .field("resolved", &self.is_resolved())
            .field("overridden", &self.is_overridden())
            .finish()
    }
}

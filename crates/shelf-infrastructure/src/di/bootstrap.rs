//! DI Container Bootstrap
//!
//! [`AppContext`] is the composition root. It owns one [`Singleton`] per
//! capability (repository, settings) and hands out the services built on
//! top of them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(config).await?;
//!
//! // Tests swap bindings and restore them afterwards
//! context.override_repository(Arc::new(InMemoryBookRepository::with_books(seed)))?;
//! context.override_settings(AuthSettings::new("foo", "bar"))?;
//! // ... exercise handlers ...
//! context.reset()?;
//! ```

use crate::config::{AppConfig, AuthSettings};
use crate::constants::{REPOSITORY_BINDING, SETTINGS_BINDING};
use crate::di::resolver::BookRepositoryResolver;
use crate::di::singleton::Singleton;
use crate::infrastructure::auth::SettingsCredentialVerifier;
use shelf_application::domain_services::BookServiceInterface;
use shelf_application::use_cases::BookServiceImpl;
use shelf_domain::error::{Error, Result};
use shelf_domain::ports::{BookRepository, CredentialVerifier};
use std::sync::Arc;
use tracing::info;

/// Application context with overridable bindings
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    resolver: Arc<BookRepositoryResolver>,
    repository: Singleton<dyn BookRepository>,
    settings: Singleton<AuthSettings>,
}

impl AppContext {
    /// Bind the default repository and settings for `config`
    ///
    /// Nothing is constructed until first resolution.
    pub fn new(config: AppConfig) -> Self {
        let config = Arc::new(config);
        let resolver = Arc::new(BookRepositoryResolver::new(Arc::clone(&config)));

        let repository = {
            let resolver = Arc::clone(&resolver);
            Singleton::new(REPOSITORY_BINDING, move || {
                resolver
                    .resolve_from_config()
                    .map_err(|e| Error::configuration(format!("Repository: {e}")))
            })
        };

        let settings = {
            let config = Arc::clone(&config);
            Singleton::new(SETTINGS_BINDING, move || {
                AuthSettings::from_config(&config.auth).map(Arc::new)
            })
        };

        Self {
            config,
            resolver,
            repository,
            settings,
        }
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Get the bound book repository
    pub fn repository(&self) -> Result<Arc<dyn BookRepository>> {
        self.repository.get()
    }

    /// Get the bound authentication settings
    pub fn settings(&self) -> Result<Arc<AuthSettings>> {
        self.settings.get()
    }

    /// Book service over the currently bound repository
    pub fn book_service(&self) -> Result<Arc<dyn BookServiceInterface>> {
        Ok(Arc::new(BookServiceImpl::new(self.repository()?)))
    }

    /// Credential verifier over the currently bound settings
    pub fn credential_verifier(&self) -> Result<Arc<dyn CredentialVerifier>> {
        Ok(Arc::new(SettingsCredentialVerifier::new(self.settings()?)))
    }

    // ========================================================================
    // Overrides
    // ========================================================================

    /// Replace the bound repository
    pub fn override_repository(&self, repository: Arc<dyn BookRepository>) -> Result<()> {
        info!(
            provider = repository.provider_name(),
            "Overriding repository binding"
        );
        self.repository.override_with(repository)
    }

    /// Replace the bound settings
    pub fn override_settings(&self, settings: AuthSettings) -> Result<()> {
        info!(username = %settings.username, "Overriding settings binding");
        self.settings.override_with(Arc::new(settings))
    }

    /// Drop all overrides and cached instances
    ///
    /// The next resolution rebuilds the configured defaults.
    pub fn reset(&self) -> Result<()> {
        self.repository.reset()?;
        self.settings.reset()?;
        info!("Application bindings reset");
        Ok(())
    }

    /// Whether any binding is currently overridden
    pub fn has_overrides(&self) -> bool {
        self.repository.is_overridden() || self.settings.is_overridden()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("repository", &self.repository)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context
///
/// Fails early when the configured repository provider is not registered.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!(
        provider = %config.repository.provider,
        seeded = config.repository.seed.len(),
        "Initializing application context"
    );

    let context = AppContext::new(config);
    if !context.resolver.is_configured_provider_available() {
        let available: Vec<&str> = context
            .resolver
            .list_available()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        return Err(Error::configuration(format!(
            "Unknown repository provider '{}'. Available providers: {:?}",
            context.config.repository.provider, available
        )));
    }

    Ok(context)
}

/// Initialize application for testing
pub async fn init_test_app() -> Result<AppContext> {
    init_app(AppConfig::default()).await
}

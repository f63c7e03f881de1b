//! Pool configuration

use std::borrow::Cow;

/// Configuration for [`Pool`](crate::Pool)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Label used in log events and errors
    pub name: Cow<'static, str>,

    /// Panic when the pool is dropped while slots are still checked out.
    ///
    /// The condition is always logged at `error` level; this flag decides
    /// whether it is also fatal.
    pub strict_teardown: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("pool"),
            strict_teardown: cfg!(debug_assertions),
        }
    }
}

impl PoolConfig {
    /// Production configuration - report leaked checkouts without aborting
    #[must_use]
    pub fn production() -> Self {
        Self {
            strict_teardown: false,
            ..Self::default()
        }
    }

    /// Debug configuration - leaked checkouts are fatal
    #[must_use]
    pub fn debug() -> Self {
        Self {
            strict_teardown: true,
            ..Self::default()
        }
    }

    /// Set the pool label
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the teardown policy
    #[must_use = "builder methods must be chained or built"]
    pub fn with_strict_teardown(mut self, strict: bool) -> Self {
        self.strict_teardown = strict;
        self
    }
}

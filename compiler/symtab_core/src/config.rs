//! Sizing for scope tables and the scope arena.

/// Error when a [`TableConfig`] is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("table capacity must be at least 1")]
    ZeroCapacity,
    #[error("table capacity {0} exceeds the maximum of {max}", max = TableConfig::MAX_CAPACITY)]
    CapacityTooLarge(usize),
    #[error("scope limit must be at least 1")]
    ZeroScopeLimit,
}

/// Fixed sizes for a scope chain.
///
/// Every scope gets a table of exactly `capacity` slots, and the probe
/// sequence tries exactly `capacity` candidates. `max_scopes` caps the
/// number of scopes ever created, root included.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    capacity: usize,
    max_scopes: usize,
}

impl TableConfig {
    /// Slots per scope table unless configured otherwise.
    pub const DEFAULT_CAPACITY: usize = 101;
    /// Scopes per chain unless configured otherwise.
    pub const DEFAULT_MAX_SCOPES: usize = 101;
    /// Upper bound on capacity; keeps `i * i` in the probe loop far from overflow.
    pub const MAX_CAPACITY: usize = 1 << 16;

    pub fn new(capacity: usize, max_scopes: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if capacity > Self::MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge(capacity));
        }
        if max_scopes == 0 {
            return Err(ConfigError::ZeroScopeLimit);
        }
        Ok(TableConfig {
            capacity,
            max_scopes,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn max_scopes(&self) -> usize {
        self.max_scopes
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            capacity: Self::DEFAULT_CAPACITY,
            max_scopes: Self::DEFAULT_MAX_SCOPES,
        }
    }
}

//! # Store Configuration
//!
//! Layout and id settings for a [`Store`](crate::Store).
//!
//! The store never reads the environment itself; the binary builds a
//! `StoreConfig` and hands it over. Defaults reproduce the classic layout:
//! 20-character columns and 5-character order ids.

use serde::{Deserialize, Serialize};
use stockroom_core::{DEFAULT_COLUMN_WIDTH, DEFAULT_ORDER_ID_LENGTH};

use crate::error::{StoreError, StoreResult};

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Width every table column is padded to.
    pub column_width: usize,

    /// Characters per generated order id.
    pub order_id_length: usize,
}

impl StoreConfig {
    pub fn with_column_width(mut self, column_width: usize) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn with_order_id_length(mut self, order_id_length: usize) -> Self {
        self.order_id_length = order_id_length;
        self
    }

    /// Rejects settings that would produce empty columns or empty ids.
    pub fn validate(&self) -> StoreResult<()> {
        if self.column_width == 0 {
            return Err(StoreError::Config("column_width must be positive".to_string()));
        }
        if self.order_id_length == 0 {
            return Err(StoreError::Config(
                "order_id_length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            column_width: DEFAULT_COLUMN_WIDTH,
            order_id_length: DEFAULT_ORDER_ID_LENGTH,
        }
    }
}

//! Per-invocation host context.
//!
//! `TxContext` layers a `TxOverlay` over the shared committed store and
//! implements `HostApi` for exactly one contract invocation. The runtime
//! creates one per call, then either commits it (success) or discards it
//! (error). Commit is where isolation between concurrent invocations is
//! enforced: a stale read set fails the whole invocation.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use hashrec_primitives::Timestamp;

use crate::error::HostError;
use crate::overlay::TxOverlay;
use crate::state_store::StateStore;
use crate::traits::HostApi;
use crate::types::{HostConfig, LogLevel, LogLine, TimeSource};

/// Host state for one invocation.
pub struct TxContext {
    tx_id: String,
    /// Committed state backend, shared with other invocations.
    store: Arc<dyn StateStore>,
    overlay: TxOverlay,
    config: HostConfig,
    logs: Vec<LogLine>,
}

impl TxContext {
    /// Create a context for a new invocation.
    pub fn new(tx_id: impl Into<String>, store: Arc<dyn StateStore>, config: HostConfig) -> Self {
        Self {
            tx_id: tx_id.into(),
            store,
            overlay: TxOverlay::new(),
            config,
            logs: Vec::new(),
        }
    }

    pub fn overlay(&self) -> &TxOverlay {
        &self.overlay
    }

    /// Log lines kept so far.
    pub fn logs(&self) -> &[LogLine] {
        &self.logs
    }

    /// Apply buffered writes to committed state.
    ///
    /// Read-only invocations have nothing to apply and always succeed.
    /// Returns the invocation's log lines.
    pub fn commit(self) -> Result<Vec<LogLine>, HostError> {
        if self.overlay.is_read_only() {
            return Ok(self.logs);
        }
        match self.store.commit(self.overlay.reads(), self.overlay.writes()) {
            Ok(()) => {
                tracing::debug!(
                    tx_id = %self.tx_id,
                    keys = self.overlay.writes().len(),
                    bytes = self.overlay.total_write_bytes(),
                    "invocation committed"
                );
                Ok(self.logs)
            }
            Err(err) => {
                tracing::warn!(tx_id = %self.tx_id, error = %err, "commit rejected");
                Err(err)
            }
        }
    }

    /// Drop all buffered writes. Returns the invocation's log lines.
    pub fn discard(mut self) -> Vec<LogLine> {
        self.overlay.clear();
        tracing::debug!(tx_id = %self.tx_id, "invocation discarded");
        self.logs
    }

    fn check_key(&self, key: &str) -> Result<(), HostError> {
        if key.is_empty() {
            return Err(HostError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(HostError::key_too_large(key.len(), self.config.max_key_len));
        }
        Ok(())
    }
}

impl HostApi for TxContext {
    fn state_get(&mut self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        self.check_key(key)?;
        if let Some(value) = self.overlay.get(key) {
            return Ok(Some(value.to_vec()));
        }
        let committed = self.store.get(key)?;
        self.overlay.record_read(key, committed.as_ref().map(|v| v.version));
        Ok(committed.map(|v| v.value))
    }

    fn state_put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError> {
        self.check_key(key)?;
        if value.len() > self.config.max_value_len {
            return Err(HostError::value_too_large(value.len(), self.config.max_value_len));
        }
        self.overlay.set(key.to_string(), value.to_vec());
        Ok(())
    }

    fn log(&mut self, level: LogLevel, message: &str) -> Result<(), HostError> {
        if message.len() > self.config.max_log_line_len {
            return Ok(()); // Silently drop oversized lines
        }
        if self.logs.len() >= self.config.max_log_lines as usize {
            return Ok(()); // Silently drop if at limit
        }
        match level {
            LogLevel::Error => tracing::error!(tx_id = %self.tx_id, "{}", message),
            LogLevel::Warn => tracing::warn!(tx_id = %self.tx_id, "{}", message),
            LogLevel::Info => tracing::info!(tx_id = %self.tx_id, "{}", message),
            LogLevel::Debug => tracing::debug!(tx_id = %self.tx_id, "{}", message),
        }
        self.logs.push(LogLine {
            level,
            message: message.to_string(),
        });
        Ok(())
    }

    fn timestamp(&self) -> Result<Timestamp, HostError> {
        match self.config.time_source {
            TimeSource::Fixed(ts) => Ok(ts),
            TimeSource::System => {
                let elapsed = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_err(|_| HostError::Internal("system clock before unix epoch".into()))?;
                Timestamp::try_from(elapsed.as_secs())
                    .map_err(|_| HostError::Internal("system clock out of range".into()))
            }
        }
    }
}

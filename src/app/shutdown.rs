//! Graceful shutdown handling for the application.
//!
//! Provides signal handling and cleanup procedures for graceful shutdown.

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Manages graceful shutdown of the application.
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
    save_on_exit: bool,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
            save_on_exit: true,
        }
    }

    /// Sets whether to save state on exit.
    pub fn set_save_on_exit(&mut self, save: bool) {
        self.save_on_exit = save;
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    pub fn should_save_on_exit(&self) -> bool {
        self.save_on_exit
    }

    /// Sets the shutdown flag from a background task when Ctrl+C arrives.
    pub fn listen_for_ctrl_c(&self) {
        let flag = self.shutdown_requested.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                flag.store(true, Ordering::SeqCst);
            }
        });
    }

    /// Performs cleanup operations before shutdown.
    pub async fn cleanup(&self, app: &mut crate::app::App) -> Result<()> {
        tracing::info!("Performing shutdown cleanup...");

        if self.save_on_exit && app.save_path.is_some() {
            tracing::info!("Saving state before exit...");
            app.save_state()?;
        }

        tracing::info!("Cleanup complete");
        Ok(())
    }
}

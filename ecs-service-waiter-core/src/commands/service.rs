//! ECS Service Waiter Service Layer
//!
//! The waiter holds a [`ServiceInventory`] and the wait configuration, and exposes
//! the activation phase, the stabilization phase and the driver that runs both
//! under a single deadline.

use crate::aws::ServiceInventory;
use crate::config::WaitConfig;

/// Main service struct that holds the inventory capability and the wait configuration
pub struct ServiceWaiter<I> {
    pub(crate) inventory: I,
    pub(crate) config: WaitConfig,
}

impl<I: ServiceInventory> ServiceWaiter<I> {
    pub fn new(inventory: I, config: WaitConfig) -> Self {
        Self { inventory, config }
    }

    pub fn config(&self) -> &WaitConfig {
        &self.config
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    // wait_for_active() is implemented in activation.rs
    // wait_for_stable() is implemented in stabilization.rs
    // run() is implemented in run.rs
}

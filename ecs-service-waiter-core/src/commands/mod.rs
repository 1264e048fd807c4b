//! Commands module - the waiter service and its two polling phases

mod activation;
mod run;
pub(crate) mod service;
mod stabilization;

pub use service::ServiceWaiter;

//! Service layer for the personal assistant
//!
//! Record-kind specific behavior on top of the generic stores: marking
//! tasks done and filtering them, contact search and finance reporting.

pub mod contact;
pub mod finance;
pub mod task;

pub use contact::ContactService;
pub use finance::{FinanceReport, FinanceService};
pub use task::{TaskFilter, TaskService};

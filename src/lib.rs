//! # Fee Schedule Core
//!
//! A fee schedule engine providing CSV rate-table ingestion, range-indexed
//! lookup, and fee quoting.
//!
//! ## Features
//!
//! - **Schedule parsing**: validated `Fee Type,From,To,Percentage` CSV input
//!   with row-level error reporting
//! - **Range index**: rules grouped per fee type and stable-sorted by lower
//!   bound for binary search
//! - **Fee evaluation**: O(log k) range lookup with inclusive bounds and
//!   exact decimal fee computation
//! - **Atomic publication**: each upload replaces the live schedule
//!   wholesale; readers always see a complete revision
//! - **Storage abstraction**: backend-agnostic design with a trait-based
//!   schedule store
//!
//! ## Quick Start
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use fee_schedule_core::utils::MemoryScheduleStore;
//! use fee_schedule_core::{FeeError, FeeService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), FeeError> {
//! let service = FeeService::new(MemoryScheduleStore::new());
//!
//! service
//!     .publish_schedule("Fee Type,From,To,Percentage\nclearing,0,5002,0.0379")
//!     .await?;
//!
//! let quote = service.quote("clearing", &BigDecimal::from(1000)).await?;
//! assert_eq!(quote.fee_amount, "37.9".parse::<BigDecimal>().unwrap());
//! # Ok(())
//! # }
//! ```

pub mod evaluator;
pub mod schedule;
pub mod service;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use evaluator::*;
pub use schedule::*;
pub use service::*;
pub use traits::*;
pub use types::*;

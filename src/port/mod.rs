//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────────────┐      ┌────────────────┐
//!   │  CLI adapter │ ───▶ │  EmployeeStatistics  │ ───▶ │  RecordSource  │
//!   └──────────────┘      └──────────────────────┘      └────────────────┘
//!                                                         ▲            ▲
//!                                               HTTP adapter     test doubles
//! ```

pub mod outbound;

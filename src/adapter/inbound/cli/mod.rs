//! CLI module graph.

pub mod banner;
pub mod command;
pub mod dispatch;
pub mod output;
pub mod report;
pub mod run;
pub mod treemap;

//! Output formatting for shootout results

pub mod console;

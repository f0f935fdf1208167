//! CLI commands for finder

pub mod city;
pub mod country;
pub mod dispatch;
pub mod find;
pub mod format;

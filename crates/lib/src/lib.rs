//! smsdigest core library: inbound SMS webhook payload model, display accessors,
//! and config, used by the CLI.

pub mod config;
pub mod init;
pub mod payload;

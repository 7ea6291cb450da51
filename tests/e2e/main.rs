//! End-to-end tests that run the `listedit` binary

mod cli_basic;
mod config_cli;

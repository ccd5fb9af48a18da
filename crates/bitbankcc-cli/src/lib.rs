/*
[INPUT]:  Public API exports for bitbankcc-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point shared with the binary
[UPDATE]: When adding new modules or public exports
*/

pub mod config;

pub use config::CliConfig;

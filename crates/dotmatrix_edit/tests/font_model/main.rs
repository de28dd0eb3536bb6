//! FontModel integration tests, one module per operation family


mod clipboard;
mod invariants;
mod outline;
mod persistence;
mod selection;

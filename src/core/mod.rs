// Core modules implementing hook capability detection and error modeling.
pub mod error;
pub mod hooks;

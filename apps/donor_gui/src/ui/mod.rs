//! UI layer for the donor finder window.

pub mod app;

pub use app::DonorFinderApp;

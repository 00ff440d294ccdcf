#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
//! ChainCheck demo window.

mod platform;

fn main() -> anyhow::Result<()> {
    platform::run_app()
}

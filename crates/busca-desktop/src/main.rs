//! busca Desktop Application
//!
//! A window with a search box that looks up students as you type.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod page;
mod state;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("busca=debug".parse().expect("valid directive")),
        )
        .init();

    tracing::info!("Starting busca...");

    let config =
        Config::new().with_window(WindowBuilder::new().with_title("Busca de alunos"));

    dioxus::LaunchBuilder::new().with_cfg(config).launch(app::App);
}

#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

use crate::components::board::BoardApp;
use crate::environment::{Config, Environment};
use crate::style::STYLE;

pub fn run() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();

    let config = Config::from_env();
    log::info!("Using API at {}", config.api_url);

    let window = WindowBuilder::new()
        .with_title("Postboard")
        .with_inner_size(LogicalSize::new(1100., 760.))
        .with_min_inner_size(LogicalSize::new(640., 480.));
    let desktop = DesktopConfig::new()
        .with_custom_head(format!(
            r#"
        <title>Postboard</title>
        <style>{STYLE}</style>
        "#
        ))
        .with_window(window);

    dioxus_desktop::launch_with_props(RootApp, RootAppProps { config }, desktop);
}

pub struct RootAppProps {
    config: Config,
}

pub fn RootApp(cx: Scope<'_, RootAppProps>) -> Element<'_> {
    log::trace!("rerender root-app");
    let environment = use_state(cx, || Environment::new(cx.props.config.clone()));
    cx.render(rsx!(BoardApp {
        environment: environment
    }))
}

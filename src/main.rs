mod assets;
mod config;
mod launch;
mod platform;
mod ui;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hdlauncher")]
#[command(about = "A Dolphin launcher that swaps HD texture packs before boot")]
struct Args {
    /// Launch this ISO instead of the configured one
    iso: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();

    // Set RUST_LOG if not already set
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", if args.debug { "debug" } else { "info" });
    }
    env_logger::init();

    // Unsupported hosts have no file-explorer command; bail out before the UI
    let host = match platform::HostPlatform::detect() {
        Ok(host) => host,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 260.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "HD Launcher",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::LauncherApp::new(host, args.iso)))),
    )
}

use clap::Parser;
use eframe::egui;
use log::{error, info};
use std::path::PathBuf;

use snap_split::config::Config;
use snap_split::panels::DemoPanels;
use snap_split::{SplitController, SplitView, Spring};

#[derive(Parser, Debug)]
#[command(name = "snap-split")]
#[command(about = "Resizable two-panel split that snaps to its edges", long_about = None)]
struct Args {
    /// Minimum height of either panel
    #[arg(long)]
    min_height: Option<f32>,

    /// Distance from an edge below which a release snaps to it
    #[arg(long)]
    snap_threshold: Option<f32>,

    /// Height of the drag handle strip
    #[arg(long)]
    handle_gap: Option<f32>,

    /// Starting height of the top panel
    #[arg(long)]
    initial_height: Option<f32>,

    /// Jump to snap targets instead of animating
    #[arg(long)]
    no_animation: bool,

    /// Load config from this file instead of ~/.config/snap-split/config.yaml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write an example config file and exit
    #[arg(long)]
    create_config: bool,
}

impl Args {
    /// Command-line flags win over the config file
    fn apply(&self, config: &mut Config) {
        let split = &mut config.split;
        if let Some(v) = self.min_height {
            split.min_height = v;
        }
        if let Some(v) = self.snap_threshold {
            split.snap_threshold = v;
        }
        if let Some(v) = self.handle_gap {
            split.handle_gap = v;
        }
        if let Some(v) = self.initial_height {
            split.initial_top_height = v;
        }
        if self.no_animation {
            split.spring = Spring::instant();
        }
    }
}

struct SnapSplitApp {
    config: Config,
    // Created on the first frame, once the container height is known
    controller: Option<SplitController>,
    panels: DemoPanels,
}

impl SnapSplitApp {
    fn new(config: Config) -> Self {
        let panels = DemoPanels::new(config.detail_threshold);
        Self {
            config,
            controller: None,
            panels,
        }
    }
}

impl eframe::App for SnapSplitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let split = self.config.split;
                let controller = self.controller.get_or_insert_with(|| {
                    let total_height = ui.available_height();
                    info!("Creating split for container height {}", total_height);
                    SplitController::new(split, total_height)
                });

                let panels = &self.panels;
                SplitView::new("main_split", controller).show(ui, |top, bottom| {
                    panels.render_top(top);
                    panels.render_bottom(bottom);
                });
            });
    }
}

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    if args.create_config {
        match Config::create_example() {
            Ok(()) => {
                info!("Example config written");
                return Ok(());
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    args.apply(&mut config);

    info!("snap-split starting with {:?}", config.split);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("snap-split"),
        ..Default::default()
    };

    eframe::run_native(
        "snap-split",
        native_options,
        Box::new(|_cc| Ok(Box::new(SnapSplitApp::new(config)))),
    )
}

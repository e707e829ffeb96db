slint::include_modules!();

mod callbacks;
mod chart;
mod surface;
mod utils;

use anyhow::{bail, Context};
use clap::Parser;
use label_validator::config::{load_config, AppConfig};
use label_validator::prompt::{expand_path, Prompter};
use label_validator::{count_class_instances, ColorAssignment, Dataset, LabelError, Viewer, ViewerOptions};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use crate::callbacks::navigation::{setup_navigation_callbacks, show_current, FatalSlot};
use crate::surface::SlintSurface;

/// Review YOLO labels: class distribution chart, then an image viewer
/// with the boxes drawn on top.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Folder holding classes.txt, the label files and the images.
    /// Asked for interactively when omitted.
    folder: Option<String>,

    /// Config file to use instead of the per-user one.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the class distribution chart.
    #[arg(long)]
    no_chart: bool,
}

fn main() -> anyhow::Result<()> {
    label_validator::logging::setup_logger();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let folder = resolve_folder(cli.folder.as_deref(), &mut prompter)?;
    let dataset = Dataset::open(&folder)
        .with_context(|| format!("failed to load dataset from {}", folder.display()))?;

    let colors = ColorAssignment::resolve(&dataset.classes, &config.colors, &mut prompter)
        .context("failed to assign class colors")?;

    let counts = count_class_instances(&dataset.annotations, &dataset.classes)?;
    if config.chart.enabled && !cli.no_chart {
        chart::show_class_distribution(&counts, &dataset.classes, &config.chart)?;
    }

    run_viewer(dataset, colors, &config)
}

fn resolve_folder<R: BufRead, W: Write>(
    arg: Option<&str>,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<PathBuf> {
    if let Some(folder) = arg {
        return Ok(expand_path(folder));
    }
    if let Some(folder) = prompter.ask_folder()? {
        return Ok(folder);
    }

    match rfd::FileDialog::new()
        .set_title("Select Dataset Folder")
        .pick_folder()
    {
        Some(folder) => Ok(folder),
        None => bail!("no dataset folder selected"),
    }
}

fn run_viewer(dataset: Dataset, colors: ColorAssignment, config: &AppConfig) -> anyhow::Result<()> {
    let options = ViewerOptions {
        label_offset: config.viewer.label_offset,
    };
    let viewer = match Viewer::new(dataset, colors, options) {
        Ok(viewer) => viewer,
        Err(e @ LabelError::NoImages { .. }) => {
            log::warn!("{e}; nothing to show");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let ui = ViewerWindow::new()?;
    ui.set_frame(utils::placeholder_image());
    ui.set_box_line_width(config.viewer.box_line_width);
    ui.set_label_font_size(config.viewer.label_font_size);

    let viewer = Rc::new(RefCell::new(viewer));
    let surface = Rc::new(RefCell::new(SlintSurface::new(&ui)));
    let fatal: FatalSlot = Rc::new(RefCell::new(None));

    show_current(&ui, &viewer.borrow(), &mut surface.borrow_mut())?;
    setup_navigation_callbacks(&ui, viewer, surface, fatal.clone());

    ui.run()?;

    if let Some(e) = fatal.borrow_mut().take() {
        return Err(e.into());
    }
    Ok(())
}

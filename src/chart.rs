//! Class distribution bar chart window.

use label_validator::colors::parse_color;
use label_validator::config::ChartConfig;
use label_validator::{ClassCounts, ClassList, Rgb};
use slint::ComponentHandle;

use crate::utils::to_slint_color;
use crate::{ChartBar, ChartWindow};

const DEFAULT_BAR_COLOR: Rgb = Rgb::new(135, 206, 235);

/// Show the chart and block until its window is closed.
pub fn show_class_distribution(
    counts: &ClassCounts,
    classes: &ClassList,
    config: &ChartConfig,
) -> Result<(), slint::PlatformError> {
    let window = ChartWindow::new()?;

    let bars: Vec<ChartBar> = counts
        .bars(classes)
        .into_iter()
        .map(|bar| ChartBar {
            name: bar.name.into(),
            count: i32::try_from(bar.count).unwrap_or(i32::MAX),
            fraction: bar.fraction,
        })
        .collect();
    log::info!(
        "Class distribution: {} instances over {} classes",
        counts.total(),
        bars.len()
    );
    window.set_bars(slint::ModelRc::new(slint::VecModel::from(bars)));

    let bar_color = parse_color(&config.bar_color).unwrap_or_else(|| {
        log::warn!(
            "Unknown chart bar color '{}'; using skyblue",
            config.bar_color
        );
        DEFAULT_BAR_COLOR
    });
    window.set_bar_color(to_slint_color(bar_color));

    window.run()
}

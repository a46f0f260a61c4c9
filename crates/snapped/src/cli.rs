use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shared::geometry::{Point, Rect};
use snapped_config::{ResultFilter, SortOrder};
use snapped_types::ViewportSize;

#[derive(Debug, Parser)]
#[command(
    name = "snapped",
    about = "Find products that look like a photo",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upload an image, optionally crop it, and search for matching products.
    Search(SearchArgs),

    /// Show the results of a past search.
    Results(ResultsArgs),

    /// List past uploads.
    History,

    /// Print the results-screen layout at a scroll offset.
    Layout(LayoutArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub image: PathBuf,

    /// Drag from X,Y to X+W,Y+H in screen coordinates.
    #[arg(long, value_name = "X,Y,W,H", value_parser = parse_rect, requires = "viewport")]
    pub crop: Option<Rect>,

    /// Size of the on-screen image viewport.
    #[arg(long, value_name = "WxH", value_parser = parse_viewport)]
    pub viewport: Option<ViewportSize>,

    /// Viewport position on screen. Defaults to the configured origin.
    #[arg(long, value_name = "X,Y", value_parser = parse_point, requires = "viewport")]
    pub origin: Option<Point>,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Debug, Args)]
pub struct ResultsArgs {
    pub search_id: i64,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    #[arg(long, default_value = "all")]
    pub filter: ResultFilter,

    /// Sort by price.
    #[arg(long)]
    pub sort: Option<SortOrder>,
}

#[derive(Debug, Args)]
pub struct LayoutArgs {
    #[arg(allow_negative_numbers = true)]
    pub offset: f32,

    #[arg(long, default_value_t = 390.0)]
    pub screen_width: f32,
}

fn parse_numbers<const N: usize>(s: &str, sep: char) -> Result<[f32; N], String> {
    let parts: Vec<&str> = s.split(sep).map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} values separated by '{sep}'"));
    }

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("'{part}' is not a number"))?;
    }
    Ok(out)
}

pub fn parse_rect(s: &str) -> Result<Rect, String> {
    let [x, y, width, height] = parse_numbers::<4>(s, ',')?;
    Ok(Rect::new(x, y, width, height))
}

pub fn parse_point(s: &str) -> Result<Point, String> {
    let [x, y] = parse_numbers::<2>(s, ',')?;
    Ok(Point::new(x, y))
}

pub fn parse_viewport(s: &str) -> Result<ViewportSize, String> {
    let [width, height] = parse_numbers::<2>(&s.to_lowercase(), 'x')?;
    let size = ViewportSize::new(width, height);
    if !size.is_measured() {
        return Err("viewport must have a positive width and height".to_string());
    }
    Ok(size)
}

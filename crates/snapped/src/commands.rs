use std::fmt::Write as _;
use std::path::Path;

use shared::geometry::{Point, Rect};
use snapped_api::ApiClient;
use snapped_config::{CropConfig, SnappedConfig};
use snapped_crop::CropSession;
use snapped_results::{HistoryState, ResultsState, result_count_label};
use snapped_scroll::{Channel, ScrollInterpolator};
use snapped_types::{
    ClipRequest, SearchRequest, SearchResponse, SourceImageSize, SourcePixelRect, ViewportLayout,
    ViewportSize,
};

use crate::cli::{LayoutArgs, ResultsArgs, SearchArgs, ViewArgs};
use crate::error::{CliError, Result};

pub async fn run_search(config: &SnappedConfig, args: SearchArgs) -> Result<()> {
    let source = read_source_size(&args.image)?;

    // Resolve the crop before uploading so a bad selection costs no request
    let region = match (args.crop, args.viewport) {
        (Some(crop), Some(viewport)) => Some(crop_region(
            source,
            crop,
            viewport,
            args.origin,
            &config.crop,
        )?),
        (Some(_), None) => {
            return Err(CliError::InvalidArgument(
                "--crop needs --viewport".to_string(),
            ));
        }
        _ => None,
    };

    let api = ApiClient::new(&config.api)?;
    let upload = api.upload_image(&args.image).await?;
    tracing::info!("Uploaded {}", upload.image_path);

    let request = match region {
        Some(region) => {
            let image_path = upload
                .cloudinary_url
                .clone()
                .unwrap_or_else(|| upload.image_path.clone());
            let clip = ClipRequest::new(region, image_path, upload.cloudinary_public_id.clone());
            let clipped = api.clip_image(&clip).await?;
            SearchRequest::clipped(&upload, &clipped)
        }
        None => SearchRequest::uploaded(&upload),
    };

    let response = api.search_products(&request).await?;
    print!("{}", render_results(&results_view(response, &args.view)));
    Ok(())
}

pub async fn run_results(config: &SnappedConfig, args: ResultsArgs) -> Result<()> {
    let api = ApiClient::new(&config.api)?;
    let response = api.get_search(args.search_id).await?;
    print!("{}", render_results(&results_view(response, &args.view)));
    Ok(())
}

pub async fn run_history(config: &SnappedConfig) -> Result<()> {
    let api = ApiClient::new(&config.api)?;
    let mut history = HistoryState::new();
    history.begin_loading();

    match api.list_searches().await {
        Ok(list) => history.set_list(list),
        Err(err) => {
            history.set_error(err.to_string());
            return Err(err.into());
        }
    }

    print!("{}", render_history(&history));
    Ok(())
}

pub fn run_layout(config: &SnappedConfig, args: LayoutArgs) -> Result<()> {
    print!("{}", render_layout(config, args.offset, args.screen_width));
    Ok(())
}

fn read_source_size(path: &Path) -> Result<SourceImageSize> {
    let (width, height) = image::image_dimensions(path).map_err(|source| CliError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("{} is {}x{}", path.display(), width, height);
    Ok(SourceImageSize::new(width, height))
}

/// Replays a drag over `crop` (screen coordinates) and returns the confirmed
/// region in source pixels.
pub fn crop_region(
    source: SourceImageSize,
    crop: Rect,
    viewport: ViewportSize,
    origin: Option<Point>,
    config: &CropConfig,
) -> Result<SourcePixelRect> {
    let mut session = CropSession::from_config(source, config);
    session.set_layout(ViewportLayout::new(
        viewport,
        origin.unwrap_or(config.viewport_origin),
    ));

    session.begin_drag(Point::new(crop.x, crop.y));
    session.update_drag(Point::new(crop.right(), crop.bottom()));
    session.end_drag();

    let region = session.confirm()?;
    tracing::debug!("Crop region {:?}", region);
    Ok(region)
}

fn results_view(response: SearchResponse, view: &ViewArgs) -> ResultsState {
    let mut state = ResultsState::new();
    state.begin_loading(response.search_id);
    state.set_response(response);
    state.set_filter(view.filter);
    if let Some(order) = view.sort {
        state.set_sort(order);
    }
    state
}

pub fn render_results(state: &ResultsState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Search {} ({}, {})",
        state.search_id().unwrap_or_default(),
        state.filter(),
        state.count_label()
    );
    if let Some(image) = state.header_image() {
        let _ = writeln!(out, "Image: {image}");
    }

    for result in state.visible() {
        let _ = writeln!(
            out,
            "  {:>10}  {}  [{}]",
            result.price.as_deref().unwrap_or("-"),
            result.title.as_deref().unwrap_or("Untitled"),
            result.source.as_deref().unwrap_or("unknown")
        );
        if let Some(link) = &result.link {
            let _ = writeln!(out, "              {link}");
        }
    }
    out
}

pub fn render_history(history: &HistoryState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} of {} uploads",
        history.searches().len(),
        history.total()
    );

    for search in history.searches() {
        let _ = writeln!(
            out,
            "  #{:<6} {}  {:<8} {}",
            search.id,
            search.search_time,
            if search.is_clipped { "clipped" } else { "full" },
            result_count_label(search.results.len())
        );
    }
    out
}

pub fn render_layout(config: &SnappedConfig, offset: f32, screen_width: f32) -> String {
    let interpolator = ScrollInterpolator::new(&config.results, screen_width);
    let values = interpolator.compute_channels(offset);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "offset {offset} (card progress {:.3})",
        interpolator.card_progress(offset)
    );
    for channel in Channel::ALL {
        let _ = writeln!(out, "  {:<14} {:>8.2}", format!("{channel:?}"), values.get(channel));
    }
    out
}

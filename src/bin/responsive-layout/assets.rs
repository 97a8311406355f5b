//! Embedded images: the window icon and the dashboard banner.

use eframe::egui;
use resvg::{tiny_skia, usvg};
use responsive_layout::assets::{Assets, BANNER_SVG, ICON_SVG};
use thiserror::Error;

/// Edge length of the rasterized window icon.
const ICON_SIZE: u32 = 64;

/// Errors that can occur when rasterizing the window icon.
#[derive(Error, Debug)]
pub enum IconLoadError {
    #[error("asset not found: {0}")]
    AssetNotFound(&'static str),
    #[error("failed to parse '{path}': {source}")]
    ParseError {
        path: &'static str,
        source: usvg::Error,
    },
    #[error("invalid icon size {0}x{0}")]
    InvalidSize(u32),
}

/// Rasterizes the embedded SVG icon into window icon data.
pub fn load_icon() -> Result<egui::IconData, IconLoadError> {
    let file = Assets::get(ICON_SVG).ok_or(IconLoadError::AssetNotFound(ICON_SVG))?;
    let tree = usvg::Tree::from_data(&file.data, &usvg::Options::default()).map_err(|source| {
        IconLoadError::ParseError {
            path: ICON_SVG,
            source,
        }
    })?;

    let mut pixmap =
        tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE).ok_or(IconLoadError::InvalidSize(ICON_SIZE))?;
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / tree.size().width(),
        ICON_SIZE as f32 / tree.size().height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha, egui expects straight alpha
    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(egui::IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    })
}

/// Returns the banner as an egui image source, if it is embedded.
pub fn banner_image() -> Option<egui::ImageSource<'static>> {
    let file = Assets::get(BANNER_SVG)?;
    Some(egui::ImageSource::Bytes {
        uri: format!("bytes://{BANNER_SVG}").into(),
        bytes: file.data.into_owned().into(),
    })
}

mod null_service;

pub use null_service::NullService;

use crate::core::{ColorName, FetchParams, GlobalPixel, Section};
use crate::error::CanvasResult;

/// Contract implemented by canvas service transports.
///
/// The engine issues section fetches, paint calls, and palette loads through
/// this seam; drawing code and wire protocol stay isolated from navigation
/// and paint logic. Change notifications are deliberately not part of the
/// trait: the host owns its subscription stream and forwards each event to
/// [`crate::CanvasEngine::notify_remote_change`], which keeps teardown with
/// the host (close the stream, stop calling in, drop the engine).
pub trait CanvasService {
    /// Returns the 3x3 sections for the given level and section address.
    ///
    /// The address is absent only for the root level. Sections missing from
    /// the response are treated as empty background, not as an error.
    fn fetch_sections(&mut self, params: FetchParams) -> CanvasResult<Vec<Section>>;

    fn paint_pixel(&mut self, pixel: GlobalPixel, color: ColorName) -> CanvasResult<()>;

    fn colors(&mut self) -> CanvasResult<Vec<ColorName>>;
}

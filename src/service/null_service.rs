use crate::core::{ColorName, FetchParams, GlobalPixel, Section};
use crate::error::{CanvasError, CanvasResult};
use crate::service::CanvasService;

/// In-memory service used by tests and headless engine usage.
///
/// Records every call so behavior suites can assert call counts and
/// parameters, returns canned section data, and injects failures on demand.
#[derive(Debug, Default)]
pub struct NullService {
    pub fetch_count: usize,
    pub paint_count: usize,
    pub color_count: usize,
    pub last_fetch: Option<FetchParams>,
    pub painted: Vec<(GlobalPixel, ColorName)>,
    pub canned_sections: Vec<Section>,
    pub fail_fetch: bool,
    pub fail_paint: bool,
    pub fail_colors: bool,
}

impl CanvasService for NullService {
    fn fetch_sections(&mut self, params: FetchParams) -> CanvasResult<Vec<Section>> {
        self.fetch_count += 1;
        self.last_fetch = Some(params);
        if self.fail_fetch {
            return Err(CanvasError::Service("injected fetch failure".to_owned()));
        }
        Ok(self.canned_sections.clone())
    }

    fn paint_pixel(&mut self, pixel: GlobalPixel, color: ColorName) -> CanvasResult<()> {
        self.paint_count += 1;
        if self.fail_paint {
            return Err(CanvasError::Service("injected paint failure".to_owned()));
        }
        self.painted.push((pixel, color));
        Ok(())
    }

    fn colors(&mut self) -> CanvasResult<Vec<ColorName>> {
        self.color_count += 1;
        if self.fail_colors {
            return Err(CanvasError::Service("injected color failure".to_owned()));
        }
        Ok(ColorName::ALL.to_vec())
    }
}

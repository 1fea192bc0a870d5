use crate::chart::ChartData;
use crate::display::error::DisplayError;

/// Something that can draw a [`ChartData`] and later tear the drawing down.
///
/// Each successful [`render`](ChartSurface::render) hands out a chart handle. The
/// [`ForecastDisplay`](crate::ForecastDisplay) owning the surface holds at most one
/// handle at a time and passes it back to [`release`](ChartSurface::release) before
/// rendering a replacement.
pub trait ChartSurface {
    type Chart;

    fn render(&mut self, data: &ChartData) -> Result<Self::Chart, DisplayError>;

    fn release(&mut self, chart: Self::Chart);
}

/// Handle issued by [`RecordingSurface`].
#[derive(Debug, PartialEq, Eq)]
pub struct RecordedChart {
    pub id: u64,
}

/// Headless surface that keeps every chart it was asked to draw.
///
/// Useful for command-line front ends and for checking display behaviour in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u64,
    rendered: Vec<ChartData>,
    live: Vec<u64>,
    released: Vec<u64>,
    fail_next: Option<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every chart rendered so far, oldest first.
    pub fn rendered(&self) -> &[ChartData] {
        &self.rendered
    }

    pub fn last_rendered(&self) -> Option<&ChartData> {
        self.rendered.last()
    }

    /// Ids of charts that were rendered and not yet released.
    pub fn live(&self) -> &[u64] {
        &self.live
    }

    /// Ids of released charts, in release order.
    pub fn released(&self) -> &[u64] {
        &self.released
    }

    /// Makes the next `render` call fail with `reason`.
    pub fn fail_next_render(&mut self, reason: impl Into<String>) {
        self.fail_next = Some(reason.into());
    }
}

impl ChartSurface for RecordingSurface {
    type Chart = RecordedChart;

    fn render(&mut self, data: &ChartData) -> Result<RecordedChart, DisplayError> {
        if let Some(reason) = self.fail_next.take() {
            return Err(DisplayError::Render(reason));
        }
        self.next_id += 1;
        self.rendered.push(data.clone());
        self.live.push(self.next_id);
        Ok(RecordedChart { id: self.next_id })
    }

    fn release(&mut self, chart: RecordedChart) {
        self.live.retain(|id| *id != chart.id);
        self.released.push(chart.id);
    }
}

// Plot output model - the renderable result a dashboard produces
use serde::Serialize;

/// Top-level figure description: size in inches, dpi and background colour.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub size: (f64, f64),
    pub dpi: u32,
    pub facecolor: String,
}

impl Figure {
    pub fn new(size: (f64, f64), dpi: u32, facecolor: String) -> Self {
        Self {
            size,
            dpi,
            facecolor,
        }
    }
}

/// One named drawing surface inside the figure, in figure-fraction
/// coordinates (x, y, width, height).
#[derive(Debug, Clone, Serialize)]
pub struct AxesSpec {
    pub rect: [f64; 4],
    pub polar: bool,
    pub facecolor: Option<String>,
    pub axis_off: bool,
}

impl AxesSpec {
    pub fn new(rect: [f64; 4]) -> Self {
        Self {
            rect,
            polar: false,
            facecolor: None,
            axis_off: false,
        }
    }

    pub fn polar(mut self) -> Self {
        self.polar = true;
        self
    }

    pub fn with_facecolor(mut self, facecolor: impl Into<String>) -> Self {
        self.facecolor = Some(facecolor.into());
        self
    }

    pub fn axis_off(mut self) -> Self {
        self.axis_off = true;
        self
    }
}

/// The composed figure plus its named surfaces, in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct PlotResult {
    pub figure: Figure,
    pub axes: Vec<(String, AxesSpec)>,
}

impl PlotResult {
    pub fn new(figure: Figure) -> Self {
        Self {
            figure,
            axes: Vec::new(),
        }
    }

    pub fn add_axes(&mut self, name: impl Into<String>, spec: AxesSpec) {
        self.axes.push((name.into(), spec));
    }

    pub fn axes(&self, name: &str) -> Option<&AxesSpec> {
        self.axes
            .iter()
            .find(|(axes_name, _)| axes_name == name)
            .map(|(_, spec)| spec)
    }
}

/// An opaque RGB color, independent of any drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const STEELBLUE: Color = Color::rgb(70, 130, 180);
pub const ORANGE: Color = Color::rgb(255, 165, 0);

/// Ten-color categorical palette used for pie slices.
pub const CATEGORY10: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];

/// Color of the gender at `index` in the full dataset's gender order.
///
/// Bars and line series share this so a gender keeps its color everywhere.
pub fn series_color(index: usize) -> Color {
    match index {
        0 => STEELBLUE,
        1 => ORANGE,
        i => CATEGORY10[i % CATEGORY10.len()],
    }
}

/// Color of the pie slice at `index` in group order.
pub fn category_color(index: usize) -> Color {
    CATEGORY10[index % CATEGORY10.len()]
}

/// Chart theme configuration
#[derive(Debug, Clone)]
pub struct ChartTheme {
    pub background_color: Color,
    pub text_color: Color,
    pub axis_color: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(255, 255, 255),
            text_color: Color::rgb(0, 0, 0),
            axis_color: Color::rgb(0, 0, 0),
        }
    }
}

/// Chart layout configuration, in pixels of the drawing surface
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
    pub title_font_size: f64,
    pub label_font_size: f64,
    pub tick_font_size: f64,
    pub tick_size: f64,
    pub tick_count: usize,
    pub band_padding: f64,
    pub point_radius: f64,
    pub line_width: f64,
    pub pie_radius: f64,
    pub pie_font_size: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            plot_left: 80.0,
            plot_right: 480.0,
            plot_top: 20.0,
            plot_bottom: 300.0,
            title_font_size: 18.0,
            label_font_size: 14.0,
            tick_font_size: 10.0,
            tick_size: 6.0,
            tick_count: 10,
            band_padding: 0.1,
            point_radius: 3.0,
            line_width: 2.0,
            pie_radius: 150.0,
            pie_font_size: 12.0,
        }
    }
}

impl ChartStyle {
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

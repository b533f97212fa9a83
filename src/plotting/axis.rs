use super::frame::{ChartFrame, HAnchor, Mark, VAnchor};
use super::scale::{format_tick, BandScale, LinearScale};
use super::styles::{ChartStyle, ChartTheme};

/// Distance between an axis line and its tick labels.
const LABEL_OFFSET: f64 = 3.0;

fn text(
    x: f64,
    y: f64,
    content: String,
    font_size: f64,
    theme: &ChartTheme,
    h_anchor: HAnchor,
    v_anchor: VAnchor,
) -> Mark {
    Mark::Text {
        x,
        y,
        content,
        font_size,
        color: theme.text_color,
        h_anchor,
        v_anchor,
        vertical: false,
    }
}

/// Vertical axis at `x` with ticks and labels on the left.
pub(crate) fn left_axis(frame: &mut ChartFrame, scale: &LinearScale, x: f64, style: &ChartStyle, theme: &ChartTheme) {
    let (r0, r1) = scale.range();
    frame.push(Mark::Line {
        from: (x, r0),
        to: (x, r1),
        stroke: theme.axis_color,
    });

    let step = scale.tick_step(style.tick_count);
    for tick in scale.ticks(style.tick_count) {
        let y = scale.map(tick);
        frame.push(Mark::Line {
            from: (x - style.tick_size, y),
            to: (x, y),
            stroke: theme.axis_color,
        });
        frame.push(text(
            x - style.tick_size - LABEL_OFFSET,
            y,
            format_tick(tick, step),
            style.tick_font_size,
            theme,
            HAnchor::End,
            VAnchor::Middle,
        ));
    }
}

/// Horizontal numeric axis at `y` with ticks and labels below.
pub(crate) fn bottom_axis(frame: &mut ChartFrame, scale: &LinearScale, y: f64, style: &ChartStyle, theme: &ChartTheme) {
    let (r0, r1) = scale.range();
    frame.push(Mark::Line {
        from: (r0, y),
        to: (r1, y),
        stroke: theme.axis_color,
    });

    let step = scale.tick_step(style.tick_count);
    for tick in scale.ticks(style.tick_count) {
        let x = scale.map(tick);
        bottom_tick(frame, x, y, format_tick(tick, step), style, theme);
    }
}

/// Horizontal categorical axis at `y`, one tick per band center.
pub(crate) fn band_axis(
    frame: &mut ChartFrame,
    scale: &BandScale,
    range: (f64, f64),
    y: f64,
    style: &ChartStyle,
    theme: &ChartTheme,
) {
    frame.push(Mark::Line {
        from: (range.0, y),
        to: (range.1, y),
        stroke: theme.axis_color,
    });

    for key in scale.domain() {
        if let Some(left) = scale.map(key) {
            let x = left + scale.bandwidth() / 2.0;
            bottom_tick(frame, x, y, key.clone(), style, theme);
        }
    }
}

fn bottom_tick(frame: &mut ChartFrame, x: f64, y: f64, label: String, style: &ChartStyle, theme: &ChartTheme) {
    frame.push(Mark::Line {
        from: (x, y),
        to: (x, y + style.tick_size),
        stroke: theme.axis_color,
    });
    frame.push(text(
        x,
        y + style.tick_size + LABEL_OFFSET,
        label,
        style.tick_font_size,
        theme,
        HAnchor::Middle,
        VAnchor::Top,
    ));
}

/// Chart title, x axis label and rotated y axis label.
pub(crate) fn axis_labels(
    frame: &mut ChartFrame,
    title: &str,
    x_label: &str,
    y_label: &str,
    style: &ChartStyle,
    theme: &ChartTheme,
) {
    let (center_x, center_y) = style.center();
    frame.push(text(
        center_x,
        30.0,
        title.to_string(),
        style.title_font_size,
        theme,
        HAnchor::Middle,
        VAnchor::Bottom,
    ));
    frame.push(text(
        center_x,
        style.plot_bottom + 50.0,
        x_label.to_string(),
        style.label_font_size,
        theme,
        HAnchor::Middle,
        VAnchor::Bottom,
    ));
    frame.push(Mark::Text {
        x: 16.0,
        y: center_y,
        content: y_label.to_string(),
        font_size: style.label_font_size,
        color: theme.text_color,
        h_anchor: HAnchor::Middle,
        v_anchor: VAnchor::Middle,
        vertical: true,
    });
}

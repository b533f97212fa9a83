//! Scales mapping data values onto pixel positions of a chart surface.

/// A continuous linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value onto the range. A zero-width domain maps every
    /// value onto the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` evenly spaced, human friendly values covering the
    /// domain, using steps of 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (start, stop) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        let Some((i1, i2, increment)) = tick_spec(start, stop, count as f64) else {
            return Vec::new();
        };
        (i1..=i2)
            .map(|i| {
                if increment < 0.0 {
                    i as f64 / -increment
                } else {
                    i as f64 * increment
                }
            })
            .collect()
    }

    /// Distance between consecutive ticks for `count` requested ticks.
    pub fn tick_step(&self, count: usize) -> f64 {
        let ticks = self.ticks(count);
        match ticks.as_slice() {
            [a, b, ..] => b - a,
            _ => 1.0,
        }
    }
}

/// Most tick intervals a single axis may produce.
const MAX_TICKS: i64 = 1_000;

/// Tick index bounds and increment. A negative increment means "divide by".
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if !power.is_finite() {
        return None;
    }

    let (i1, i2, increment) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        if !inc.is_finite() {
            return None;
        }
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start {
            i1 = i1.saturating_add(1);
        }
        if (i2 as f64) / inc > stop {
            i2 = i2.saturating_sub(1);
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        if !inc.is_finite() || inc == 0.0 {
            return None;
        }
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 = i1.saturating_add(1);
        }
        if (i2 as f64) * inc > stop {
            i2 = i2.saturating_sub(1);
        }
        (i1, i2, inc)
    };

    if i2.checked_sub(i1).map_or(true, |n| n > MAX_TICKS) {
        return None;
    }
    if i2 < i1 {
        if (0.5..2.0).contains(&count) {
            return tick_spec(start, stop, count * 2.0);
        }
        return None;
    }
    Some((i1, i2, increment))
}

/// Format a tick value with as many decimals as its step needs, grouping
/// thousands with commas.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "−"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// A categorical scale dividing a pixel range into equal bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Bands over `range` with `padding` (as a fraction of the step) between
    /// bands and at both ends, centered within the range.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = domain.len() as f64;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;

        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Left edge of the band for `key`, or `None` if it is not in the domain.
    pub fn map(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_linear_map() {
        let y = LinearScale::new((0.0, 300.0), (300.0, 20.0));
        assert_eq!(y.map(0.0), 300.0);
        assert_eq!(y.map(300.0), 20.0);
        assert_eq!(y.map(150.0), 160.0);
    }

    #[test]
    fn test_zero_width_domain_maps_to_middle() {
        let x = LinearScale::new((0.0, 0.0), (80.0, 480.0));
        assert_eq!(x.map(0.0), 280.0);
        assert_eq!(x.ticks(10), vec![0.0]);
    }

    #[test]
    fn test_ticks() {
        let scale = LinearScale::new((0.0, 300.0), (300.0, 20.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&300.0));
        assert_eq!(ticks.len(), 16);
        assert_eq!(scale.tick_step(10), 20.0);

        let scale = LinearScale::new((0.0, 5.0), (80.0, 480.0));
        assert_eq!(
            scale.ticks(10),
            vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0]
        );
    }

    #[test]
    fn test_ticks_of_non_finite_domain() {
        let scale = LinearScale::new((0.0, f64::NAN), (300.0, 20.0));
        assert!(scale.ticks(10).is_empty());
    }

    #[test]
    fn test_ticks_of_subnormal_domain() {
        let scale = LinearScale::new((0.0, 1e-308), (300.0, 20.0));
        assert!(scale.ticks(10).is_empty());
        assert_eq!(scale.tick_step(10), 1.0);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(50.0, 50.0), "50");
        assert_eq!(format_tick(2.5, 0.5), "2.5");
        assert_eq!(format_tick(1500.0, 500.0), "1,500");
        assert_eq!(format_tick(1_000_000.0, 100_000.0), "1,000,000");
        assert_eq!(format_tick(0.0, 0.5), "0.0");
    }

    #[test]
    fn test_band_scale() {
        let x = BandScale::new(
            vec!["Male".to_string(), "Female".to_string()],
            (80.0, 480.0),
            0.1,
        );
        let step = 400.0 / 2.1;
        assert!((x.bandwidth() - step * 0.9).abs() < 1e-9);
        assert!((x.map("Male").unwrap() - (80.0 + step * 0.1)).abs() < 1e-9);
        assert!((x.map("Female").unwrap() - (80.0 + step * 1.1)).abs() < 1e-9);
        assert_eq!(x.map("Other"), None);
    }
}

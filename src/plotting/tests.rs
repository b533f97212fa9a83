use super::*;
use crate::data::RecordStore;
use crate::types::PurchaseRecord;
use pretty_assertions::assert_eq;
use std::f64::consts::TAU;

fn setup_store() -> RecordStore {
    RecordStore::new(vec![
        PurchaseRecord::new("Male", 3, 100.0, "Card"),
        PurchaseRecord::new("Male", 5, 200.0, "Cash"),
        PurchaseRecord::new("Female", 2, 150.0, "Card"),
        PurchaseRecord::new("Female", 4, 300.0, "Card"),
    ])
}

fn rects(frame: &ChartFrame) -> Vec<(f64, f64, f64, f64)> {
    frame
        .marks()
        .filter_map(|mark| match mark {
            Mark::Rect {
                x,
                y,
                width,
                height,
                ..
            } => Some((*x, *y, *width, *height)),
            _ => None,
        })
        .collect()
}

fn circle_count(frame: &ChartFrame) -> usize {
    frame
        .marks()
        .filter(|mark| matches!(mark, Mark::Circle { .. }))
        .count()
}

#[test]
fn test_bar_means() {
    let store = setup_store();
    let chart = BarChart::new(&store);

    let bars = chart.bars(&store.all());
    assert_eq!(
        bars,
        vec![
            Bar {
                gender: "Male".to_string(),
                mean_purchase: 150.0
            },
            Bar {
                gender: "Female".to_string(),
                mean_purchase: 225.0
            },
        ]
    );
}

#[test]
fn test_bar_heights_use_full_dataset_domain() {
    let store = setup_store();
    let chart = BarChart::new(&store);
    assert_eq!(chart.y_domain(), (0.0, 300.0));

    let frame = chart.render(&store.all());
    let bars = rects(&frame);
    assert_eq!(bars.len(), 2);
    // 225 of 300 over a 280px tall plot area ending at y=300
    let (_, top, _, height) = bars[1];
    assert!((top - 90.0).abs() < 1e-9);
    assert!((height - 210.0).abs() < 1e-9);

    let female: Vec<&PurchaseRecord> = store
        .all()
        .into_iter()
        .filter(|r| r.gender == "Female")
        .collect();
    let filtered = chart.render(&female);
    assert_eq!(chart.y_domain(), (0.0, 300.0));

    // the remaining bar keeps its band and height
    assert_eq!(rects(&filtered), vec![bars[1]]);
}

#[test]
fn test_bar_render_of_empty_subset_draws_no_bars() {
    let store = setup_store();
    let frame = BarChart::new(&store).render(&[]);
    assert!(rects(&frame).is_empty());
    assert!(frame.texts().contains(&"Average Purchase by Gender"));
}

#[test]
fn test_bar_hit_returns_gender() {
    let store = setup_store();
    let frame = BarChart::new(&store).render(&store.all());

    let (x, y, width, height) = rects(&frame)[0];
    assert_eq!(frame.hit(x + width / 2.0, y + height / 2.0), Some("Male"));
    assert_eq!(frame.hit(x - 5.0, y + height / 2.0), None);
    assert_eq!(frame.hit(300.0, 10.0), None);
}

#[test]
fn test_line_series_sorted_by_family_size() {
    let store = RecordStore::new(vec![
        PurchaseRecord::new("Male", 5, 200.0, "Cash"),
        PurchaseRecord::new("Male", 3, 100.0, "Card"),
        PurchaseRecord::new("Male", 3, 300.0, "Card"),
        PurchaseRecord::new("Female", 2, 150.0, "Card"),
    ]);
    let chart = LineChart::new(&store);

    let series = chart.series(&store.all());
    assert_eq!(
        series,
        vec![
            Series {
                gender: "Male".to_string(),
                points: vec![(3, 200.0), (5, 200.0)],
            },
            Series {
                gender: "Female".to_string(),
                points: vec![(2, 150.0)],
            },
        ]
    );
}

#[test]
fn test_line_skips_missing_family_size() {
    let mut records = vec![
        PurchaseRecord::new("Male", 3, 100.0, "Card"),
        PurchaseRecord::new("Male", 0, 500.0, "Card"),
    ];
    records[1].family_size = None;
    let store = RecordStore::new(records);
    let chart = LineChart::new(&store);

    let series = chart.series(&store.all());
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].points, vec![(3, 100.0)]);
    assert_eq!(chart.x_domain(), (0.0, 3.0));
}

#[test]
fn test_line_render_filtered_keeps_domains() {
    let store = setup_store();
    let chart = LineChart::new(&store);

    let full = chart.render(&store.all());
    assert_eq!(circle_count(&full), 4);
    assert_eq!(
        full.marks()
            .filter(|mark| matches!(mark, Mark::Polyline { .. }))
            .count(),
        2
    );

    let male: Vec<&PurchaseRecord> = store
        .all()
        .into_iter()
        .filter(|r| r.gender == "Male")
        .collect();
    let filtered = chart.render(&male);
    assert_eq!(circle_count(&filtered), 2);
    assert!(filtered.bound().all(|(_, gender)| gender == "Male"));
    assert_eq!(chart.x_domain(), (0.0, 5.0));
    assert_eq!(chart.y_domain(), (0.0, 300.0));
}

#[test]
fn test_line_point_hit_returns_series_gender() {
    let store = setup_store();
    let frame = LineChart::new(&store).render(&store.all());

    let (mark, gender) = frame.bound().last().unwrap();
    let Mark::Circle { cx, cy, .. } = mark else {
        panic!("expected a point");
    };
    assert_eq!(gender, "Female");
    assert_eq!(frame.hit(*cx + 1.0, *cy - 1.0), Some("Female"));
}

#[test]
fn test_pie_slices_cover_full_circle() {
    let store = setup_store();
    let slices = PieChart::new().slices(&store.all());

    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].payment_method, "Card");
    assert_eq!(slices[0].label(), "75.0%");
    assert_eq!(slices[1].label(), "25.0%");

    let span: f64 = slices.iter().map(|s| s.end_angle - s.start_angle).sum();
    assert!((span - TAU).abs() < 1e-12);
    assert_eq!(slices[0].start_angle, 0.0);
    assert_eq!(slices[1].end_angle, TAU);
}

#[test]
fn test_pie_label_rounds_half_up() {
    let mut records = vec![PurchaseRecord::new("Male", 1, 10.0, "Cash")];
    records.extend((0..15).map(|_| PurchaseRecord::new("Male", 1, 10.0, "Card")));
    let store = RecordStore::new(records);
    let slices = PieChart::new().slices(&store.all());

    let labels: Vec<String> = slices.iter().map(Slice::label).collect();
    assert_eq!(labels, vec!["6.3%", "93.8%"]);
}

#[test]
fn test_pie_largest_slice_first() {
    let store = RecordStore::new(vec![
        PurchaseRecord::new("Male", 1, 10.0, "Cash"),
        PurchaseRecord::new("Male", 1, 10.0, "Card"),
        PurchaseRecord::new("Male", 1, 10.0, "Card"),
        PurchaseRecord::new("Male", 1, 10.0, "Wallet"),
    ]);
    let slices = PieChart::new().slices(&store.all());

    let methods: Vec<&str> = slices.iter().map(|s| s.payment_method.as_str()).collect();
    assert_eq!(methods, vec!["Cash", "Card", "Wallet"]);
    // Card is largest, so it starts at 12 o'clock; ties keep group order
    assert_eq!(slices[1].start_angle, 0.0);
    assert_eq!(slices[0].start_angle, slices[1].end_angle);
    assert_eq!(slices[2].start_angle, slices[0].end_angle);
    assert_eq!(slices[2].end_angle, TAU);
}

#[test]
fn test_pie_percentages_relative_to_subset() {
    let store = setup_store();
    let male: Vec<&PurchaseRecord> = store
        .all()
        .into_iter()
        .filter(|r| r.gender == "Male")
        .collect();

    let frame = PieChart::new().render(&male);
    let texts = frame.texts();
    assert!(texts.contains(&"50.0%"));
    assert_eq!(texts.iter().filter(|t| **t == "50.0%").count(), 2);
    assert!(frame.bound().next().is_none());
}

#[test]
fn test_pie_of_empty_subset() {
    let frame = PieChart::new().render(&[]);
    assert_eq!(
        frame
            .marks()
            .filter(|mark| matches!(mark, Mark::Wedge { .. }))
            .count(),
        0
    );
    assert_eq!(frame.texts(), vec!["Payment Methods Distribution"]);
}

#[test]
fn test_render_svg() {
    let store = setup_store();
    let theme = ChartTheme::default();

    for frame in [
        BarChart::new(&store).render(&store.all()),
        LineChart::new(&store).render(&store.all()),
        PieChart::new().render(&store.all()),
    ] {
        let svg = render_svg(&frame, &theme).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(frame.kind.title()));
    }
}

#[test]
fn test_render_with_tiny_purchase_amounts() {
    let store = RecordStore::new(vec![
        PurchaseRecord::new("Male", 1, 1e-308, "Card"),
        PurchaseRecord::new("Female", 2, 5e-309, "Cash"),
    ]);

    let bar = BarChart::new(&store).render(&store.all());
    assert_eq!(rects(&bar).len(), 2);
    let line = LineChart::new(&store).render(&store.all());
    assert_eq!(circle_count(&line), 2);
}

#[test]
fn test_frames_carry_renderer_kind() {
    let store = setup_store();
    let bar = BarChart::new(&store);
    let line = LineChart::new(&store);
    let pie = PieChart::new();
    let renderers: [&dyn ChartRenderer; 3] = [&bar, &line, &pie];

    let kinds: Vec<ChartKind> = renderers
        .iter()
        .map(|renderer| renderer.render(&store.all()).kind)
        .collect();
    assert_eq!(kinds, ChartKind::ALL.to_vec());
}

use proptest::prelude::*;
use trellis_grid::api::{AxisRangeResolver, select_cohort};
use trellis_grid::core::{
    BoxData, BoxEntry, Plot, PlotData, PlotId, RangeData, RangePoint, RangeSeries, ScatterData,
    ScatterPoint, TrellisDesign, TrellisEntries, TrellisEntry,
};

const MEASUREMENTS: [&str; 3] = ["intensity", "count", "ratio"];

fn arb_plot_data() -> impl Strategy<Value = PlotData> {
    prop_oneof![
        prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0, 0.0f64..50.0), 0..6)
            .prop_map(|entries| PlotData::Box(BoxData {
                entries: entries
                    .into_iter()
                    .map(|(x, low, spread)| BoxEntry::at(x).with_whiskers(low, low + spread))
                    .collect(),
            })),
        prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 0..8).prop_map(
            |points| PlotData::Scatter(ScatterData {
                points: points
                    .into_iter()
                    .map(|(x, y)| ScatterPoint::new(x, y))
                    .collect(),
            })
        ),
        prop::collection::vec(
            (
                -1_000.0f64..1_000.0,
                prop::option::of(-1_000.0f64..1_000.0),
                prop::option::of(-1_000.0f64..1_000.0),
            ),
            0..8
        )
        .prop_map(|points| {
            PlotData::Range(RangeData {
                series: vec![RangeSeries {
                    name: "s".to_owned(),
                    points: points
                        .into_iter()
                        .enumerate()
                        .map(|(i, (y, min, max))| RangePoint {
                            x: i as f64,
                            y: Some(y),
                            min,
                            max,
                        })
                        .collect(),
                }],
            })
        }),
    ]
}

fn arb_plots() -> impl Strategy<Value = Vec<Plot>> {
    prop::collection::vec((0usize..MEASUREMENTS.len(), arb_plot_data()), 1..9).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (measurement, data))| {
                    let trellis = TrellisEntries::new(vec![TrellisEntry::mandatory(
                        "measurement",
                        MEASUREMENTS[measurement],
                    )])
                    .expect("single mandatory entry");
                    Plot::new(PlotId::new(i as u32), trellis, data)
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn resolved_ranges_keep_min_below_max(
        plots in arb_plots(),
        columns in 1usize..4,
        design_index in 0usize..2
    ) {
        let resolver = AxisRangeResolver::default();
        let design = if design_index == 0 {
            TrellisDesign::ContinuousOverTime
        } else {
            TrellisDesign::CategoricalOverTime
        };
        let limit = plots.len();
        for index in 0..plots.len() {
            let (row, col) = (index / columns, index % columns);
            for range in [
                resolver.get_x_range(row, col, Some(columns), Some(limit), &plots, "", design),
                resolver.get_y_range(row, col, Some(columns), Some(limit), &plots, ""),
            ]
            .into_iter()
            .flatten()
            {
                if let Some((min, max)) = range.bounds() {
                    prop_assert!(min <= max, "min {} > max {}", min, max);
                }
            }
        }
    }

    #[test]
    fn trellised_panel_is_member_of_its_own_cohort(
        plots in arb_plots(),
        pick in any::<prop::sample::Index>()
    ) {
        let index = pick.index(plots.len());
        let target = &plots[index];
        let cohort = select_cohort(target, &plots, Some(plots.len()));
        prop_assert!(cohort.iter().any(|plot| plot.id == target.id));
    }

    #[test]
    fn identical_queries_produce_identical_ranges(
        plots in arb_plots(),
        columns in 1usize..4,
        pick in any::<prop::sample::Index>()
    ) {
        let resolver = AxisRangeResolver::default();
        let index = pick.index(plots.len());
        let (row, col) = (index / columns, index % columns);
        let limit = Some(plots.len());

        let design = TrellisDesign::default();
        let first_x =
            resolver.get_x_range(row, col, Some(columns), limit, &plots, "diagnostics", design);
        let second_x =
            resolver.get_x_range(row, col, Some(columns), limit, &plots, "diagnostics", design);
        prop_assert_eq!(first_x, second_x);

        let first_y = resolver.get_y_range(row, col, Some(columns), limit, &plots, "");
        let second_y = resolver.get_y_range(row, col, Some(columns), limit, &plots, "");
        prop_assert_eq!(first_y, second_y);
    }
}

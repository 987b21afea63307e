use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::{Plot, PlotId};

/// Visible panels sharing a synchronized axis scale. Grids rarely show
/// more than a handful of panels per measurement.
pub type Cohort<'a> = SmallVec<[&'a Plot; 8]>;

/// Number of leading panels that count as visible.
fn visible_count(plots: &[Plot], visible_limit: Option<usize>) -> usize {
    visible_limit.map_or(plots.len(), |limit| limit.min(plots.len()))
}

/// Selects the visible panels that share `target`'s measurement.
///
/// Panels without trellis entries never join. When `target` has no
/// mandatory entry every visible trellised panel joins.
#[must_use]
pub fn select_cohort<'a>(
    target: &Plot,
    plots: &'a [Plot],
    visible_limit: Option<usize>,
) -> Cohort<'a> {
    let measurement = target.measurement();
    plots[..visible_count(plots, visible_limit)]
        .iter()
        .filter(|plot| plot.has_trellis())
        .filter(|plot| match measurement {
            None => true,
            Some(measurement) => plot.measurement() == Some(measurement),
        })
        .collect()
}

/// Groups visible trellised panels by measurement, in first-seen order.
///
/// Panels without a mandatory entry are grouped under `None`.
#[must_use]
pub fn group_by_measurement(
    plots: &[Plot],
    visible_limit: Option<usize>,
) -> IndexMap<Option<String>, Vec<PlotId>> {
    let mut groups: IndexMap<Option<String>, Vec<PlotId>> = IndexMap::new();
    for plot in plots[..visible_count(plots, visible_limit)]
        .iter()
        .filter(|plot| plot.has_trellis())
    {
        groups
            .entry(plot.measurement().map(str::to_owned))
            .or_default()
            .push(plot.id);
    }
    groups
}

//! Cross-subject ranking for one metric.

use std::collections::BTreeMap;

use crate::models::comparison::Polarity;

/// Rank subjects by value using standard competition ranking: tied
/// subjects share the lower rank number and the next distinct value
/// skips past them (two tied leaders rank 1 and 1, the next ranks 3).
///
/// Sort direction follows polarity: best-first means descending for
/// `Positive` and `Neutral` ("more is shown first" for raw counts) and
/// ascending for `Negative`. Subjects with no value receive no rank at
/// all rather than ranking last.
pub fn rank_subjects(
    values: &[(String, Option<f64>)],
    polarity: Polarity,
) -> BTreeMap<String, u32> {
    let mut present: Vec<(&str, f64)> = values
        .iter()
        .filter_map(|(id, value)| value.map(|v| (id.as_str(), v)))
        .collect();

    match polarity {
        Polarity::Negative => {
            present.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)))
        }
        Polarity::Positive | Polarity::Neutral => {
            present.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)))
        }
    }

    let mut ranks = BTreeMap::new();
    let mut previous: Option<(f64, u32)> = None;
    for (position, (id, value)) in present.iter().enumerate() {
        let rank = match previous {
            Some((prev_value, prev_rank)) if prev_value == *value => prev_rank,
            _ => position as u32 + 1,
        };
        previous = Some((*value, rank));
        ranks.insert((*id).to_string(), rank);
    }
    ranks
}

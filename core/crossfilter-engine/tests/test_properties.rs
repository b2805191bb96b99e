//! FILENAME: core/crossfilter-engine/tests/test_properties.rs
//! Behavioural properties of filtering, toggling, aggregation and KPIs,
//! checked exhaustively over a small fixture.

use crossfilter_engine::{
    aggregate, compute_kpis, filter_records, on_click, reset, toggled, FilterState, Selection,
};
use engine::{Dataset, DatasetBuilder, Dimension, Measure};

// ============================================================================
// FIXTURE
// ============================================================================

const SUBS: [&str; 3] = ["Chairs", "Phones", "Tables"];
const STATES: [&str; 2] = ["Texas", "Ohio"];
const CUSTOMERS: [&str; 2] = ["Ana", "Raj"];

/// The dimensions varied by the exhaustive checks.
const AXES: [Dimension; 3] = [Dimension::SubCategory, Dimension::State, Dimension::CustomerName];

fn fixture() -> Dataset {
    let mut builder = DatasetBuilder::new();
    let mut n = 0u32;
    for (i, sub) in SUBS.iter().enumerate() {
        for (j, state) in STATES.iter().enumerate() {
            for (k, customer) in CUSTOMERS.iter().enumerate() {
                // Skip a few combinations so groups have uneven sizes
                if (i + j + k) % 4 == 3 {
                    continue;
                }
                n += 1;
                let amount = 10.0 * (i + 1) as f64 + (j * 3 + k) as f64;
                let profit = if k == 0 { amount / 2.0 } else { -amount / 4.0 };
                builder.push_row(
                    &format!("O-{}", n / 2),
                    [*sub, "Cat", *state, "City", *customer, "UPI"],
                    [amount, profit, (n % 3 + 1) as f64],
                );
            }
        }
    }
    builder.finish()
}

fn choices(dimension: Dimension) -> Vec<Option<&'static str>> {
    let values: &[&'static str] = match dimension {
        Dimension::SubCategory => &SUBS,
        Dimension::State => &STATES,
        _ => &CUSTOMERS,
    };
    let mut out = vec![None, Some("Nowhere")];
    out.extend(values.iter().copied().map(Some));
    out
}

/// Every filter state over `AXES`, including unknown categories.
fn all_states() -> Vec<FilterState> {
    let mut states = vec![FilterState::new()];
    for dimension in AXES {
        let mut next = Vec::new();
        for state in &states {
            for choice in choices(dimension) {
                let mut s = state.clone();
                if let Some(value) = choice {
                    s.set(dimension, value);
                }
                next.push(s);
            }
        }
        states = next;
    }
    states
}

fn rows(selection: &Selection<'_>) -> Vec<*const engine::Record> {
    selection.iter().map(|r| r as *const _).collect()
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_self_exclusion_is_independent_of_own_selection() {
    let data = fixture();
    let states = all_states();
    assert_eq!(states.len(), 5 * 4 * 4);

    for state in &states {
        for dimension in AXES {
            let baseline = rows(&filter_records(&data, state, Some(dimension)));
            for choice in choices(dimension) {
                let mut varied = state.clone();
                match choice {
                    Some(value) => varied.set(dimension, value),
                    None => {
                        varied.unset(dimension);
                    }
                }
                let other = rows(&filter_records(&data, &varied, Some(dimension)));
                assert_eq!(baseline, other, "state {:?}, excluding {}", state, dimension);
            }
        }
    }
}

#[test]
fn test_toggle_involution_when_unset_or_same_value() {
    for state in all_states() {
        for dimension in AXES {
            for value in choices(dimension).into_iter().flatten() {
                let current = state.get(dimension);
                if current.is_some() && current != Some(value) {
                    continue;
                }
                let twice = toggled(&toggled(&state, dimension, value), dimension, value);
                assert_eq!(twice, state);
            }
        }
    }
}

#[test]
fn test_toggle_from_other_value_ends_unset_after_two_clicks() {
    let mut state: FilterState = [(Dimension::State, "Texas")].into_iter().collect();
    on_click(&mut state, Dimension::State, "Ohio");
    on_click(&mut state, Dimension::State, "Ohio");
    assert_eq!(state.get(Dimension::State), None);
}

#[test]
fn test_replace_semantics() {
    for state in all_states() {
        for dimension in AXES {
            let Some(current) = state.get(dimension) else { continue };
            for value in choices(dimension).into_iter().flatten() {
                if value == current {
                    continue;
                }
                let next = toggled(&state, dimension, value);
                assert_eq!(next.get(dimension), Some(value));
                assert_eq!(next.len(), state.len());
            }
        }
    }
}

#[test]
fn test_sum_conservation_without_limit() {
    let data = fixture();
    for state in all_states() {
        for dimension in AXES {
            let selection = filter_records(&data, &state, Some(dimension));
            for measure in Measure::ALL {
                let result = aggregate(&selection, dimension, measure, None);
                let expected = selection.sum(measure);
                assert!(
                    (result.total() - expected).abs() < 1e-9,
                    "{} by {}: {} != {}",
                    measure,
                    dimension,
                    result.total(),
                    expected
                );
            }
        }
    }
}

#[test]
fn test_results_are_ranked() {
    let data = fixture();
    for state in all_states() {
        for dimension in AXES {
            let selection = filter_records(&data, &state, Some(dimension));
            let result = aggregate(&selection, dimension, Measure::Profit, None);
            for pair in result.buckets.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                assert!(a.value > b.value || (a.value == b.value && a.category < b.category));
            }
        }
    }
}

#[test]
fn test_kpi_baseline() {
    let data = fixture();
    let kpis = compute_kpis(&data, &FilterState::new());

    assert_eq!(kpis.totals, data.global_totals());
    assert_eq!(kpis.record_count, data.len());
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_scenario_a_group_and_sum() {
    let mut builder = DatasetBuilder::new();
    for (cat, profit) in [("A", 100.0), ("A", 50.0), ("B", 30.0)] {
        builder.push_row("O-1", [cat, "c", "s", "c", "n", "p"], [0.0, profit, 0.0]);
    }
    let data = builder.finish();

    let result = aggregate(&Selection::all(&data), Dimension::SubCategory, Measure::Profit, None);
    assert_eq!(result.pairs(), vec![("A", 150.0), ("B", 30.0)]);
}

#[test]
fn test_scenario_b_click_selected_clears() {
    let mut state: FilterState = [(Dimension::State, "Texas")].into_iter().collect();
    on_click(&mut state, Dimension::State, "Texas");
    assert_eq!(state, FilterState::new());
}

#[test]
fn test_scenario_c_state_chart_keeps_all_states() {
    let data = fixture();
    let state: FilterState = [(Dimension::State, "Texas"), (Dimension::SubCategory, "Chairs")]
        .into_iter()
        .collect();

    let selection = filter_records(&data, &state, Some(Dimension::State));
    let mut states: Vec<&str> = selection
        .iter()
        .map(|r| data.category_label(r, Dimension::State))
        .collect();
    states.dedup();
    assert!(states.contains(&"Texas") && states.contains(&"Ohio"));
    assert!(selection
        .iter()
        .all(|r| data.category_label(r, Dimension::SubCategory) == "Chairs"));
}

#[test]
fn test_scenario_d_empty_selection_zero_kpis() {
    let data = fixture();
    let state: FilterState = [(Dimension::State, "Texas"), (Dimension::State, "Nowhere")]
        .into_iter()
        .collect();
    let kpis = compute_kpis(&data, &state);

    assert_eq!(kpis.total_amount(), 0.0);
    assert_eq!(kpis.total_profit(), 0.0);
    assert_eq!(kpis.total_quantity(), 0.0);
    assert_eq!(kpis.distinct_orders(), 0);
}

#[test]
fn test_scenario_e_reset_clears_everything() {
    let mut state: FilterState = [(Dimension::Category, "x"), (Dimension::City, "y")]
        .into_iter()
        .collect();
    reset(&mut state);
    assert_eq!(state, FilterState::new());
}

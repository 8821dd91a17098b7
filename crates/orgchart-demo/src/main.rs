#![forbid(unsafe_code)]

//! Terminal walkthrough of the org chart core.
//!
//! Loads a department from the embedded dataset, then drives the chart the
//! way a UI would: expand, search-and-reveal, zoom, fit-to-view, pan. Node
//! "layout" is a synthetic grid standing in for the real renderer's
//! measurements.
//!
//! Usage: `orgchart-demo [department] [search query]`

mod dataset;

use orgchart::prelude::*;
use orgchart::VisibleRow;
use std::collections::HashMap;
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let department = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Engineering".to_string());
    let query = std::env::args().nth(2).unwrap_or_else(|| "jane".to_string());

    let mut departments = dataset::load_departments(dataset::EMPLOYEES_JSON)?;
    let Some(records) = departments.remove(&department) else {
        eprintln!(
            "unknown department {department:?}; available: {:?}",
            departments.keys().collect::<Vec<_>>()
        );
        process::exit(2);
    };

    let forest = build_hierarchy(records);
    let mut state = ChartState::new();

    println!("== {department}: {} employees, {} roots ==", forest.len(), forest.roots().len());
    print_chart(&forest, &state);

    println!("\n-- expand all --");
    expand_all(&forest, &mut state);
    print_chart(&forest, &state);

    println!("\n-- dataset reset, search {query:?} --");
    state.apply(&forest, Intent::DatasetChanged, no_measure);
    match state.apply(&forest, Intent::Search(query.clone()), no_measure) {
        Reaction::SearchMatch(idx) => {
            println!("match: {}", forest.node(idx).legal_name());
        }
        Reaction::SearchMiss => println!("no match for {query:?}"),
        _ => {}
    }
    print_chart(&forest, &state);

    println!("\n-- zoom in twice, then fit to view --");
    state.apply(&forest, Intent::Zoom(0.25), no_measure);
    state.apply(&forest, Intent::Zoom(0.25), no_measure);
    println!("zoom: {:.2}", state.viewport().zoom());

    let container = Bounds::from_size(1280.0, 800.0);
    let layout = grid_layout(&visible_rows(&forest, &state));
    let reaction = state.apply(&forest, Intent::FitToView(container), |idx| {
        layout.get(&idx).copied()
    });
    println!(
        "fit: {reaction:?}, zoom {:.2}, scroll ({:.0}, {:.0})",
        state.viewport().zoom(),
        state.viewport().scroll().x,
        state.viewport().scroll().y
    );

    println!("\n-- pan gesture --");
    state.apply(&forest, Intent::PanStart(Point::new(400.0, 300.0)), no_measure);
    state.apply(&forest, Intent::PanMove(Point::new(340.0, 280.0)), no_measure);
    state.apply(&forest, Intent::PanEnd, no_measure);
    println!(
        "scroll after pan: ({:.0}, {:.0})",
        state.viewport().scroll().x,
        state.viewport().scroll().y
    );

    Ok(())
}

fn no_measure(_: NodeIdx) -> Option<Bounds> {
    None
}

/// Expand every node that has reports, in pre-order.
fn expand_all(forest: &Forest, state: &mut ChartState) {
    let targets: Vec<EmployeeId> = forest
        .iter_preorder()
        .filter(|&idx| !forest.node(idx).is_leaf())
        .map(|idx| forest.node(idx).id().clone())
        .collect();
    for id in targets {
        state.apply(forest, Intent::ToggleNode(id), no_measure);
    }
}

/// Stand-in for renderer measurement: one card per row on a depth/row grid.
fn grid_layout(rows: &[VisibleRow]) -> HashMap<NodeIdx, Bounds> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let bounds = Bounds::new(row.depth as f64 * 220.0, i as f64 * 90.0, 200.0, 64.0);
            (row.idx, bounds)
        })
        .collect()
}

fn print_chart(forest: &Forest, state: &ChartState) {
    let rows = visible_rows(forest, state);
    if rows.is_empty() {
        println!("(no data available)");
        return;
    }
    for row in rows {
        let node = forest.node(row.idx);
        let marker = if row.child_count == 0 {
            ' '
        } else if row.expanded {
            '-'
        } else {
            '+'
        };
        let title = node
            .record()
            .attributes
            .get("Job Title")
            .and_then(|v| v.as_str())
            .unwrap_or("");
        let hit = if row.search_match { "  <- match" } else { "" };
        println!(
            "{:indent$}{marker} {name} ({title}) [{count}]{hit}",
            "",
            indent = row.depth * 4,
            name = node.legal_name(),
            count = row.child_count,
        );
    }
}

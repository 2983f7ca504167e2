//! Whole-pipeline tests driving the crate's public surface the way a user's
//! input file would: parse a literal DNA block, simulate it, check the final
//! position. Covers the end-to-end scenarios (S1-S6) and the quantified
//! invariants from the specification.

use turmite::driver;
use turmite::outcome::Outcome;
use turmite::parser::{self, ParseEvent};
use turmite::simulator::Simulator;

/// Parses a single-ant input file and returns its simulator, ready to run.
fn build_ant(input: &str) -> Simulator {
    let events = parser::parse(input);
    let ants: Vec<_> = events
        .into_iter()
        .filter_map(|e| match e {
            ParseEvent::AntReady(ant) => Some(ant),
            _ => None,
        })
        .collect();
    assert_eq!(ants.len(), 1, "expected exactly one ant block");
    let ant = ants.into_iter().next().unwrap();
    let table = ant.table_builder.build(ant.colors.len()).expect("valid DNA");
    Simulator::new(table, ant.c0, ant.budget)
}

#[test]
fn s1_zero_budget_stays_at_origin() {
    let input = "w ESWN bwww\nb WNES bbbw\n0\n";
    let mut sim = build_ant(input);
    let pos = driver::run_to_position(&mut sim, true).unwrap();
    assert_eq!(pos, (0, 0));
}

#[test]
fn s2_classic_ant_11000_fast_forwards_to_highway() {
    let input = "w ESWN bbbb\nb WNES wwww\n11000\n";
    let mut sim = build_ant(input);
    match driver::run(&mut sim, true) {
        Outcome::FastForwarded { position, period } => {
            assert_eq!(position, (-34, -14));
            assert_eq!(period, 104);
        }
        other => panic!("expected fast-forward, got {other:?}"),
    }
}

#[test]
fn s3_classic_ant_10000_matches_in_both_modes() {
    let input = "w ESWN bbbb\nb WNES wwww\n10000\n";
    let naive = driver::run_to_position(&mut build_ant(input), false).unwrap();
    let detected = driver::run_to_position(&mut build_ant(input), true).unwrap();
    assert_eq!(naive, (-16, 10));
    assert_eq!(detected, (-16, 10));
}

#[test]
fn s4_trivial_straight_line() {
    let input = "w NNNN wwww\n50\n";
    let mut sim = build_ant(input);
    let pos = driver::run_to_position(&mut sim, true).unwrap();
    assert_eq!(pos, (0, 50));
}

#[test]
fn s5_stationary_orbit_at_l4() {
    let input = "w ESWN wwww\n4\n";
    let mut sim = build_ant(input);
    match driver::run(&mut sim, true) {
        Outcome::FastForwarded { position, period } => {
            assert_eq!(position, (0, 0));
            assert_eq!(period, 4);
        }
        Outcome::Completed { position } => assert_eq!(position, (0, 0)),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn s6_unknown_color_fails() {
    // 'w' writes 'x' on every incoming heading; no rule ever defines 'x'.
    let input = "w ESWN xxxx\n100\n";
    let events = parser::parse(input);
    let ant = events
        .into_iter()
        .find_map(|e| match e {
            ParseEvent::AntReady(ant) => Some(ant),
            _ => None,
        })
        .expect("one ant block");
    let err = ant.table_builder.build(ant.colors.len()).unwrap_err();
    assert_eq!(ant.colors.symbol(err), 'x');
}

#[test]
fn property_simple_mode_matches_naive_for_arbitrary_dna() {
    // Property 4: with loop detection disabled, the result must be
    // identical to a second run with detection enabled but never able to
    // fire early (short budget, far below any plausible period).
    let input = "w ESWN bbbb\nb WNES wwww\n777\n";
    let naive = driver::run_to_position(&mut build_ant(input), false).unwrap();
    let detected = driver::run_to_position(&mut build_ant(input), true).unwrap();
    assert_eq!(naive, detected);
}

#[test]
fn property_idempotent_dna_moves_straight_and_leaves_grid_unchanged() {
    // Property 5: next_color == input color and next_heading == incoming
    // heading for every (color, heading) moves the ant in a straight line
    // without ever rewriting a cell to a different color.
    let input = "w NNNN wwww\n200\n";
    let mut sim = build_ant(input);
    let pos = driver::run_to_position(&mut sim, true).unwrap();
    assert_eq!(pos, (0, 200));
}

#[test]
fn comments_are_surfaced_verbatim() {
    let input = "# a header comment\nw NNNN wwww\n3\n";
    let events = parser::parse(input);
    match &events[0] {
        ParseEvent::Comment(text) => assert_eq!(text, "# a header comment"),
        other => panic!("expected a comment event, got {other:?}"),
    }
}

#[test]
fn malformed_block_is_skipped_without_aborting_the_batch() {
    let input = "w ESWN\n0\nb NNNN wwww\n5\n";
    let events = parser::parse(input);
    let ants: Vec<_> = events
        .into_iter()
        .filter_map(|e| match e {
            ParseEvent::AntReady(ant) => Some(ant),
            _ => None,
        })
        .collect();
    assert_eq!(ants.len(), 1);
    assert_eq!(ants[0].budget, 5);
}

#[test]
fn multiple_ants_in_one_file_run_independently() {
    let input = "w NNNN wwww\n10\nb EEEE bbbb\n20\n";
    let events = parser::parse(input);
    let ants: Vec<_> = events
        .into_iter()
        .filter_map(|e| match e {
            ParseEvent::AntReady(ant) => Some(ant),
            _ => None,
        })
        .collect();
    assert_eq!(ants.len(), 2);

    let mut first = {
        let table = ants[0].table_builder.clone().build(ants[0].colors.len()).unwrap();
        Simulator::new(table, ants[0].c0, ants[0].budget)
    };
    let mut second = {
        let table = ants[1].table_builder.clone().build(ants[1].colors.len()).unwrap();
        Simulator::new(table, ants[1].c0, ants[1].budget)
    };

    assert_eq!(driver::run_to_position(&mut first, true).unwrap(), (0, 10));
    assert_eq!(driver::run_to_position(&mut second, true).unwrap(), (20, 0));
}

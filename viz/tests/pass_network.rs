use pretty_assertions::assert_eq;
use tracing_test::traced_test;
use viz::{pass_network, Trace};

fn node(id: &str, name: &str, shirt: Option<&str>, x: f64, y: f64) -> common::PlayerNode {
    common::PlayerNode {
        player_id: id.to_owned(),
        name: name.to_owned(),
        shirt_no: shirt.map(|s| s.to_owned()),
        x,
        y,
    }
}

fn link(source: &str, target: &str, count: u32) -> common::PassLink {
    common::PassLink {
        source: source.to_owned(),
        target: target.to_owned(),
        count,
    }
}

#[test]
fn two_players_one_link() {
    let nodes = vec![
        node("A", "Alisson", Some("1"), 10.0, 10.0),
        node("B", "Becker", Some("9"), 90.0, 90.0),
    ];
    let links = vec![link("A", "B", 4)];

    let traces = pass_network::build(&nodes, &links);

    assert_eq!(3, traces.len());

    let line = match &traces[0] {
        Trace::Line(l) => l,
        other => panic!("expected the link first, got {:?}", other),
    };
    assert_eq!((10.0, 10.0), line.from);
    assert_eq!((90.0, 90.0), line.to);
    assert_eq!(2.0, line.width);
    assert_eq!(Some("4 passes".to_owned()), line.hover);

    // markers follow the lines so they draw on top
    for trace in &traces[1..] {
        assert!(matches!(trace, Trace::Markers(_)), "got {:?}", trace);
    }

    let first_marker = match &traces[1] {
        Trace::Markers(m) => m,
        _ => unreachable!(),
    };
    assert_eq!(1, first_marker.points.len());
    assert_eq!(Some("1".to_owned()), first_marker.points[0].label);
    assert_eq!(Some("Alisson".to_owned()), first_marker.points[0].hover);
}

#[test]
fn unresolved_link_is_dropped() {
    let nodes = vec![
        node("A", "Alisson", Some("1"), 10.0, 10.0),
        node("B", "Becker", Some("9"), 90.0, 90.0),
    ];
    let links = vec![link("A", "B", 4), link("C", "B", 7), link("A", "D", 2)];

    let traces = pass_network::build(&nodes, &links);

    // only the A->B link survives, node count unchanged
    let lines = traces
        .iter()
        .filter(|t| matches!(t, Trace::Line(_)))
        .count();
    assert_eq!(1, lines);
    assert_eq!(3, traces.len());
}

#[test]
fn width_is_clamped_at_both_ends() {
    let nodes = vec![
        node("A", "Alisson", None, 10.0, 10.0),
        node("B", "Becker", None, 90.0, 90.0),
    ];

    let widths: Vec<f64> = [1, 2, 16, 40]
        .into_iter()
        .map(|count| {
            let traces = pass_network::build(&nodes, &[link("A", "B", count)]);
            match &traces[0] {
                Trace::Line(l) => l.width,
                other => panic!("expected a line, got {:?}", other),
            }
        })
        .collect();

    assert_eq!(vec![1.0, 1.0, 8.0, 8.0], widths);
}

#[test]
#[traced_test]
fn zero_count_link_is_rejected() {
    let nodes = vec![
        node("A", "Alisson", None, 10.0, 10.0),
        node("B", "Becker", None, 90.0, 90.0),
    ];

    let traces = pass_network::build(&nodes, &[link("A", "B", 0)]);

    let lines = traces
        .iter()
        .filter(|t| matches!(t, Trace::Line(_)))
        .count();
    assert_eq!(0, lines);
    assert!(logs_contain("zero pass count"));
}

#[test]
fn nodes_without_links_still_get_markers() {
    let nodes = vec![
        node("A", "Alisson", Some("1"), 10.0, 10.0),
        node("B", "Becker", Some("9"), 90.0, 90.0),
        node("C", "Carvalho", Some("28"), 50.0, 50.0),
    ];

    let traces = pass_network::build(&nodes, &[]);

    assert_eq!(3, traces.len());
    assert!(traces.iter().all(|t| matches!(t, Trace::Markers(_))));
}

use pretty_assertions::assert_eq;
use viz::{layout, Trace, VizData, VizKind};

#[test]
fn pitch_layout_shape() {
    let layout = layout::pitch(None);

    assert_eq!((0.0, 100.0), layout.x_range);
    assert_eq!((0.0, 100.0), layout.y_range);
    assert_eq!(1.0, layout.scale_ratio);
    assert!(!layout.axes_visible);
    assert_eq!(None, layout.title);
}

#[test]
fn pitch_layout_title_override() {
    let layout = layout::pitch(Some("Shots & Goals – Inter".to_owned()));

    assert_eq!(Some("Shots & Goals – Inter".to_owned()), layout.title);
}

#[test]
fn kind_round_trips_with_the_form_values() {
    for raw in ["pass-network", "box-passes", "shots"] {
        let kind: VizKind = raw.parse().unwrap();
        assert_eq!(raw, kind.api_path());
    }

    assert!("heatmap".parse::<VizKind>().is_err());
}

#[test]
fn render_dispatches_and_titles() {
    let data = VizData::BoxPasses(common::BoxPasses {
        passes: vec![common::BoxPass {
            x: 50.0,
            y: 30.0,
            end_x: 88.0,
            end_y: 52.0,
        }],
    });

    let payload = viz::render(&data, "Bayern Munich");

    assert_eq!(
        Some("Successful Box Passes – Bayern Munich".to_owned()),
        payload.layout.title
    );
    assert_eq!(1, payload.traces.len());
    assert!(matches!(payload.traces[0], Trace::Line(_)));
}

#[test]
fn render_pass_network_end_to_end() {
    let data = VizData::PassNetwork(common::PassNetwork {
        nodes: vec![
            common::PlayerNode {
                player_id: "A".to_owned(),
                name: "Alisson".to_owned(),
                shirt_no: Some("1".to_owned()),
                x: 10.0,
                y: 10.0,
            },
            common::PlayerNode {
                player_id: "B".to_owned(),
                name: "Becker".to_owned(),
                shirt_no: Some("9".to_owned()),
                x: 90.0,
                y: 90.0,
            },
        ],
        links: vec![
            common::PassLink {
                source: "A".to_owned(),
                target: "B".to_owned(),
                count: 4,
            },
            // dangling reference, must not contribute a trace
            common::PassLink {
                source: "C".to_owned(),
                target: "B".to_owned(),
                count: 9,
            },
        ],
    });

    let payload = viz::render(&data, "Liverpool");

    assert_eq!(Some("Pass Network – Liverpool".to_owned()), payload.layout.title);
    assert_eq!(3, payload.traces.len());
    match &payload.traces[0] {
        Trace::Line(line) => assert_eq!(2.0, line.width),
        other => panic!("expected the line first, got {:?}", other),
    }
}

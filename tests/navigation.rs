use std::cell::RefCell;
use std::rc::Rc;

use showcase::*;

const FRAME: f32 = 1.0 / 60.0;

fn entity(id: &str, position: Vec3, look_at: Vec3, clip: Option<f32>) -> EntityConfig {
    let mut model = ModelSpec::new(format!("models/{id}.glb"), look_at);
    model.idle_clip = clip;
    EntityConfig {
        id: id.into(),
        name: id.to_uppercase(),
        framing: Framing::new(position, look_at),
        model: Some(model),
        companion: None,
    }
}

fn abc() -> ShowcaseConfig {
    ShowcaseConfig {
        entities: vec![
            entity("a", Vec3::new(0.0, 0.6, 0.0), Vec3::new(0.0, 0.2, 1.0), Some(2.0)),
            entity("b", Vec3::new(10.0, 0.6, 0.0), Vec3::new(10.0, 0.2, 1.0), Some(2.0)),
            entity("c", Vec3::new(3.0, 2.0, -7.0), Vec3::new(3.5, 0.2, -6.0), None),
        ],
        nav_order: vec!["a".into(), "b".into(), "c".into()],
        ..ShowcaseConfig::default()
    }
}

fn land(showcase: &mut Showcase) {
    let mut frames = 0;
    while showcase.is_transitioning() {
        showcase.step(FRAME);
        frames += 1;
        assert!(frames < 10_000, "flight never landed");
    }
}

#[test]
fn next_flies_to_b_and_lands_exactly() {
    let config = abc();
    let mut showcase = Showcase::new(&config).unwrap();
    assert_eq!(showcase.focused_id().as_str(), "a");

    assert!(showcase.navigate_next(None));
    assert_eq!(showcase.focused_id().as_str(), "b");
    assert!(showcase.is_transitioning());

    land(&mut showcase);

    let pose = showcase.stage().pose();
    assert_eq!(pose.position, config.entities[1].framing.position);
    assert_eq!(pose.look_at, config.entities[1].framing.look_at);
    assert_eq!(showcase.stage().camera().look_at, pose.look_at);
}

#[test]
fn previous_during_a_flight_is_dropped() {
    let mut showcase = Showcase::new(&abc()).unwrap();

    assert!(showcase.navigate_next(None));
    let flight = showcase.navigator().flight().cloned();

    assert!(!showcase.navigate_previous(None));
    assert_eq!(showcase.focused_id().as_str(), "b");
    assert_eq!(showcase.navigator().flight().cloned(), flight);

    land(&mut showcase);
    assert_eq!(showcase.focused_id().as_str(), "b");
}

#[test]
fn focus_while_flying_changes_nothing() {
    let mut showcase = Showcase::new(&abc()).unwrap();
    showcase.navigate_next(None);
    for _ in 0..20 {
        showcase.step(FRAME);
    }

    let pose = showcase.stage().pose();
    let progress = showcase.navigator().flight().map(|f| f.progress());

    assert!(!showcase.focus_entity(&"c".into(), None));

    assert_eq!(showcase.focused_id().as_str(), "b");
    assert_eq!(showcase.stage().pose(), pose);
    assert_eq!(showcase.navigator().flight().map(|f| f.progress()), progress);
}

#[test]
fn unknown_focus_is_ignored() {
    let mut showcase = Showcase::new(&abc()).unwrap();
    let pose = showcase.stage().pose();

    assert!(!showcase.focus_entity(&"zed".into(), None));

    assert!(!showcase.is_transitioning());
    assert_eq!(showcase.focused_id().as_str(), "a");
    assert_eq!(showcase.stage().pose(), pose);
}

#[test]
fn next_then_previous_returns_to_start() {
    for start in ["a", "b", "c"] {
        let config = ShowcaseConfig {
            start: Some(start.into()),
            ..abc()
        };
        let mut showcase = Showcase::new(&config).unwrap();

        showcase.navigate_next(None);
        land(&mut showcase);
        showcase.navigate_previous(None);
        land(&mut showcase);

        assert_eq!(showcase.focused_id().as_str(), start);
    }
}

#[test]
fn full_lap_returns_to_start() {
    let config = abc();
    let mut showcase = Showcase::new(&config).unwrap();
    let mut visited = Vec::new();

    for _ in 0..config.nav_order.len() {
        showcase.navigate_next(None);
        visited.push(showcase.focused_id().clone());
        land(&mut showcase);
    }

    assert_eq!(showcase.focused_id().as_str(), "a");
    assert_eq!(visited, vec![EntityId::from("b"), "c".into(), "a".into()]);
}

#[test]
fn completion_sees_settled_state() {
    let mut showcase = Showcase::new(&abc()).unwrap();
    let landed = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&landed);
    showcase.navigate_previous(Some(Box::new(move || log.borrow_mut().push("c"))));
    land(&mut showcase);

    assert_eq!(*landed.borrow(), vec!["c"]);
    assert!(!showcase.is_transitioning());

    // Navigation is accepted again right after landing.
    assert!(showcase.navigate_previous(None));
    assert_eq!(showcase.focused_id().as_str(), "b");
}

#[test]
fn camera_arcs_over_the_ground_between_entities() {
    let mut showcase = Showcase::new(&abc()).unwrap();
    showcase.navigate_next(None);

    let mut peak = f32::MIN;
    while showcase.is_transitioning() {
        showcase.step(FRAME);
        let y = showcase.stage().pose().position.y;
        assert!(y >= 0.6 - 1e-5);
        peak = peak.max(y);
    }

    let expected = arc_height(Vec3::new(0.0, 0.6, 0.0), Vec3::new(10.0, 0.6, 0.0));
    assert!((peak - expected).abs() < 0.01);
}

#[test]
fn entity_without_clips_advances_nothing_when_idle() {
    let config = ShowcaseConfig {
        start: Some("c".into()),
        ..abc()
    };
    let mut showcase = Showcase::new(&config).unwrap();

    let focused = showcase.focused_id().clone();
    let transitioning = showcase.is_transitioning();
    assert!(!showcase.registry_mut().advance(FRAME, &focused, transitioning));

    // During a flight away from it, everyone else's clips play.
    showcase.navigate_next(None);
    let focused = showcase.focused_id().clone();
    assert!(showcase.registry_mut().advance(FRAME, &focused, true));
}

#[test]
fn on_demand_policy_stops_redrawing_when_still() {
    let config = ShowcaseConfig {
        start: Some("c".into()),
        redraw: RedrawPolicy::OnDemand,
        ..abc()
    };
    let mut showcase = Showcase::new(&config).unwrap();

    assert!(showcase.step(FRAME));
    assert!(!showcase.step(FRAME));

    showcase.navigate_previous(None);
    assert!(showcase.step(FRAME));
}

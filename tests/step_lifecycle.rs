use raylib::prelude::*;

use scrollshow::constants::*;
use scrollshow::deck::Deck;
use scrollshow::dispatcher::StepDispatcher;
use scrollshow::surface::Surface;

const DECK_JSON: &str = r#"{
    "title": "lifecycle",
    "slides": [
        {"step": 0, "type": "hero", "title": "Start"},
        {"step": 1, "type": "list", "items": ["one", "two"]},
        {"step": 2, "type": "icon-cloud", "icons": ["a", "b", "c"], "count": 16},
        {"step": 3, "type": "quote-bubbles", "quotes": [
            {"author": "ada", "text": "a message that wraps across a couple of bubble lines"}
        ]},
        {"step": 4, "type": "kpi-cards", "cards": [
            {"label": "Users", "value": 12500, "prefix": "", "unit": "+"},
            {"label": "Uptime", "value": 99, "unit": "%", "emphasis": true}
        ]},
        {"step": 5, "type": "line-chart", "label": "growth",
         "historical": [{"year": 2000, "value": 5}, {"year": 2010, "value": 40}],
         "projection": [{"year": 2010, "value": 40}, {"year": 2030, "value": 900}],
         "y_cap": 100}
    ]
}"#;

fn deck() -> Deck {
    let deck: Deck = serde_json::from_str(DECK_JSON).unwrap();
    deck
}

fn surface() -> Surface {
    Surface::new(Rectangle::new(500.0, 30.0, 700.0, 650.0))
}

fn advance(dispatcher: &mut StepDispatcher, deck: &Deck, surface: &Surface, seconds: f32) {
    let dt = 1.0 / 60.0;
    let mut elapsed = 0.0;
    while elapsed < seconds {
        dispatcher.update(dt, deck, surface);
        elapsed += dt;
    }
}

#[test]
fn walks_the_whole_deck_forward_and_backward() {
    let deck = deck();
    let surface = surface();
    let mut dispatcher = StepDispatcher::new();

    for step in (0..deck.len()).chain((0..deck.len()).rev()) {
        dispatcher.request_step(step);
        advance(&mut dispatcher, &deck, &surface, 1.0);
        assert_eq!(dispatcher.current_step(), Some(step));
        assert_eq!(dispatcher.foreign_handle_count(), 0);
        assert!(!dispatcher.is_busy());
    }
}

#[test]
fn icon_cloud_teardown_into_kpi_step() {
    let deck = deck();
    let surface = surface();
    let mut dispatcher = StepDispatcher::new();

    dispatcher.request_step(2);
    advance(&mut dispatcher, &deck, &surface, 1.0);
    assert_eq!(dispatcher.active_renderer(), Some("icon-cloud"));

    dispatcher.request_step(4);
    advance(&mut dispatcher, &deck, &surface, 1.0);
    assert_eq!(dispatcher.current_step(), Some(4));
    assert_eq!(dispatcher.active_renderer(), Some("kpi-cards"));
    // nothing of step 2 survives: handles are clean even many intervals later
    advance(&mut dispatcher, &deck, &surface, CLOUD_PERTURB_INTERVAL * 3.0);
    assert_eq!(dispatcher.foreign_handle_count(), 0);
}

#[test]
fn rapid_scroll_burst_settles_on_the_last_step() {
    let deck = deck();
    let surface = surface();
    let mut dispatcher = StepDispatcher::new();

    for step in [1, 2, 3, 4, 5] {
        dispatcher.request_step(step);
        dispatcher.update(0.005, &deck, &surface);
    }
    advance(&mut dispatcher, &deck, &surface, 1.0);
    assert_eq!(dispatcher.current_step(), Some(5));
    assert_eq!(dispatcher.transition_count(), 1);
}

#[test]
fn out_of_range_step_is_survivable() {
    let deck = deck();
    let surface = surface();
    let mut dispatcher = StepDispatcher::new();

    dispatcher.request_step(3);
    advance(&mut dispatcher, &deck, &surface, 1.0);
    dispatcher.request_step(42);
    advance(&mut dispatcher, &deck, &surface, 1.0);
    assert_eq!(dispatcher.current_step(), Some(3));
    assert!(!dispatcher.is_busy());

    // the dispatcher keeps working afterwards
    dispatcher.request_step(5);
    advance(&mut dispatcher, &deck, &surface, 1.0);
    assert_eq!(dispatcher.active_renderer(), Some("line-chart"));
}

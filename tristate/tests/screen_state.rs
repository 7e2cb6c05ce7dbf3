//! End-to-end usage: a presentation layer loads independent pieces of data,
//! aggregates them and decides what to show with a single `fold`.

use tristate::prelude::*;

#[derive(Debug, PartialEq)]
enum Screen {
    Loading,
    Failed(String),
    Ready(Vec<String>),
}

fn render(state: TriState<Vec<String>>) -> Screen {
    state.fold(Screen::Ready, Screen::Failed, || Screen::Loading)
}

async fn fetch_section(name: &'static str) -> Result<String, anyhow::Error> {
    tokio::task::yield_now().await;
    match name {
        "offline" => Err(anyhow::anyhow!("{} is offline", name)),
        _ => Ok(name.to_uppercase()),
    }
}

#[tokio::test]
async fn test_screen_ready_when_all_sections_load() {
    let (header, body) = tokio::join!(
        suspend_effect(fetch_section("header")),
        suspend_effect(fetch_section("body")),
    );

    let screen = render(vec![header, body].parallel_sequence());
    assert_eq!(
        screen,
        Screen::Ready(vec!["HEADER".to_string(), "BODY".to_string()])
    );
}

#[tokio::test]
async fn test_screen_lists_every_failure() {
    let sections = vec![
        suspend_effect(fetch_section("offline")).await,
        suspend_effect(fetch_section("body")).await,
        TriState::error("footer timed out"),
    ];

    assert_eq!(
        render(sections.parallel_sequence()),
        Screen::Failed("offline is offline; footer timed out".to_string())
    );
}

#[tokio::test]
async fn test_screen_waits_for_pending_sections() {
    let sections = vec![
        suspend_effect(fetch_section("header")).await,
        TriState::idle(),
    ];
    assert_eq!(render(sections.parallel_sequence()), Screen::Loading);
}

#[tokio::test]
async fn test_spawned_section_can_be_recovered() {
    let handle = tokio::spawn(fetch_section("offline"));
    let section = join_effect(handle)
        .await
        .expect("task was not aborted")
        .recover(|message| format!("placeholder ({message})"));

    assert_eq!(
        section,
        TriState::content("placeholder (offline is offline)".to_string())
    );
}

#[test]
fn test_state_round_trips_through_json() {
    let state = TriState::content(vec![1, 2]).zip(TriState::content("ok"));
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, r#"{"content":[[1,2],"ok"]}"#);

    let back: TriState<(Vec<i32>, String)> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.map(|(v, s)| (v.len(), s)), TriState::content((2, "ok".to_string())));
}

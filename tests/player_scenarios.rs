use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use video_library::loader::parse_catalog;
use video_library::model::{Catalog, Playlist, Video};
use video_library::player::{PlaybackState, SearchKind};
use video_library::{Event, PlayerError, VideoPlayer};

/// Two cat videos and one video that starts out flagged
fn create_test_player() -> VideoPlayer {
    let catalog: Catalog = [
        Video::new("v1", "Amazing Cat Video", vec!["cat".to_string()]),
        Video::new("v2", "Another Cat Video", vec!["cat".to_string()]),
        Video::new("v3", "Cat Scandal", vec!["cat".to_string()]),
    ]
    .into_iter()
    .collect();

    let mut player = VideoPlayer::new(catalog);
    player.flag_with_reason("v3", "inappropriate").unwrap();
    player
}

fn title(event: &Event) -> &str {
    match event {
        Event::Stopped { title, .. }
        | Event::Playing { title, .. }
        | Event::Flagged { title, .. } => title,
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_search_by_tag_then_select_second() {
    let mut player = create_test_player();

    let results = player.search_by_tag("cat").unwrap();
    assert_eq!(results.kind, SearchKind::Tag);
    assert_eq!(results.video_ids(), ["v1", "v2"]);

    let events = player.select_from_results(&results, "2").unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(title(&events[0]), "Another Cat Video");
    assert_eq!(player.playback(), &PlaybackState::Playing("v2".to_string()));
}

#[test]
fn test_switching_videos_emits_stop_then_play() {
    let mut player = create_test_player();
    player.play("v1").unwrap();

    let events = player.play("v2").unwrap();
    assert!(matches!(events[0], Event::Stopped { ref id, .. } if id == "v1"));
    assert!(matches!(events[1], Event::Playing { ref id, .. } if id == "v2"));
    assert_eq!(player.playback(), &PlaybackState::Playing("v2".to_string()));
}

#[test]
fn test_flagging_playing_video_with_empty_reason() {
    let mut player = create_test_player();
    player.play("v1").unwrap();

    let events = player.flag_with_reason("v1", "").unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], Event::Stopped { .. }));
    assert!(matches!(
        events[1],
        Event::Flagged { ref reason, .. } if reason == "Not supplied"
    ));
    assert!(player.current().is_none());
}

#[test]
fn test_remove_unknown_video_from_non_empty_playlist() {
    let mut player = create_test_player();
    player.create_playlist("P").unwrap();
    player.add_to_playlist("P", "v1").unwrap();

    assert_eq!(
        player.remove_from_playlist("P", "missing-id").unwrap_err(),
        PlayerError::VideoNotFound {
            id: "missing-id".to_string()
        }
    );
}

#[test]
fn test_flagged_video_is_hidden_and_unusable() {
    let mut player = create_test_player();

    assert!(player.available_videos().iter().all(|v| v.id != "v3"));
    assert!(!player
        .search_by_title("scandal")
        .map(|r| r.video_ids().contains(&"v3".to_string()))
        .unwrap_or(false));
    assert!(player
        .search_by_tag("cat")
        .unwrap()
        .video_ids()
        .iter()
        .all(|id| id != "v3"));

    assert!(matches!(
        player.play("v3"),
        Err(PlayerError::VideoFlagged { .. })
    ));

    player.create_playlist("P").unwrap();
    assert!(matches!(
        player.add_to_playlist("p", "v3"),
        Err(PlayerError::VideoFlagged { .. })
    ));
}

const VIDEO_IDS: [&str; 4] = ["v1", "v2", "v3", "ghost"];
const PLAYLIST_NAMES: [&str; 3] = ["Mix", "MIX", "chill"];

/// Everything an operation may touch
#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    playback: PlaybackState,
    playlists: Vec<Playlist>,
    flags: Vec<(String, Option<String>)>,
}

fn snapshot(player: &VideoPlayer) -> Snapshot {
    let mut flags: Vec<(String, Option<String>)> = player
        .catalog()
        .videos()
        .map(|v| (v.id.clone(), v.flag_reason().map(str::to_string)))
        .collect();
    flags.sort();

    Snapshot {
        playback: player.playback().clone(),
        playlists: player.playlists().list_all().into_iter().cloned().collect(),
        flags,
    }
}

fn apply(
    player: &mut VideoPlayer,
    rng: &mut StdRng,
    op: u8,
    video: usize,
    playlist: usize,
) -> Result<Vec<Event>, PlayerError> {
    let id = VIDEO_IDS[video];
    let name = PLAYLIST_NAMES[playlist];
    match op {
        0 => player.play(id),
        1 => player.stop(),
        2 => player.pause(),
        3 => player.resume(),
        4 => player.flag_with_reason(id, if playlist == 0 { "" } else { "spam" }),
        5 => player.unflag(id),
        6 => player.add_to_playlist(name, id),
        7 => player.remove_from_playlist(name, id),
        8 => player.clear_playlist(name),
        9 => player.create_playlist(name),
        _ => player.play_random_with(rng),
    }
}

proptest! {
    #[test]
    fn test_invariants_hold_after_random_ops(
        seed in any::<u64>(),
        ops in proptest::collection::vec((0u8..11, 0usize..4, 0usize..3), 1..150),
    ) {
        let mut player = create_test_player();
        let mut rng = StdRng::seed_from_u64(seed);

        for (op, video, playlist) in ops {
            let before = snapshot(&player);
            let outcome = apply(&mut player, &mut rng, op, video, playlist);

            // Failures change nothing
            if outcome.is_err() {
                prop_assert_eq!(&snapshot(&player), &before);
            }

            // The active video always exists and is never flagged
            if player.playback().active_id().is_some() {
                let now = player.current();
                prop_assert!(now.is_some());
                prop_assert!(!now.unwrap().video.is_flagged());
            }

            for list in player.playlists().list_all() {
                let unique: HashSet<&String> = list.video_ids().iter().collect();
                prop_assert_eq!(unique.len(), list.len());
            }
        }
    }
}

#[test]
fn test_playlists_listed_ignoring_case() {
    let mut player = create_test_player();
    for name in ["zebra", "Apple", "mango"] {
        player.create_playlist(name).unwrap();
    }

    let names: Vec<&str> = player
        .playlists()
        .list_all()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["Apple", "mango", "zebra"]);
}

#[test]
fn test_parsed_catalog_drives_player() {
    let catalog = parse_catalog(
        "Funny Dogs | funny_dogs_video_id |  #dog , #animal\n\
         Amazing Cats | amazing_cats_video_id |  #cat , #animal\n",
    );
    let mut player = VideoPlayer::new(catalog);

    let results = player.search_by_tag("#ANIMAL").unwrap();
    assert_eq!(
        results.video_ids(),
        ["amazing_cats_video_id", "funny_dogs_video_id"]
    );

    player.select_from_results(&results, "1").unwrap();
    assert_eq!(
        player.current().unwrap().video.title,
        "Amazing Cats"
    );
}

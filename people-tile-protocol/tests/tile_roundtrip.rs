//! Integration tests driving the public tile API end to end.

use people_tile_protocol::{
    Icon, LaunchIntent, PeopleTile, PeopleTileBuilder, Shortcut, StatusNotification, Uri,
};

#[test]
fn shortcut_tile_survives_encode_decode() {
    let shortcut = Shortcut::new("friend-1", "Bea", 10, "com.example.messages").with_icon(
        Icon::Bitmap {
            data: vec![0x89, 0x50, 0x4e, 0x47],
        },
    );

    let tile = PeopleTileBuilder::from_shortcut(&shortcut)
        .with_last_interaction_timestamp(1_600_000_000_000)
        .with_notification(StatusNotification::new(
            "0|com.example.messages|1",
            "com.example.messages",
            1_600_000_000_500,
        ))
        .build();

    let decoded = PeopleTile::from_bytes(&tile.to_bytes().unwrap()).unwrap();

    assert_eq!(decoded.id(), "friend-1");
    assert_eq!(decoded.user_name(), "Bea");
    assert_eq!(decoded.uid(), 10);
    assert_eq!(decoded.package_name(), Some("com.example.messages"));
    assert_eq!(decoded.last_interaction_timestamp(), 1_600_000_000_000);
    assert_eq!(
        decoded.notification().map(|n| n.post_time),
        Some(1_600_000_000_500)
    );
    assert_eq!(decoded.user_icon(), tile.user_icon());
}

#[test]
fn manual_tile_launches_through_its_intent() {
    let intent = LaunchIntent::for_package("com.example.calendar")
        .with_action("view")
        .with_data(Uri::new("content://calendar/events/42"));

    let tile = PeopleTileBuilder::new("birthday-42", "Alice", None, Some(intent)).build();
    let decoded = PeopleTile::from_bytes(&tile.to_bytes().unwrap()).unwrap();

    // Package was derived from the intent at build time and both made
    // it across the wire.
    assert_eq!(decoded.package_name(), Some("com.example.calendar"));
    let intent = decoded.intent().expect("intent should survive");
    assert_eq!(intent.action.as_deref(), Some("view"));
    assert_eq!(
        intent.data.as_ref().map(Uri::as_str),
        Some("content://calendar/events/42")
    );
}

#[test]
fn stream_of_tiles_decodes_in_sequence() {
    let first = PeopleTileBuilder::new("a", "Alice", None, None).build();
    let second = PeopleTileBuilder::new("b", "Bob", None, None)
        .with_hidden_conversation(true)
        .build();

    let mut stream = first.to_bytes().unwrap();
    stream.extend(second.to_bytes().unwrap());

    let mut reader = stream.as_slice();
    let one = PeopleTile::from_reader(&mut reader).unwrap();
    let two = PeopleTile::from_reader(&mut reader).unwrap();

    assert_eq!(one.id(), "a");
    assert_eq!(two.id(), "b");
    assert!(two.is_hidden_conversation());
    assert!(reader.is_empty());
}

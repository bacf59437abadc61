use time::macros::datetime;

use super::*;
use crate::point::PointType;

fn make_point(id: &str) -> Point {
    Point {
        id: PointId::from(id),
        date_from: datetime!(2023-01-01 10:00 UTC),
        date_to: datetime!(2023-01-01 11:00 UTC),
        kind: PointType::Bus,
        base_price: 10,
        offers: Vec::new(),
        destination: "d1".into(),
        is_favorite: false,
    }
}

#[test]
fn intents_arrive_in_send_order() {
    let (sender, mut intents) = IntentSender::channel();
    sender.edit_mode_entered(PointId::from("1"));
    sender.data_change(UserAction::UpdatePoint, UpdateType::Patch, make_point("1"));

    assert_eq!(intents.try_recv().unwrap(), ItemIntent::EditModeEntered(PointId::from("1")));
    assert_eq!(
        intents.try_recv().unwrap(),
        ItemIntent::DataChange { action: UserAction::UpdatePoint, update_type: UpdateType::Patch, point: make_point("1") }
    );
    assert!(intents.try_recv().is_err());
}

#[test]
fn cloned_senders_share_the_queue() {
    let (sender, mut intents) = IntentSender::channel();
    let other = sender.clone();
    other.edit_mode_entered(PointId::from("2"));
    assert_eq!(intents.try_recv().unwrap(), ItemIntent::EditModeEntered(PointId::from("2")));
}

#[test]
fn send_after_owner_dropped_is_harmless() {
    let (sender, intents) = IntentSender::channel();
    drop(intents);
    sender.edit_mode_entered(PointId::from("1"));
}

#[test]
fn display_mode_defaults_to_display() {
    assert_eq!(DisplayMode::default(), DisplayMode::Display);
}

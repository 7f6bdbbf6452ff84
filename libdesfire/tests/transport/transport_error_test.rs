#[path = "../common/mod.rs"]
mod common;

use libdesfire::card::Card;
use libdesfire::transport::mock::MockTransport;
use libdesfire::types::{FileId, StatusWord};
use libdesfire::Error;

#[test]
fn empty_queue_surfaces_as_timeout() {
    let mut card = Card::new(Box::new(MockTransport::new()));
    let err = card.free_memory().unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert!(err.is_transport());
}

#[test]
fn disconnect_during_continuation_is_not_retried() {
    let mut mock = MockTransport::new();
    mock.push_reply(&[0x01; 8], StatusWord::MORE_DATA);
    mock.push_reply(&[0x02; 8], StatusWord::SUCCESS);
    mock.set_fail_after(1);
    let mut card = Card::new(Box::new(mock));

    match card.read_file(FileId::new(0)) {
        Err(Error::Transport(msg)) => assert_eq!(msg, "card removed"),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[test]
fn protocol_errors_are_not_transport_errors() {
    let (mut card, _) = common::card_with_replies(&[(&[0x01], StatusWord::SUCCESS)]);
    let err = card.list_applications().unwrap_err();
    assert!(matches!(err, Error::Protocol(_)));
    assert!(!err.is_transport());
}

#[path = "../common/mod.rs"]
mod common;

use libdesfire::Error;
use libdesfire::protocol::{CodecConfig, Command, Frame, FrameCodec};
use libdesfire::transport::mock::{MockTransport, SharedMock};
use libdesfire::types::{ApplicationId, StatusWord};

fn codec(replies: &[(&[u8], StatusWord)], config: CodecConfig) -> (FrameCodec, SharedMock) {
    common::init_logger();
    let shared = SharedMock::new(MockTransport::new());
    for (data, sw) in replies {
        shared.push_reply(data, *sw);
    }
    (FrameCodec::with_config(Box::new(shared.clone()), config), shared)
}

#[test]
fn two_frame_reply_is_concatenated_in_order() {
    let first: Vec<u8> = (0..8).collect();
    let second: Vec<u8> = (8..12).collect();
    let (mut codec, shared) = codec(
        &[(&first, StatusWord::MORE_DATA), (&second, StatusWord::SUCCESS)],
        CodecConfig::default(),
    );

    let (data, sw) = codec.execute(&Command::ListApplications).unwrap();
    assert_eq!(data, (0..12).collect::<Vec<u8>>());
    assert_eq!(sw, StatusWord::SUCCESS);

    let sent = shared.sent();
    assert_eq!(sent[0], vec![0x90, 0x6A, 0x00, 0x00, 0x00]);
    assert_eq!(sent[1], vec![0x90, 0xAF, 0x00, 0x00, 0x00]);
}

#[test]
fn long_application_listing_spans_many_frames() {
    // 28 applications: 19 in the first frame, 9 in the second
    let aids: Vec<ApplicationId> = (0..28u8)
        .map(|i| ApplicationId::from_bytes([i, 0x10, 0xF0]))
        .collect();
    let listing = common::fixtures::application_listing(&aids);
    let (head, tail) = listing.split_at(57);
    let (mut codec, _) = codec(
        &[(head, StatusWord::MORE_DATA), (tail, StatusWord::SUCCESS)],
        CodecConfig::default(),
    );

    let (data, _) = codec.execute(&Command::ListApplications).unwrap();
    assert_eq!(data, listing);
}

#[test]
fn continuation_cap_stops_a_runaway_card() {
    let chunk: &[u8] = &[0x00];
    let replies = vec![(chunk, StatusWord::MORE_DATA); 10];
    let (mut codec, shared) = codec(
        &replies,
        CodecConfig {
            max_continuations: 3,
            ..CodecConfig::default()
        },
    );
    assert!(matches!(
        codec.execute(&Command::ListFiles),
        Err(Error::Protocol(_))
    ));
    assert_eq!(shared.sent().len(), 4);
}

#[test]
fn single_frame_commands_never_chain() {
    let (mut codec, shared) = codec(
        &[(&[0x00, 0x10], StatusWord::MORE_DATA)],
        CodecConfig::default(),
    );
    assert!(matches!(
        codec.execute(&Command::FreeMemory),
        Err(Error::Protocol(_))
    ));
    assert_eq!(shared.sent().len(), 1);
}

#[test]
fn raw_exchange_returns_more_data_untouched() {
    let (mut codec, shared) = codec(
        &[(&[0xAB; 8], StatusWord::MORE_DATA)],
        CodecConfig::default(),
    );
    let frame = Frame::new(0x0A, vec![0x00]).unwrap();
    let (data, sw) = codec.exchange(&frame).unwrap();
    assert_eq!(data, vec![0xAB; 8]);
    assert!(sw.is_more_data());
    assert_eq!(shared.sent().len(), 1);
    assert_eq!(shared.pending_responses(), 0);
}

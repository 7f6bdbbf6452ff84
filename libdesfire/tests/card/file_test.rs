#[path = "../common/mod.rs"]
mod common;

use common::fixtures::standard_file_settings;
use libdesfire::card::{FileListing, ReadOutcome};
use libdesfire::protocol::FileType;
use libdesfire::types::{FileId, StatusWord};
use libdesfire::Error;

#[test]
fn listing_stops_at_first_refused_probe() {
    let settings = standard_file_settings(32);
    let (mut card, shared) = common::card_with_replies(&[
        (&[0x00, 0x01, 0x02, 0x03], StatusWord::SUCCESS),
        (&settings, StatusWord::SUCCESS),
        (&settings, StatusWord::SUCCESS),
        (&[], StatusWord::FILE_NOT_FOUND),
    ]);

    let listing = card.list_files().unwrap();
    assert_eq!(
        listing,
        FileListing {
            files: vec![FileId::new(0), FileId::new(1)],
            truncated: true,
        }
    );
    // Listing plus three probes; file 3 is never asked about
    let probed: Vec<u8> = shared.sent()[1..]
        .iter()
        .map(|f| common::split_frame(f).1[0])
        .collect();
    assert_eq!(probed, vec![0x00, 0x01, 0x02]);
}

#[test]
fn listing_of_fully_readable_application() {
    let settings = standard_file_settings(8);
    let (mut card, _) = common::card_with_replies(&[
        (&[0x05, 0x02], StatusWord::SUCCESS),
        (&settings, StatusWord::SUCCESS),
        (&settings, StatusWord::SUCCESS),
    ]);
    let listing = card.list_files().unwrap();
    assert_eq!(listing.files, vec![FileId::new(5), FileId::new(2)]);
    assert!(!listing.truncated);
}

#[test]
fn listing_status_error() {
    let (mut card, shared) = common::card_with_replies(&[(&[], StatusWord::new(0x91, 0x9D))]);
    assert!(matches!(card.list_files(), Err(Error::Status(_))));
    assert_eq!(shared.sent().len(), 1);
}

#[test]
fn read_whole_file_across_frames() -> anyhow::Result<()> {
    let content = hex::decode("546869732069732061206465736669726520646174612066696c65")?;
    let (mut card, shared) = common::card_with_replies(&[
        (&content[..16], StatusWord::MORE_DATA),
        (&content[16..], StatusWord::SUCCESS),
    ]);

    assert_eq!(
        card.read_file(FileId::new(1))?,
        ReadOutcome::Complete(content.clone())
    );
    assert_eq!(
        common::split_frame(&shared.sent()[0]),
        (0xBD, vec![0x01, 0, 0, 0, 0, 0, 0])
    );
    Ok(())
}

#[test]
fn read_status_outcomes() {
    let (mut card, _) = common::card_with_replies(&[
        (&[], StatusWord::FILE_NOT_FOUND),
        (&[], StatusWord::ISO_FILE_NOT_FOUND),
        (&[], StatusWord::LENGTH_ERROR),
        (&[], StatusWord::AUTHENTICATION_ERROR),
    ]);
    let file = FileId::new(7);
    assert_eq!(card.read_file(file).unwrap(), ReadOutcome::FileNotFound);
    assert_eq!(card.read_file(file).unwrap(), ReadOutcome::FileNotFound);
    assert_eq!(card.read_file(file).unwrap(), ReadOutcome::LengthFieldInvalid);
    assert_eq!(
        card.read_file(file).unwrap(),
        ReadOutcome::Unexpected(StatusWord::AUTHENTICATION_ERROR)
    );
}

#[test]
fn ranged_read() {
    let (mut card, shared) = common::card_with_replies(&[(&[0xAB; 4], StatusWord::SUCCESS)]);
    let data = card
        .read_file_range(FileId::new(2), 0x10, 4)
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(data, vec![0xAB; 4]);
    assert_eq!(
        common::split_frame(&shared.sent()[0]).1,
        vec![0x02, 0x10, 0, 0, 0x04, 0, 0]
    );
}

#[test]
fn ranged_read_bounds() {
    let (mut card, shared) = common::card_with_replies(&[]);
    assert!(matches!(
        card.read_file_range(FileId::new(2), 0, 0x0100_0000),
        Err(Error::InvalidInput(_))
    ));
    assert!(shared.sent().is_empty());
}

#[test]
fn file_settings_decoded() {
    let (mut card, _) =
        common::card_with_replies(&[(&standard_file_settings(0x0200), StatusWord::SUCCESS)]);
    let settings = card.file_settings(FileId::new(1)).unwrap();
    assert_eq!(settings.file_type, FileType::StandardData);
    assert_eq!(settings.size, Some(0x0200));
}

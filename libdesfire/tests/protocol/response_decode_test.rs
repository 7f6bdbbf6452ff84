use libdesfire::Error;
use libdesfire::protocol::{
    FileType, decode_application_ids, decode_file_ids, decode_file_settings, decode_free_memory,
};
use libdesfire::types::FileId;

#[test]
fn application_ids_in_card_order() {
    let aids = decode_application_ids(&[0xF4, 0x85, 0x01, 0x00, 0x00, 0x01]).unwrap();
    let hex: Vec<String> = aids.iter().map(|a| a.to_hex()).collect();
    assert_eq!(hex, vec!["F48501", "000001"]);
}

#[test]
fn application_ids_reject_partial_triples() {
    assert!(matches!(
        decode_application_ids(&[0x01, 0x02, 0x03, 0x04]),
        Err(Error::Protocol(_))
    ));
    assert!(decode_application_ids(&[]).unwrap().is_empty());
}

#[test]
fn file_ids_one_per_byte() {
    assert_eq!(
        decode_file_ids(&[0x00, 0x1F, 0x05]),
        vec![FileId::new(0), FileId::new(0x1F), FileId::new(5)]
    );
}

#[test]
fn backup_file_settings() {
    let s = decode_file_settings(&[0x01, 0x03, 0x00, 0xE0, 0x00, 0x01, 0x00]).unwrap();
    assert_eq!(s.file_type, FileType::BackupData);
    assert_eq!(s.comm_settings, 0x03);
    assert_eq!(s.access_rights, 0xE000);
    assert_eq!(s.size, Some(256));
}

#[test]
fn value_file_has_no_size() {
    let s = decode_file_settings(&[0x02, 0x00, 0xEE, 0xEE, 0, 0, 0, 0, 0xFF, 0, 0, 0]).unwrap();
    assert_eq!(s.file_type, FileType::Value);
    assert_eq!(s.size, None);
    assert_eq!(s.raw.len(), 12);
}

#[test]
fn free_memory_reads_first_three_bytes() {
    assert_eq!(decode_free_memory(&[0x00, 0x0E, 0x00]).unwrap(), 3584);
    assert!(matches!(decode_free_memory(&[0x01]), Err(Error::Protocol(_))));
}

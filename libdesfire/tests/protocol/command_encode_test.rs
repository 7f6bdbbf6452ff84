use libdesfire::Error;
use libdesfire::constants::*;
use libdesfire::crypto::KeyType;
use libdesfire::protocol::Command;
use libdesfire::types::{ApplicationId, FileId};

#[test]
fn read_data_layout_is_little_endian() {
    let cmd = Command::ReadData {
        file: FileId::new(0x02),
        offset: 0x000120,
        length: 0x010203,
    };
    assert_eq!(
        cmd.to_frame().unwrap().encode(),
        vec![0x90, 0xBD, 0x00, 0x00, 0x07, 0x02, 0x20, 0x01, 0x00, 0x03, 0x02, 0x01, 0x00]
    );
}

#[test]
fn read_data_rejects_values_beyond_24_bits() {
    let cmd = Command::ReadData {
        file: FileId::new(0),
        offset: 0,
        length: MAX_U24 + 1,
    };
    assert!(matches!(cmd.encode(), Err(Error::InvalidInput(_))));
}

#[test]
fn create_application_uses_default_settings() {
    let cmd = Command::CreateApplication {
        aid: ApplicationId::from_bytes([0xF4, 0x85, 0x01]),
        key_settings: DEFAULT_KEY_SETTINGS,
        app_settings: DEFAULT_APP_SETTINGS,
    };
    assert_eq!(cmd.encode().unwrap(), vec![0xF4, 0x85, 0x01, 0x0F, 0x01]);
    assert_eq!(cmd.instruction(), INS_CREATE_APPLICATION);
}

#[test]
fn get_file_settings_frame() {
    let cmd = Command::GetFileSettings {
        file: FileId::new(0x1F),
    };
    assert_eq!(
        cmd.to_frame().unwrap().encode(),
        vec![0x90, 0xF5, 0x00, 0x00, 0x01, 0x1F, 0x00]
    );
}

#[test]
fn authenticate_frames_per_key_type() {
    let expected = [
        (KeyType::Des, 0x0A),
        (KeyType::TwoKey3Des, 0x1A),
        (KeyType::ThreeKey3Des, 0x1A),
        (KeyType::Aes128, 0xAA),
    ];
    for (key_type, ins) in expected {
        let cmd = Command::Authenticate {
            key_type,
            key_number: 3,
        };
        assert_eq!(
            cmd.to_frame().unwrap().encode(),
            vec![0x90, ins, 0x00, 0x00, 0x01, 0x03, 0x00]
        );
    }
}

#[test]
fn additional_frame_carries_data() {
    let cmd = Command::AdditionalFrame {
        data: vec![0x01; 16],
    };
    let bytes = cmd.to_frame().unwrap().encode();
    assert_eq!(&bytes[..5], &[0x90, 0xAF, 0x00, 0x00, 0x10]);
    assert_eq!(bytes.len(), 22);
}

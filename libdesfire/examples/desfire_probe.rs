#![cfg(feature = "pcsc")]

//! Probe a DESFire card on the first PC/SC reader.
//!
//! Usage:
//!   cargo run -p libdesfire --example desfire_probe --features pcsc -- [KEYTYPE KEYHEX]
//!
//! Without arguments the probe lists applications, their files and the free
//! memory. With a key type (DES, 2TDEA, 3TDEA, AES) and a hex key it also
//! authenticates against key 0 of the PICC.

use libdesfire::prelude::*;
use libdesfire::transport::PcscTransport;

fn main() -> Result<()> {
    env_logger::init();

    let transport = PcscTransport::open()?;
    println!("Reader: {}", transport.reader_name().unwrap_or("?"));
    println!("ATR: {}", bytes_to_hex_spaced(&transport.atr()?));
    let mut card = Card::new(Box::new(transport));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [key_type, key_hex] = args.as_slice() {
        let key_type: KeyType = key_type.parse()?;
        let key = parse_hex(key_hex).map_err(Error::InvalidInput)?;
        match card.authenticate(key_type, &key)? {
            AuthOutcome::Authenticated(k) => {
                println!("Authenticated with {} key {}", k.key_type, k.key_number)
            }
            AuthOutcome::Failed(f) => println!("Authentication failed: {}", f),
        }
    }

    println!("Free memory: {} bytes", card.free_memory()?);

    let aids = card.list_applications()?;
    println!("{} application(s)", aids.len());
    for aid in aids {
        match card.select_application(aid)? {
            SelectOutcome::Selected => {}
            other => {
                println!("  {}: {:?}", aid, other);
                continue;
            }
        }
        let listing = card.list_files()?;
        println!(
            "  {}: files {:?}{}",
            aid,
            listing.files.iter().map(|f| f.as_u8()).collect::<Vec<_>>(),
            if listing.truncated { " (truncated)" } else { "" }
        );
        for file in listing.files {
            match card.read_file(file)? {
                ReadOutcome::Complete(data) => {
                    println!("    file {}: {}", file, bytes_to_hex_spaced(&data))
                }
                other => println!("    file {}: {:?}", file, other),
            }
        }
    }
    Ok(())
}

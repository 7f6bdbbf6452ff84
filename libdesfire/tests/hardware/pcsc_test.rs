#![cfg(feature = "pcsc")]

use libdesfire::card::Card;
use libdesfire::transport::PcscTransport;
use libdesfire::Result;
use serial_test::serial;

// These tests require a PC/SC reader with a DESFire card on it. They are
// marked `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// cargo test -p libdesfire --test hardware --features pcsc -- --ignored

/// Open the first reader. Ok(None) when no reader or card is present.
fn open_card() -> Result<Option<Card>> {
    match PcscTransport::open() {
        Ok(transport) => Ok(Some(Card::new(Box::new(transport)))),
        Err(e) if e.is_transport() => Ok(None),
        Err(e) => Err(e),
    }
}

#[test]
#[ignore]
#[serial]
fn list_applications_on_real_card() -> Result<()> {
    if let Some(mut card) = open_card()? {
        let aids = card.list_applications()?;
        println!("{} applications", aids.len());
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn free_memory_on_real_card() -> Result<()> {
    if let Some(mut card) = open_card()? {
        println!("{} bytes free", card.free_memory()?);
    }
    Ok(())
}

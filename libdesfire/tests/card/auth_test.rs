#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{AES_KEY, key_for};
use libdesfire::auth::{AuthFailure, AuthOutcome, AuthSession, AuthState, AuthenticatedKey};
use libdesfire::card::Card;
use libdesfire::crypto::KeyType;
use libdesfire::protocol::FrameCodec;
use libdesfire::test_support::SimulatedCard;
use libdesfire::types::StatusWord;
use libdesfire::Error;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn every_key_type_authenticates_against_simulated_card() -> anyhow::Result<()> {
    common::init_logger();
    for key_type in KeyType::ALL {
        let key = key_for(key_type);
        let sim = SimulatedCard::new(key_type, &key);
        let log = sim.frame_log();
        let mut card = Card::new(Box::new(sim));

        let outcome = card.authenticate(key_type, &key)?;
        assert_eq!(
            outcome.into_result()?,
            AuthenticatedKey {
                key_type,
                key_number: 0
            }
        );

        let frames = log.borrow();
        assert_eq!(frames.len(), 2, "{}", key_type);
        let (ins, data) = common::split_frame(&frames[0]);
        assert_eq!(ins, key_type.auth_instruction());
        assert_eq!(data, vec![0x00]);
        let (ins, data) = common::split_frame(&frames[1]);
        assert_eq!(ins, 0xAF);
        assert_eq!(data.len(), 2 * key_type.challenge_len());
    }
    Ok(())
}

#[test]
fn selected_key_number_is_sent() {
    let sim = SimulatedCard::new(KeyType::Aes128, &AES_KEY);
    let log = sim.frame_log();
    let mut card = Card::new(Box::new(sim));
    let outcome = card.authenticate_key(KeyType::Aes128, &AES_KEY, 4).unwrap();

    assert_eq!(
        outcome,
        AuthOutcome::Authenticated(AuthenticatedKey {
            key_type: KeyType::Aes128,
            key_number: 4
        })
    );
    assert_eq!(common::split_frame(&log.borrow()[0]).1, vec![0x04]);
}

#[test]
fn rnd_a_differs_between_attempts() {
    let key = key_for(KeyType::Des);
    let sim = SimulatedCard::new(KeyType::Des, &key);
    let log = sim.frame_log();
    let mut card = Card::new(Box::new(sim));
    let mut rng = StdRng::seed_from_u64(99);

    card.authenticate_with_rng(KeyType::Des, &key, 0, &mut rng).unwrap();
    card.authenticate_with_rng(KeyType::Des, &key, 0, &mut rng).unwrap();

    let frames = log.borrow();
    assert_eq!(frames.len(), 4);
    // Same rndB and key, fresh rndA: the encrypted responses differ
    assert_ne!(frames[1], frames[3]);
}

#[test]
fn tampered_proof_is_a_verification_failure() {
    let sim = SimulatedCard::new(KeyType::ThreeKey3Des, &key_for(KeyType::ThreeKey3Des))
        .corrupt_proof();
    let mut card = Card::new(Box::new(sim));
    let outcome = card
        .authenticate(KeyType::ThreeKey3Des, &key_for(KeyType::ThreeKey3Des))
        .unwrap();

    assert_eq!(outcome, AuthOutcome::Failed(AuthFailure::VerificationFailed));
    assert!(matches!(
        outcome.into_result(),
        Err(Error::Authentication(AuthFailure::VerificationFailed))
    ));
    assert!(!card.context().is_authenticated());
}

#[test]
fn wrong_key_is_refused_by_the_card() {
    let sim = SimulatedCard::new(KeyType::TwoKey3Des, &[0x33; 16]);
    let mut card = Card::new(Box::new(sim));
    let outcome = card.authenticate(KeyType::TwoKey3Des, &[0x44; 16]).unwrap();
    assert_eq!(
        outcome,
        AuthOutcome::Failed(AuthFailure::ResponseRejected {
            status: StatusWord::AUTHENTICATION_ERROR,
            len: 0
        })
    );
}

#[test]
fn card_without_the_key_rejects_the_challenge() {
    let (mut card, shared) =
        common::card_with_replies(&[(&[], StatusWord::new(0x91, 0x40))]);
    let outcome = card.authenticate(KeyType::Aes128, &AES_KEY).unwrap();
    assert_eq!(
        outcome,
        AuthOutcome::Failed(AuthFailure::ChallengeRejected {
            status: StatusWord::new(0x91, 0x40),
            len: 0
        })
    );
    assert_eq!(shared.sent().len(), 1);
}

#[test]
fn transport_loss_mid_handshake() {
    // Challenge arrives, then the reader has nothing more to give
    let (mut card, shared) = common::card_with_replies(&[(&[0x5C; 16], StatusWord::MORE_DATA)]);
    assert!(matches!(
        card.authenticate(KeyType::Aes128, &AES_KEY),
        Err(Error::Timeout)
    ));
    assert_eq!(shared.sent().len(), 2);
    assert!(!card.context().is_authenticated());
}

#[test]
fn session_can_be_driven_step_by_step() {
    let key = key_for(KeyType::Aes128);
    let mut codec = FrameCodec::new(Box::new(SimulatedCard::new(KeyType::Aes128, &key)));
    let mut session = AuthSession::new(KeyType::Aes128, &key, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    session.request_challenge(&mut codec).unwrap();
    assert_eq!(session.state(), AuthState::ChallengeReceived);
    session.respond(&mut codec, &mut rng).unwrap();
    assert_eq!(session.state(), AuthState::ResponseSent);
    session.verify().unwrap();
    assert_eq!(session.state(), AuthState::Authenticated);
    assert!(session.outcome().unwrap().is_authenticated());
}

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, SeedableRng};
use wordle_server::{GuessError, Mark, PlayerId, Sessions, Word, WordsList};

fn embedded_sessions(seed: u64) -> Sessions {
    let words = WordsList::embedded().expect("embedded lists should load");
    Sessions::new(Arc::new(words), StdRng::seed_from_u64(seed))
}

fn marks(pattern: &str) -> Vec<Mark> {
    pattern.chars().filter_map(Mark::from_char).collect()
}

#[test]
fn documented_examples() {
    let crane = Word::parse("CRANE").unwrap();
    let erase = Word::parse("ERASE").unwrap();

    assert_eq!(
        crane.score(&Word::parse("TRACE").unwrap()).to_vec(),
        marks(".OOoO")
    );

    // both E's in ERASE are unmatched, so both E's in SPEED find one
    assert_eq!(
        erase.score(&Word::parse("SPEED").unwrap()).to_vec(),
        marks("o.oo.")
    );

    // one E is taken by the exact match, leaving one for the rest of GEESE
    assert_eq!(
        erase.score(&Word::parse("GEESE").unwrap()).to_vec(),
        marks(".o.OO")
    );
}

#[tokio::test]
async fn rejects_bad_guesses_without_recording_them() {
    let sessions = embedded_sessions(1);
    let player = PlayerId::from("alice");
    sessions.new_game(&player).await;

    assert_eq!(
        sessions.submit_guess(&player, "AB").await,
        Err(GuessError::InvalidLength(2))
    );
    assert_eq!(
        sessions.submit_guess(&player, "ZZZZZ").await,
        Err(GuessError::UnknownWord("ZZZZZ".to_owned()))
    );

    assert!(sessions.state(&player).await.guesses.is_empty());
}

#[tokio::test]
async fn seeded_games_repeat() {
    let first = embedded_sessions(42);
    let second = embedded_sessions(42);
    let player = PlayerId::from("bob");

    for guess in ["crane", "slate", "build"] {
        assert_eq!(
            first.submit_guess(&player, guess).await,
            second.submit_guess(&player, guess).await
        );
    }
}

#[tokio::test]
async fn play_until_over() {
    let sessions = embedded_sessions(7);
    let player = PlayerId::from("carol");
    sessions.new_game(&player).await;

    let guesses = ["BLITZ", "GUMBO", "WHELP", "ZESTY", "KAYAK", "NYMPH"];
    let mut over = false;

    for (count, guess) in guesses.into_iter().enumerate() {
        let outcome = sessions.submit_guess(&player, guess).await.unwrap();
        let view = sessions.state(&player).await;

        assert_eq!(view.guesses.len(), count + 1);
        assert_eq!(view.is_over, outcome.is_over);
        assert_eq!(view.answer.is_some(), view.is_over);
        assert_eq!(outcome.answer.is_some(), outcome.is_over);

        if outcome.is_won {
            assert!(outcome.is_over);
        }

        if outcome.is_over {
            over = true;
            break;
        }
    }

    assert!(over);
    assert_eq!(
        sessions.submit_guess(&player, "CRANE").await,
        Err(GuessError::GameAlreadyOver)
    );

    sessions.new_game(&player).await;
    let view = sessions.state(&player).await;
    assert!(view.guesses.is_empty());
    assert!(!view.is_over);
    assert_eq!(view.answer, None);
}

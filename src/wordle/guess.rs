use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{AsEmoji, Word, WORD_LENGTH};

/// A scored guess. The marks are fixed when the guess is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    word: Word,
    #[serde(rename = "result")]
    marks: [Mark; WORD_LENGTH],
}

impl Guess {
    pub fn new(word: Word, answer: &Word) -> Self {
        Self {
            word,
            marks: answer.score(&word),
        }
    }

    pub const fn word(&self) -> &Word {
        &self.word
    }

    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.marks
    }

    pub fn is_correct(&self) -> bool {
        self.marks.iter().all(|mark| *mark == Mark::Correct)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Mark)> + '_ {
        self.word.iter().copied().zip(self.marks.iter().copied())
    }
}

impl AsEmoji for Guess {
    fn as_emoji(&self) -> Cow<str> {
        self.marks.as_slice().as_emoji()
    }

    fn emoji_with_letters(&self) -> String {
        let (letters, marks) = self.iter().fold(
            (String::new(), String::new()),
            |(letters, marks), (letter, mark)| {
                (
                    letters + " " + &letter.to_string(),
                    marks + &mark.as_emoji(),
                )
            },
        );

        letters.trim().to_owned() + "\n" + &marks
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mark in &self.marks {
            write!(f, "{mark}")?;
        }

        Ok(())
    }
}

impl PartialEq<&str> for Guess {
    fn eq(&self, other: &&str) -> bool {
        &self.to_string() == other
    }
}

/// How one letter of a guess relates to the answer.
///
/// Ordered by how much the mark tells the player, so the best mark seen for
/// a letter is the maximum.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    #[default]
    Absent,
    Present,
    Correct,
}

impl Mark {
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'O' => Some(Self::Correct),
            'o' => Some(Self::Present),
            '.' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl AsEmoji for Mark {
    fn as_emoji(&self) -> Cow<str> {
        match self {
            Self::Correct => "🟩", // green square
            Self::Present => "🟨", // yellow square
            Self::Absent => "⬛",  // black square
        }
        .into()
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ch = match self {
            Self::Correct => 'O',
            Self::Present => 'o',
            Self::Absent => '.',
        };

        write!(f, "{ch}")
    }
}

#[cfg(test)]
mod tests {
    use paste::paste;
    use pretty_assertions::assert_eq;

    use super::{Guess, Mark};
    use crate::wordle::{AsEmoji, Word};

    macro_rules! string_match {
        ($($word:ident, $guess:ident => $result:expr;)+) => {
            paste! {
                $(
                    #[test]
                    fn [<$word _ $guess>]() {
                        let word = Word::parse(stringify!($word)).unwrap();
                        let guess = Guess::new(Word::parse(stringify!($guess)).unwrap(), &word);
                        assert_eq!(guess, $result)
                    }
                )+
            }
        };
    }

    string_match! {
        amber, amber => "OOOOO";
        amber, arbor => "O.O.O";
        amber, handy => ".o...";
        addra, opals => "..o..";
        mummy, tummy => ".OOOO";
        crane, trace => ".OOoO";
        erase, speed => "o.oo.";
        erase, geese => ".o.OO";
        crane, eerie => "..o.O";
        vital, audio => "o..o.";
        scene, eager => "o..o.";
        today, level => ".....";
        phone, crown => "..O.o";
        royal, newly => "...oo";
        baker, dying => ".....";
        blind, began => "O...o";
        movie, storm => "..o.o";
        spend, super => "O.oo.";
        still, worth => "...o.";
        build, usage => "o....";
        badly, alive => "oo...";
        split, house => "...o.";
        quite, trust => "o.o..";
        flash, death => "..O.O";
        peter, crime => ".o..o";
        these, smith => "o..oo";
        solve, shoot => "O.o..";
        prior, whole => "..o..";
        event, dealt => ".o..O";
    }

    #[test]
    fn marks_in_position_order() {
        let answer = Word::parse("CRANE").unwrap();
        let guess = Guess::new(Word::parse("TRACE").unwrap(), &answer);

        assert_eq!(
            guess.marks(),
            &[
                Mark::Absent,
                Mark::Correct,
                Mark::Correct,
                Mark::Present,
                Mark::Correct
            ]
        );
        assert!(!guess.is_correct());
    }

    #[test]
    fn mark_chars() {
        for ch in ['O', 'o', '.'] {
            let mark = Mark::from_char(ch).unwrap();
            assert_eq!(mark.to_string(), ch.to_string());
        }

        assert_eq!(Mark::from_char('x'), None);
    }

    #[test]
    fn serializes_like_the_web_client_expects() {
        let answer = Word::parse("CRANE").unwrap();
        let guess = Guess::new(Word::parse("CRATE").unwrap(), &answer);

        assert_eq!(
            serde_json::to_value(guess).unwrap(),
            serde_json::json!({
                "word": "CRATE",
                "result": ["correct", "correct", "correct", "absent", "correct"]
            })
        );
    }

    #[test]
    fn emoji() {
        let answer = Word::parse("AMBER").unwrap();
        let guess = Guess::new(Word::parse("ARBOR").unwrap(), &answer);

        assert_eq!(guess.as_emoji(), "🟩⬛🟩⬛🟩");
        assert_eq!(guess.emoji_with_letters(), "A R B O R\n🟩⬛🟩⬛🟩");
    }
}

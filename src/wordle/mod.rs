use std::borrow::Cow;

mod word;
pub use word::{ParseWordError, Word};

mod guess;
pub use guess::{Guess, Mark};

pub const WORD_LENGTH: usize = 5;

pub trait AsEmoji {
    fn as_emoji(&self) -> Cow<str>;

    fn emoji_with_letters(&self) -> String {
        self.as_emoji().into()
    }
}

impl AsEmoji for [Mark] {
    fn as_emoji(&self) -> Cow<str> {
        self.iter()
            .map(|mark| mark.as_emoji())
            .collect::<Vec<_>>()
            .join("")
            .into()
    }
}

impl AsEmoji for [Guess] {
    fn as_emoji(&self) -> Cow<str> {
        self.iter()
            .map(|guess| guess.as_emoji())
            .collect::<Vec<_>>()
            .join("\n")
            .into()
    }

    fn emoji_with_letters(&self) -> String {
        self.iter()
            .map(|guess| guess.emoji_with_letters())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

use crate::card::{Card, Deck, DeckError};
use crate::constants::{HANDOFF_INDEX, PORTRAIT_INDEX};

pub const INITIAL_MUSIC: &str = "music/opening.mp3";
pub const BACKGROUND_IMAGE: &str = "bg.jpg";

/// The fixed card sequence shipped with the application.
pub fn builtin_deck() -> Result<Deck, DeckError> {
    let cards = vec![
        Card::new("Hey you! Yes, you. This one is just for you.", "cards/01.jpg"),
        Card::new("Another year around the sun, and you made it look easy.", "cards/02.jpg"),
        Card::new("Remember the night we got lost and called it an adventure?", "cards/03.jpg"),
        Card::new("Or the cake that collapsed and still tasted perfect?", "cards/04.jpg"),
        Card::new("Every silly story is better because you were in it.", "cards/05.jpg"),
        Card::new("So today, let's turn the music up a little...", "cards/06.jpg"),
        Card::new("Happy Birthday! Dance like nobody is watching.", "cards/07.jpg")
            .with_music("music/celebration.mp3"),
        Card::new("May this year bring you more laughter than you can hold.", "cards/08.jpg"),
        Card::new("More sunsets, more road trips, more late-night talks.", "cards/09.jpg"),
        Card::new("More reasons to be proud of who you are.", "cards/10.jpg"),
        Card::new("And fewer Mondays. Definitely fewer Mondays.", "cards/11.jpg"),
        Card::new("Thank you for being kind when it was hard.", "cards/12.jpg"),
        Card::new("Thank you for being you, every single day.", "cards/13.jpg"),
        Card::new("Whatever comes next, I'll be right here cheering.", "cards/14.jpg"),
        Card::new("Happy Birthday, my favourite person.", "cards/15.jpg"),
    ];

    Deck::new(cards, INITIAL_MUSIC, HANDOFF_INDEX)?.with_portrait(PORTRAIT_INDEX)
}

//! Actions the player can choose at the table prompt.

/// An action chosen at the table prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card.
    Play,
    /// Return the discard pile and shuffle.
    Shuffle,
    /// Leave the table.
    Exit,
}

impl Action {
    /// All actions in prompt order.
    pub const ALL: [Self; 3] = [Self::Play, Self::Shuffle, Self::Exit];

    /// Long and short spellings accepted for this action.
    #[must_use]
    pub const fn spellings(self) -> [&'static str; 2] {
        match self {
            Self::Play => ["play", "P"],
            Self::Shuffle => ["shuffle", "S"],
            Self::Exit => ["exit", "E"],
        }
    }

    /// Parses user input, ignoring case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::Action;
    ///
    /// assert_eq!(Action::parse("PLAY"), Some(Action::Play));
    /// assert_eq!(Action::parse(" s "), Some(Action::Shuffle));
    /// assert_eq!(Action::parse("fold"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|action| {
            action
                .spellings()
                .iter()
                .any(|spelling| spelling.eq_ignore_ascii_case(input))
        })
    }

    /// Every accepted spelling, in prompt order.
    pub fn aliases() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().flat_map(Self::spellings)
    }
}

//! Card types and comparison helpers.

/// Card suit.
///
/// Suits are listed in dealing order: hand `i` is dealt every rank of
/// `Suit::ALL[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in dealing order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Hearts, Self::Diamonds];

    /// Returns the suit dealt to the hand at `index`, if any.
    #[must_use]
    pub const fn for_hand(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Lowercase asset name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spade",
            Self::Clubs => "club",
            Self::Hearts => "heart",
            Self::Diamonds => "diamond",
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Rank used for every highest/lowest comparison. The Ace counts as 14.
    ///
    /// ```
    /// use lowcard::{Card, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Spades, 1).comparison_rank(), 14);
    /// assert_eq!(Card::new(Suit::Spades, 9).comparison_rank(), 9);
    /// ```
    #[must_use]
    pub const fn comparison_rank(&self) -> u8 {
        comparison_rank(self.rank)
    }

    /// Returns whether this card beats `other` by comparison rank.
    #[must_use]
    pub const fn is_higher_than(&self, other: &Self) -> bool {
        self.comparison_rank() > other.comparison_rank()
    }
}

/// Maps a raw rank to its comparison rank (Ace high).
#[must_use]
pub const fn comparison_rank(rank: u8) -> u8 {
    if rank == 1 { 14 } else { rank }
}

/// Number of ranks in a suit.
pub const RANKS_PER_SUIT: usize = 13;

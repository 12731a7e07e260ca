//! Round resolution: who loses hit points once every card is on the table.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::game::GameMode;
use crate::hand::Penalty;

/// Why the losers of a round lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossKind {
    /// Two or more played cards shared a rank.
    Duplicate,
    /// Every card was distinct and the losers played the lowest one.
    Lowest,
}

/// Shape of the played ranks, used to drive the reveal presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPattern {
    /// Every played card has the same rank.
    AllSame,
    /// Some, but not all, played cards share a rank.
    HasDuplicate,
    /// No two played cards share a rank.
    AllDistinct,
}

/// Outcome of comparing the cards played in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResolution {
    /// Cards played this round as `(hand index, card)`.
    pub played: Vec<(usize, Card)>,
    /// Hands that take the penalty. Empty when the mercy rule applied.
    pub losers: Vec<usize>,
    /// Why the losers lost. `None` when nothing was played.
    pub kind: Option<LossKind>,
    /// Penalty dealt to each loser.
    pub penalty: Penalty,
    /// Whether a full wipe was forgiven.
    pub mercy: bool,
    /// Shape of the played ranks.
    pub pattern: RoundPattern,
    /// Hands whose card was unique, from lowest to highest comparison rank.
    pub unique_order: Vec<usize>,
}

impl RoundResolution {
    /// Returns whether the hand at `index` loses this round.
    #[must_use]
    pub fn is_loser(&self, index: usize) -> bool {
        self.losers.contains(&index)
    }

    /// Iterates the penalty owed by each loser.
    pub fn penalties(&self) -> impl Iterator<Item = (usize, Penalty)> + '_ {
        self.losers.iter().map(|&index| (index, self.penalty))
    }
}

/// Penalty a loser takes in the given mode.
#[must_use]
pub const fn penalty_for(mode: GameMode) -> Penalty {
    match mode {
        GameMode::Normal => Penalty::Reduce(1),
        GameMode::SuddenDeath => Penalty::Eliminate,
    }
}

/// Resolves one round.
///
/// `played` holds one card per contributing hand. `alive` lists every hand
/// with hit points left before the round, which is what the mercy rule
/// compares the losers against. Hands that played nothing are simply absent
/// from `played`.
///
/// When any comparison rank is played more than once, every hand in any
/// duplicated group loses. Otherwise the hands holding the minimum
/// comparison rank lose. In normal mode with `mercy_rule` set, a duplicate
/// that would hit every live hand is forgiven.
#[must_use]
pub fn resolve(
    played: &[(usize, Card)],
    alive: &[usize],
    mode: GameMode,
    mercy_rule: bool,
) -> RoundResolution {
    let mut tally: HashMap<u8, usize> = HashMap::new();
    for (_, card) in played {
        *tally.entry(card.comparison_rank()).or_insert(0) += 1;
    }

    let has_duplicate = tally.values().any(|&count| count >= 2);
    let pattern = if tally.len() == 1 {
        RoundPattern::AllSame
    } else if has_duplicate {
        RoundPattern::HasDuplicate
    } else {
        RoundPattern::AllDistinct
    };

    let mut unique: Vec<(u8, usize)> = played
        .iter()
        .filter(|(_, card)| tally.get(&card.comparison_rank()) == Some(&1))
        .map(|&(index, card)| (card.comparison_rank(), index))
        .collect();
    unique.sort_unstable();
    let unique_order = unique.into_iter().map(|(_, index)| index).collect();

    let (kind, mut losers): (Option<LossKind>, Vec<usize>) = if has_duplicate {
        let losers = played
            .iter()
            .filter(|(_, card)| tally.get(&card.comparison_rank()).is_some_and(|&n| n >= 2))
            .map(|&(index, _)| index)
            .collect();
        (Some(LossKind::Duplicate), losers)
    } else if let Some(min) = played.iter().map(|(_, c)| c.comparison_rank()).min() {
        let losers = played
            .iter()
            .filter(|(_, card)| card.comparison_rank() == min)
            .map(|&(index, _)| index)
            .collect();
        (Some(LossKind::Lowest), losers)
    } else {
        (None, Vec::new())
    };
    losers.sort_unstable();

    let mut mercy = false;
    if kind == Some(LossKind::Duplicate) && mode == GameMode::Normal && mercy_rule {
        let mut everyone: Vec<usize> = alive.to_vec();
        everyone.sort_unstable();
        everyone.dedup();
        if losers == everyone {
            mercy = true;
            losers.clear();
        }
    }

    RoundResolution {
        played: played.to_vec(),
        losers,
        kind,
        penalty: penalty_for(mode),
        mercy,
        pattern,
        unique_order,
    }
}

use crate::games::CandidatePicker;
use super::types::{CARD_COUNT, Card, FlipOutcome, GameStatus, Icon, PAIR_COUNT};

pub struct MemoryMatchGameState {
    cards: Vec<Card>,
    flipped: Vec<usize>,
    matched: Vec<Icon>,
    moves: u32,
    status: GameStatus,
}

impl MemoryMatchGameState {
    pub fn new<P: CandidatePicker>(picker: &mut P) -> Self {
        Self {
            cards: deal(picker),
            flipped: Vec::with_capacity(2),
            matched: Vec::with_capacity(PAIR_COUNT),
            moves: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn flip_card(&mut self, index: usize) -> Result<FlipOutcome, String> {
        if self.status == GameStatus::Won {
            return Err("Game is already won".to_string());
        }

        let Some(card) = self.cards.get(index).copied() else {
            return Err("Card out of range".to_string());
        };

        if self.flipped.len() == 2 {
            return Err("Two cards are already face up".to_string());
        }

        if self.flipped.contains(&index) {
            return Err("Card is already face up".to_string());
        }

        if self.matched.contains(&card.icon) {
            return Err("Card is already matched".to_string());
        }

        self.flipped.push(index);

        let &[first, second] = self.flipped.as_slice() else {
            return Ok(FlipOutcome::Revealed(card.icon));
        };

        self.moves += 1;

        if self.cards[first].icon == self.cards[second].icon {
            self.matched.push(card.icon);
            self.flipped.clear();
            if self.matched.len() == PAIR_COUNT {
                self.status = GameStatus::Won;
            }
            return Ok(FlipOutcome::Matched(card.icon));
        }

        Ok(FlipOutcome::Mismatch { first, second })
    }

    /// Turns a mismatched pair back face down.
    pub fn hide_mismatched(&mut self) {
        if self.flipped.len() == 2 {
            self.flipped.clear();
        }
    }

    pub fn is_face_up(&self, index: usize) -> bool {
        self.flipped.contains(&index)
            || self
                .cards
                .get(index)
                .is_some_and(|card| self.matched.contains(&card.icon))
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.cards
            .get(index)
            .is_some_and(|card| self.matched.contains(&card.icon))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pairs_found(&self) -> usize {
        self.matched.len()
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn reset<P: CandidatePicker>(&mut self, picker: &mut P) {
        *self = Self::new(picker);
    }

    #[cfg(test)]
    fn from_icons(icons: &[Icon]) -> Self {
        Self {
            cards: icons
                .iter()
                .enumerate()
                .map(|(id, &icon)| Card { id, icon })
                .collect(),
            flipped: Vec::new(),
            matched: Vec::new(),
            moves: 0,
            status: GameStatus::InProgress,
        }
    }
}

fn deal<P: CandidatePicker>(picker: &mut P) -> Vec<Card> {
    let mut icons: Vec<Icon> = Icon::ALL.iter().chain(Icon::ALL.iter()).copied().collect();
    picker.shuffle(&mut icons);
    debug_assert_eq!(icons.len(), CARD_COUNT);
    icons
        .into_iter()
        .enumerate()
        .map(|(id, icon)| Card { id, icon })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;

    /// Cards laid out as pairs side by side: 0-1, 2-3, ...
    fn paired_state() -> MemoryMatchGameState {
        let icons: Vec<Icon> = Icon::ALL.iter().flat_map(|&icon| [icon, icon]).collect();
        MemoryMatchGameState::from_icons(&icons)
    }

    #[test]
    fn test_deal_has_every_icon_twice() {
        let mut rng = SessionRng::new(21);
        let state = MemoryMatchGameState::new(&mut rng);
        assert_eq!(state.cards().len(), CARD_COUNT);
        for icon in Icon::ALL {
            let copies = state.cards().iter().filter(|card| card.icon == icon).count();
            assert_eq!(copies, 2);
        }
        assert!((0..CARD_COUNT).all(|i| !state.is_face_up(i)));
    }

    #[test]
    fn test_matching_pair_stays_face_up() {
        let mut state = paired_state();
        assert_eq!(state.flip_card(0), Ok(FlipOutcome::Revealed(Icon::Cpu)));
        assert_eq!(state.moves(), 0);
        assert_eq!(state.flip_card(1), Ok(FlipOutcome::Matched(Icon::Cpu)));
        assert_eq!(state.moves(), 1);
        assert_eq!(state.pairs_found(), 1);
        assert!(state.is_face_up(0) && state.is_face_up(1));
        assert!(state.is_matched(0));
        assert_eq!(state.flip_card(0), Err("Card is already matched".to_string()));
    }

    #[test]
    fn test_mismatch_waits_for_hide() {
        let mut state = paired_state();
        state.flip_card(0).unwrap();
        assert_eq!(state.flip_card(2), Ok(FlipOutcome::Mismatch { first: 0, second: 2 }));
        assert_eq!(state.moves(), 1);
        assert!(state.is_face_up(0) && state.is_face_up(2));
        assert_eq!(state.flip_card(4), Err("Two cards are already face up".to_string()));

        state.hide_mismatched();
        assert!(!state.is_face_up(0) && !state.is_face_up(2));
        assert_eq!(state.flip_card(4), Ok(FlipOutcome::Revealed(Icon::Router)));
    }

    #[test]
    fn test_same_card_twice_is_rejected() {
        let mut state = paired_state();
        state.flip_card(3).unwrap();
        assert_eq!(state.flip_card(3), Err("Card is already face up".to_string()));
        assert_eq!(state.flip_card(12), Err("Card out of range".to_string()));
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_all_pairs_win() {
        let mut state = paired_state();
        for pair in 0..PAIR_COUNT {
            state.flip_card(pair * 2).unwrap();
            state.flip_card(pair * 2 + 1).unwrap();
        }
        assert!(state.is_won());
        assert_eq!(state.moves(), PAIR_COUNT as u32);
        assert_eq!(state.flip_card(0), Err("Game is already won".to_string()));
    }

    #[test]
    fn test_reset_starts_over() {
        let mut rng = SessionRng::new(4);
        let mut state = paired_state();
        state.flip_card(0).unwrap();
        state.flip_card(1).unwrap();
        state.reset(&mut rng);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.pairs_found(), 0);
        assert_eq!(state.status(), GameStatus::InProgress);
    }
}

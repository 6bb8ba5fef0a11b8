use crate::games::CandidatePicker;

const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Clever", "Curious", "Quiet", "Golden", "Lucky", "Bright",
    "Nimble", "Gentle", "Quick", "Wise", "Bold", "Sharp", "Witty", "Calm",
];

const NOUNS: &[&str] = &[
    "Falcon", "Otter", "Tiger", "Wolf", "Owl", "Dragon", "Lynx", "Heron",
    "Hawk", "Fox", "Raven", "Badger", "Panda", "Phoenix", "Koala", "Comet",
];

/// Display name for a player who has not picked one, e.g. "Clever Otter".
pub fn generate_player_name<P: CandidatePicker>(picker: &mut P) -> String {
    let adjective = picker.pick(ADJECTIVES).unwrap_or("Guest");
    let noun = picker.pick(NOUNS).unwrap_or("Player");
    format!("{} {}", adjective, noun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;

    #[test]
    fn test_name_has_two_known_words() {
        let mut rng = SessionRng::new(12);
        let name = generate_player_name(&mut rng);
        let (adjective, noun) = name.split_once(' ').unwrap();
        assert!(ADJECTIVES.contains(&adjective));
        assert!(NOUNS.contains(&noun));
    }
}

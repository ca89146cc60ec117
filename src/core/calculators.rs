use crate::core::reduction::reduce;
use crate::domain::model::{KarmicLessons, LoShuGrid, ReducedNumber};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_input;

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    Vowels,
    Consonants,
}

impl NamePart {
    pub fn contains(self, letter: char) -> bool {
        let vowel = VOWELS.contains(&letter);
        match self {
            NamePart::Vowels => vowel,
            NamePart::Consonants => !vowel,
        }
    }
}

/// Pythagorean letter value: A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8.
pub fn letter_value(letter: char) -> Option<u8> {
    let upper = letter.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return None;
    }
    Some((upper as u8 - b'A') % 9 + 1)
}

/// Decimal digits of a date string in order; separators and anything else dropped.
pub fn digit_sequence(date: &str) -> Vec<u8> {
    date.chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

/// Uppercase A-Z letters of a name in order. Accented and non-Latin letters
/// are dropped, so a name written in Devanagari contributes nothing.
pub fn letter_sequence(name: &str) -> Vec<char> {
    name.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// Unreduced digit sum of a date string.
pub fn date_digit_sum(date: &str) -> u32 {
    digit_sequence(date)
        .into_iter()
        .fold(0u32, |acc, d| acc.saturating_add(u32::from(d)))
}

/// Life path number of a date of birth. The digits are not checked against
/// a calendar; only a blank input is rejected.
pub fn life_path(date: &str) -> Result<ReducedNumber> {
    validate_required_input("date_of_birth", date)?;
    Ok(reduce(date_digit_sum(date)))
}

pub fn name_number(name: &str, part: NamePart) -> ReducedNumber {
    let sum = letter_sequence(name)
        .into_iter()
        .filter(|c| part.contains(*c))
        .filter_map(letter_value)
        .fold(0u32, |acc, v| acc.saturating_add(u32::from(v)));
    reduce(sum)
}

/// Reduced value of the vowels in a name.
pub fn soul_urge(name: &str) -> ReducedNumber {
    name_number(name, NamePart::Vowels)
}

/// Reduced value of the consonants in a name.
pub fn expression(name: &str) -> ReducedNumber {
    name_number(name, NamePart::Consonants)
}

pub fn karmic_lessons(name: &str) -> KarmicLessons {
    let mut seen = [false; 10];
    for value in letter_sequence(name).into_iter().filter_map(letter_value) {
        seen[usize::from(value)] = true;
    }
    KarmicLessons::new((1..=9u8).filter(|d| !seen[usize::from(*d)]).collect())
}

/// Splits the Lo Shu digits into those appearing in the date and those that
/// do not. Zero has no cell and is ignored.
pub fn lo_shu(date: &str) -> LoShuGrid {
    let digits = digit_sequence(date);
    let (present, missing): (Vec<u8>, Vec<u8>) = LoShuGrid::ORDER
        .into_iter()
        .partition(|cell| digits.contains(cell));
    LoShuGrid { present, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::NumerologyError;

    #[test]
    fn test_letter_value_table() {
        let expected = [
            ('A', 1), ('B', 2), ('C', 3), ('D', 4), ('E', 5), ('F', 6), ('G', 7), ('H', 8),
            ('I', 9), ('J', 1), ('K', 2), ('L', 3), ('M', 4), ('N', 5), ('O', 6), ('P', 7),
            ('Q', 8), ('R', 9), ('S', 1), ('T', 2), ('U', 3), ('V', 4), ('W', 5), ('X', 6),
            ('Y', 7), ('Z', 8),
        ];
        for (letter, value) in expected {
            assert_eq!(letter_value(letter), Some(value), "letter {}", letter);
            assert_eq!(letter_value(letter.to_ascii_lowercase()), Some(value));
        }
        assert_eq!(letter_value('1'), None);
        assert_eq!(letter_value('é'), None);
        assert_eq!(letter_value('अ'), None);
    }

    #[test]
    fn test_sequences_drop_noise() {
        assert_eq!(digit_sequence("1990-01-01"), vec![1, 9, 9, 0, 0, 1, 0, 1]);
        assert_eq!(digit_sequence("01/02/2003"), vec![0, 1, 0, 2, 2, 0, 0, 3]);
        assert_eq!(digit_sequence("no digits"), Vec::<u8>::new());
        assert_eq!(letter_sequence("Zoë O'Neil 2"), vec!['Z', 'O', 'O', 'N', 'E', 'I', 'L']);
        assert!(letter_sequence("आशा").is_empty());
    }

    #[test]
    fn test_life_path() {
        assert_eq!(life_path("1990-01-01").unwrap().value(), 3);
        assert_eq!(life_path("1985/07/19").unwrap().value(), 4); // 40 -> 4
        assert_eq!(life_path("2009-09-02").unwrap().value(), 22);
        assert_eq!(date_digit_sum("1990-01-01"), 21);
    }

    #[test]
    fn test_life_path_rejects_blank_date() {
        assert!(matches!(
            life_path(""),
            Err(NumerologyError::MissingRequiredInput { ref field }) if field == "date_of_birth"
        ));
        assert!(life_path("   ").is_err());
    }

    #[test]
    fn test_life_path_accepts_non_calendar_digits() {
        assert_eq!(life_path("9999-99-99").unwrap().value(), 9); // 72 -> 9
        assert_eq!(life_path("unknown").unwrap().value(), 0);
    }

    #[test]
    fn test_soul_urge_and_expression() {
        // JOHN: vowel O=6; consonants J=1 H=8 N=5 -> 14 -> 5
        assert_eq!(soul_urge("John").value(), 6);
        assert_eq!(expression("John").value(), 5);
        // Case and separators do not matter
        assert_eq!(soul_urge("j o-h n"), soul_urge("JOHN"));
    }

    #[test]
    fn test_name_without_vowels_gives_zero() {
        assert_eq!(soul_urge("Brynn").value(), 0);
        assert_eq!(expression("Aeiou").value(), 0);
        assert_eq!(soul_urge("").value(), 0);
    }

    #[test]
    fn test_vowels_and_consonants_partition_letters() {
        for name in ["Asha Verma", "Ravi Kumar", "Brynn", "Zoë", "Mary-Jane O'Connor"] {
            let letters = letter_sequence(name);
            let vowels: Vec<char> = letters.iter().copied().filter(|c| NamePart::Vowels.contains(*c)).collect();
            let consonants: Vec<char> = letters.iter().copied().filter(|c| NamePart::Consonants.contains(*c)).collect();
            assert_eq!(vowels.len() + consonants.len(), letters.len());
            assert!(vowels.iter().all(|c| !consonants.contains(c)));
        }
    }

    #[test]
    fn test_karmic_lessons_for_low_letters() {
        // A=1, B=2, C=3, J=1, K=2, L=3, S=1, T=2, U=3
        let lessons = karmic_lessons("Cab Jul St");
        assert_eq!(lessons.digits(), &[4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_karmic_lessons_complete_name() {
        // A B C D E F G H I covers 1-9
        assert!(karmic_lessons("Abcdefghi").is_empty());
        assert_eq!(karmic_lessons("").digits(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_lo_shu_partition() {
        let grid = lo_shu("1990-01-01");
        assert_eq!(grid.present, vec![9, 1]);
        assert_eq!(grid.missing, vec![4, 2, 3, 5, 7, 8, 6]);
    }

    #[test]
    fn test_lo_shu_ignores_zero() {
        let grid = lo_shu("0000");
        assert!(grid.present.is_empty());
        assert_eq!(grid.missing, LoShuGrid::ORDER.to_vec());
        assert!(!grid.is_present(0) && !grid.missing.contains(&0));
    }
}

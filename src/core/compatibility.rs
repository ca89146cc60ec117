use crate::domain::model::{
    CompatibilityCategory, CompatibilityResult, Language, ReducedNumber, TextPair,
};

const VERY_HIGH: TextPair = TextPair::new(
    "आप एक-दूसरे को गहराई से समझते हैं। आध्यात्मिक जुड़ाव।",
    "Deep mutual understanding. Spiritual alignment.",
);
const HIGH: TextPair = TextPair::new(
    "आपकी ऊर्जाएँ पूरक हैं। संतुलन और समझ संभव है।",
    "Your energies are complementary. Balance and understanding are possible.",
);
const MEDIUM: TextPair = TextPair::new(
    "सीखने के अवसर हैं, लेकिन प्रयास की आवश्यकता है।",
    "Growth opportunities, but requires effort.",
);
const LOW: TextPair = TextPair::new(
    "चुनौतियाँ हैं, लेकिन सीखना संभव है।",
    "Challenges exist, but learning is possible.",
);

/// Buckets the distance between two life path numbers. Master numbers can
/// push the distance past 9, which always lands in `Low`.
pub fn category_for_difference(diff: u32) -> CompatibilityCategory {
    match diff {
        0 => CompatibilityCategory::VeryHigh,
        1 | 3 | 6 | 9 => CompatibilityCategory::High,
        2 | 4 | 5 | 7 | 8 => CompatibilityCategory::Medium,
        _ => CompatibilityCategory::Low,
    }
}

pub fn description(category: CompatibilityCategory, lang: Language) -> &'static str {
    let text = match category {
        CompatibilityCategory::VeryHigh => VERY_HIGH,
        CompatibilityCategory::High => HIGH,
        CompatibilityCategory::Medium => MEDIUM,
        CompatibilityCategory::Low => LOW,
    };
    text.get(lang)
}

pub fn compatibility(a: ReducedNumber, b: ReducedNumber, lang: Language) -> CompatibilityResult {
    let category = category_for_difference(a.value().abs_diff(b.value()));
    CompatibilityResult {
        category,
        description: description(category, lang).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reduction::reduce;

    fn score(a: u32, b: u32) -> CompatibilityCategory {
        compatibility(reduce(a), reduce(b), Language::English).category
    }

    #[test]
    fn test_buckets() {
        assert_eq!(score(5, 5), CompatibilityCategory::VeryHigh);
        assert_eq!(score(1, 4), CompatibilityCategory::High);
        assert_eq!(score(1, 6), CompatibilityCategory::Medium);
        assert_eq!(score(1, 33), CompatibilityCategory::Low);
    }

    #[test]
    fn test_order_does_not_matter() {
        for a in [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33] {
            for b in [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33] {
                assert_eq!(score(a, b), score(b, a));
            }
        }
    }

    #[test]
    fn test_every_difference_has_a_bucket() {
        assert_eq!(category_for_difference(9), CompatibilityCategory::High);
        assert_eq!(category_for_difference(10), CompatibilityCategory::Low);
        assert_eq!(category_for_difference(u32::MAX), CompatibilityCategory::Low);
        // 11 vs 2 is 9 apart
        assert_eq!(score(11, 2), CompatibilityCategory::High);
    }

    #[test]
    fn test_descriptions_are_localized() {
        let en = compatibility(reduce(5), reduce(5), Language::English);
        assert_eq!(en.description, "Deep mutual understanding. Spiritual alignment.");
        let hi = compatibility(reduce(1), reduce(33), Language::Hindi);
        assert_eq!(hi.description, "चुनौतियाँ हैं, लेकिन सीखना संभव है।");
        assert_eq!(hi.category.label(), "Low");
    }
}

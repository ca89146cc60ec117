use crate::domain::model::{Interpretation, Language, ReducedNumber, TextPair};

#[derive(Debug, Clone, Copy)]
struct Entry {
    title: TextPair,
    description: TextPair,
}

const UNKNOWN_TITLE: &str = "Unknown";
const UNKNOWN_DESCRIPTION: &str = "Interpretation not available.";

fn entry(number: u32) -> Option<Entry> {
    let (title, description) = match number {
        1 => (
            TextPair::new("स्वतंत्र नेता", "Independent Leader"),
            TextPair::new(
                "आप नए रास्ते बनाते हैं। चुनौती: जिद। करियर: उद्यमिता। मंत्र: 'मैं अपना रास्ता बनाता हूँ।'",
                "You forge new paths. Challenge: Stubbornness. Career: Entrepreneurship. Mantra: 'I create my own path.'",
            ),
        ),
        2 => (
            TextPair::new("शांति निर्माता", "Peacemaker"),
            TextPair::new(
                "आप सहयोग में माहिर हैं। चुनौती: अति-संवेदनशीलता। करियर: काउंसलिंग। मंत्र: 'मैं संतुलन लाता हूँ।'",
                "You excel in cooperation. Challenge: Oversensitivity. Career: Counseling. Mantra: 'I bring harmony.'",
            ),
        ),
        3 => (
            TextPair::new("रचनात्मक अभिव्यक्ति", "Creative Expression"),
            TextPair::new(
                "आपकी भाषा आपकी ताकत है। चुनौती: फोकस। करियर: कला, मीडिया। मंत्र: 'मैं प्रेरणा देता हूँ।'",
                "Your voice is your power. Challenge: Focus. Career: Arts, Media. Mantra: 'I inspire others.'",
            ),
        ),
        4 => (
            TextPair::new("व्यावहारिक निर्माता", "Practical Builder"),
            TextPair::new(
                "आप मेहनत से सब कुछ बना सकते हैं। चुनौती: कठोरता। करियर: इंजीनियरिंग। मंत्र: 'मैं स्थिरता लाता हूँ।'",
                "You build through hard work. Challenge: Rigidity. Career: Engineering. Mantra: 'I create stability.'",
            ),
        ),
        5 => (
            TextPair::new("स्वतंत्रता प्रेमी", "Freedom Lover"),
            TextPair::new(
                "आप परिवर्तन से जीते हैं। चुनौती: अनुशासन की कमी। करियर: यात्रा, बिक्री। मंत्र: 'मैं स्वतंत्र हूँ।'",
                "You thrive on change. Challenge: Lack of discipline. Career: Travel, Sales. Mantra: 'I am free.'",
            ),
        ),
        6 => (
            TextPair::new("जिम्मेदार देखभालकर्ता", "Responsible Caregiver"),
            TextPair::new(
                "आप परिवार के लिए सब कुछ कर सकते हैं। चुनौती: ओवरगिविंग। करियर: शिक्षा, चिकित्सा। मंत्र: 'मैं प्रेम से सेवा करता हूँ।'",
                "You give everything for family. Challenge: Over-giving. Career: Teaching, Healthcare. Mantra: 'I serve with love.'",
            ),
        ),
        7 => (
            TextPair::new("आध्यात्मिक खोजी", "Spiritual Seeker"),
            TextPair::new(
                "आप गहराई में सच्चाई ढूंढते हैं। चुनौती: भरोसा करना। करियर: शोध, आध्यात्म। मंत्र: 'मैं ज्ञान पाता हूँ।'",
                "You seek truth in depth. Challenge: Trust. Career: Research, Spirituality. Mantra: 'I find wisdom.'",
            ),
        ),
        8 => (
            TextPair::new("शक्ति और सफलता", "Power & Success"),
            TextPair::new(
                "आप धन और प्रभाव बना सकते हैं। चुनौती: नैतिकता। करियर: वित्त, नेतृत्व। मंत्र: 'मैं संतुलित शक्ति रखता हूँ।'",
                "You manifest wealth and influence. Challenge: Ethics. Career: Finance, Leadership. Mantra: 'I hold power with balance.'",
            ),
        ),
        9 => (
            TextPair::new("मानवता के लिए दाता", "Humanitarian Giver"),
            TextPair::new(
                "आप दूसरों के लिए जीते हैं। चुनौती: अपनी उपेक्षा। करियर: सेवा, कला। मंत्र: 'मैं सभी के लिए हूँ।'",
                "You live for others. Challenge: Self-neglect. Career: Service, Arts. Mantra: 'I am here for all.'",
            ),
        ),
        11 => (
            TextPair::new("आध्यात्मिक दूत (मास्टर)", "Spiritual Messenger (Master)"),
            TextPair::new(
                "आप प्रेरणा और अंतर्ज्ञान से भरे हैं। चुनौती: भावनात्मक अतिभार। करियर: आध्यात्मिक शिक्षक। मंत्र: 'मैं प्रकाश लाता हूँ।'",
                "You are filled with inspiration and intuition. Challenge: Emotional overwhelm. Career: Spiritual teacher. Mantra: 'I channel light.'",
            ),
        ),
        22 => (
            TextPair::new("महान निर्माता (मास्टर)", "Master Builder (Master)"),
            TextPair::new(
                "आप विशाल सपनों को वास्तविकता में बदल सकते हैं। चुनौती: दबाव। करियर: सामाजिक उद्यम। मंत्र: 'मैं विश्व को बदलता हूँ।'",
                "You turn grand visions into reality. Challenge: Pressure. Career: Social enterprise. Mantra: 'I build a better world.'",
            ),
        ),
        33 => (
            TextPair::new("महान गुरु (मास्टर)", "Master Teacher (Master)"),
            TextPair::new(
                "आपका उद्देश्य मानवता की सेवा करना है। चुनौती: आत्म-देखभाल। करियर: चिकित्सक, शिक्षक। मंत्र: 'मैं प्रेम से सेवा करता हूँ।'",
                "Your purpose is to serve humanity. Challenge: Self-care. Career: Healer, Educator. Mantra: 'I serve with unconditional love.'",
            ),
        ),
        _ => return None,
    };
    Some(Entry { title, description })
}

/// Title and description for `number` in `lang`. Numbers without an entry,
/// 0 included, get the "Unknown" record in either language.
pub fn lookup(number: ReducedNumber, lang: Language) -> Interpretation {
    lookup_value(number.value(), lang)
}

pub fn lookup_value(number: u32, lang: Language) -> Interpretation {
    match entry(number) {
        Some(e) => Interpretation {
            title: e.title.get(lang).to_string(),
            description: e.description.get(lang).to_string(),
        },
        None => {
            tracing::debug!("No interpretation for {}, using fallback", number);
            Interpretation {
                title: UNKNOWN_TITLE.to_string(),
                description: UNKNOWN_DESCRIPTION.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reduction::reduce;

    const KEYS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

    #[test]
    fn test_every_key_has_both_languages() {
        for key in KEYS {
            let en = lookup_value(key, Language::English);
            let hi = lookup_value(key, Language::Hindi);
            assert_ne!(en.title, UNKNOWN_TITLE, "missing entry for {}", key);
            assert_ne!(en.title, hi.title);
            assert_ne!(en.description, hi.description);
        }
    }

    #[test]
    fn test_known_lookup() {
        let one = lookup(reduce(10), Language::English);
        assert_eq!(one.title, "Independent Leader");
        assert!(one.description.starts_with("You forge new paths."));

        let master = lookup(reduce(29), Language::Hindi);
        assert_eq!(master.title, "आध्यात्मिक दूत (मास्टर)");
    }

    #[test]
    fn test_fallback_for_missing_keys() {
        for key in [0, 10, 12, 44, 100] {
            for lang in [Language::English, Language::Hindi] {
                let interp = lookup_value(key, lang);
                assert_eq!(interp.title, "Unknown");
                assert_eq!(interp.description, "Interpretation not available.");
            }
            assert!(entry(key).is_none());
        }
    }
}

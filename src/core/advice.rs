//! Guidance text assembled from the Lo Shu digits a date of birth lacks.
//!
//! Each generator starts from a base sentence and appends one fragment per
//! missing digit on its check list, in check-list order. Digits not on a
//! generator's list add nothing to that generator.

use crate::domain::model::{join_digits, Advice, Language, LoShuGrid, ReducedNumber, TextPair};

type Fragment = (u8, TextPair);

const CAREER_CHECKS: [Fragment; 4] = [
    (
        4,
        TextPair::new(
            "बड़े प्रोजेक्ट लेने से पहले रोज़ की निश्चित दिनचर्या से अनुशासन बनाएं।",
            "Build discipline with fixed daily routines before taking on big projects.",
        ),
    ),
    (
        5,
        TextPair::new(
            "जल्दी निर्णय लेने और उन पर टिके रहने का अभ्यास करें।",
            "Practice making decisions quickly and sticking to them.",
        ),
    ),
    (
        1,
        TextPair::new(
            "अपने विचार खुलकर रखें; काम में आत्मविश्वास अभ्यास से आता है।",
            "Speak up about your ideas; confidence at work comes with practice.",
        ),
    ),
    (
        3,
        TextPair::new(
            "स्पष्ट संवाद और प्रस्तुति कौशल पर काम करें।",
            "Work on clear communication and presentation skills.",
        ),
    ),
];

const MONEY_BASE: TextPair = TextPair::new(
    "पैसा आएगा, लेकिन आपको बचत और लंबे समय की योजना बनाने की आवश्यकता है। भावनात्मक निर्णय से बचें।",
    "Money will come, but you need to save and plan long-term. Avoid emotional decisions.",
);

const MONEY_CHECKS: [Fragment; 3] = [
    (
        8,
        TextPair::new(
            "बजट और निवेश की बुनियादी बातें सीखें; वित्तीय समझ आपको सहज नहीं मिलती।",
            "Learn the basics of budgeting and investing; financial literacy does not come naturally to you.",
        ),
    ),
    (
        4,
        TextPair::new(
            "बचत को स्वचालित करें ताकि पैसा इच्छाशक्ति पर निर्भर न रहे।",
            "Automate your savings so they do not depend on willpower.",
        ),
    ),
    (
        2,
        TextPair::new(
            "बड़ी खरीदारी से पहले किसी और की राय लें।",
            "Get a second opinion before large purchases.",
        ),
    ),
];

const RELATIONSHIP_BASE: TextPair = TextPair::new(
    "आप दिल से देते हैं, लेकिन जब आपको सम्मान नहीं मिलता तो आप घायल हो जाते हैं। स्पष्ट संचार रखें।",
    "You give from the heart, but get hurt when not appreciated. Maintain clear communication.",
);

const RELATIONSHIP_CHECKS: [Fragment; 4] = [
    (
        6,
        TextPair::new(
            "पारिवारिक जिम्मेदारियों में सक्रिय भाग लें; अपने लोग इसे महसूस करते हैं।",
            "Take an active part in family responsibilities; the people close to you notice.",
        ),
    ),
    (
        2,
        TextPair::new(
            "अपने साथी की अनकही भावनाओं पर ध्यान दें।",
            "Pay attention to your partner's unspoken feelings.",
        ),
    ),
    (
        7,
        TextPair::new(
            "धैर्य रखें; भरोसा धीरे-धीरे बढ़ता है।",
            "Be patient; trust grows slowly.",
        ),
    ),
    (
        9,
        TextPair::new(
            "असहमति में भी करुणा दिखाएं।",
            "Show compassion even when you disagree.",
        ),
    ),
];

const DISCLAIMER: TextPair = TextPair::new(
    "ये भविष्य की गारंटी नहीं है — ये एक स्व-समझ का उपकरण है। आपकी मेहनत, कौशल और कार्य ही आपका भविष्य बनाते हैं।",
    "This is not a guarantee of future — it’s a tool for self-understanding. Your effort, skill, and action shape your destiny.",
);

fn career_fields(life_path: u32) -> TextPair {
    match life_path {
        1 => TextPair::new("उद्यमिता, नेतृत्व", "Entrepreneurship, Leadership"),
        2 => TextPair::new("काउंसलिंग, मध्यस्थता", "Counseling, Mediation"),
        3 => TextPair::new("कला, मीडिया, लेखन", "Arts, Media, Writing"),
        4 => TextPair::new("इंजीनियरिंग, प्रोजेक्ट मैनेजमेंट", "Engineering, Project Management"),
        5 => TextPair::new("यात्रा, बिक्री, मार्केटिंग", "Travel, Sales, Marketing"),
        6 => TextPair::new("शिक्षा, चिकित्सा", "Teaching, Healthcare"),
        7 => TextPair::new("शोध, आध्यात्म", "Research, Spirituality"),
        8 => TextPair::new("वित्त, नेतृत्व", "Finance, Leadership"),
        9 => TextPair::new("बिक्री, शिक्षण, एनजीओ, प्रबंधन", "Sales, Teaching, NGO, Management"),
        11 => TextPair::new("आध्यात्मिक शिक्षण, काउंसलिंग", "Spiritual teaching, Counseling"),
        22 => TextPair::new("सामाजिक उद्यम, वास्तुकला", "Social enterprise, Architecture"),
        33 => TextPair::new("चिकित्सा, शिक्षा", "Healing, Education"),
        _ => TextPair::new(
            "ऐसा काम चुनें जो आपकी स्वाभाविक क्षमताओं का उपयोग करे",
            "Work that uses your natural strengths",
        ),
    }
}

/// Name of the life area a Lo Shu digit stands for.
pub fn area_name(digit: u8) -> Option<TextPair> {
    let area = match digit {
        1 => TextPair::new("आत्म-अभिव्यक्ति", "self-expression"),
        2 => TextPair::new("संवेदनशीलता", "sensitivity"),
        3 => TextPair::new("कल्पनाशीलता", "imagination"),
        4 => TextPair::new("अनुशासन", "discipline"),
        5 => TextPair::new("निर्णय लेने की क्षमता", "decision-making"),
        6 => TextPair::new("पारिवारिक जिम्मेदारी", "family responsibility"),
        7 => TextPair::new("धैर्य", "patience"),
        8 => TextPair::new("धन प्रबंधन", "money management"),
        9 => TextPair::new("करुणा", "compassion"),
        _ => return None,
    };
    Some(area)
}

fn append_fragments(base: String, missing: &[u8], checks: &[Fragment], lang: Language) -> String {
    checks
        .iter()
        .filter(|(digit, _)| missing.contains(digit))
        .fold(base, |mut text, (_, fragment)| {
            text.push(' ');
            text.push_str(fragment.get(lang));
            text
        })
}

pub fn career_advice(missing: &[u8], life_path: ReducedNumber, lang: Language) -> String {
    let fields = career_fields(life_path.value()).get(lang);
    let base = match lang {
        Language::Hindi => format!("आपके लिए उपयुक्त क्षेत्र: {}।", fields),
        Language::English => format!("Suitable fields for you: {}.", fields),
    };
    append_fragments(base, missing, &CAREER_CHECKS, lang)
}

pub fn money_advice(missing: &[u8], lang: Language) -> String {
    append_fragments(MONEY_BASE.get(lang).to_string(), missing, &MONEY_CHECKS, lang)
}

pub fn relationship_advice(missing: &[u8], lang: Language) -> String {
    append_fragments(
        RELATIONSHIP_BASE.get(lang).to_string(),
        missing,
        &RELATIONSHIP_CHECKS,
        lang,
    )
}

pub fn lo_shu_summary(grid: &LoShuGrid, lang: Language) -> String {
    if grid.missing.is_empty() {
        return match lang {
            Language::Hindi => {
                "आपके Lo Shu Grid में 1 से 9 तक सभी नंबर मौजूद हैं। आपकी ऊर्जाएँ संतुलित हैं।"
                    .to_string()
            }
            Language::English => {
                "Your Lo Shu Grid has every number from 1 to 9. Your energies are well balanced."
                    .to_string()
            }
        };
    }

    let areas = grid
        .missing
        .iter()
        .filter_map(|d| area_name(*d).map(|area| format!("{} ({})", area.get(lang), d)))
        .collect::<Vec<_>>()
        .join(", ");
    let digits = join_digits(&grid.missing);

    match lang {
        Language::Hindi => format!(
            "आपके Lo Shu Grid में निम्न नंबर अनुपस्थित हैं: {}। इसका अर्थ: आपको इन क्षेत्रों में अभ्यास करने की आवश्यकता है: {}।",
            digits, areas
        ),
        Language::English => format!(
            "Your Lo Shu Grid is missing these numbers: {}. This means you need to practice in these areas: {}.",
            digits, areas
        ),
    }
}

pub fn disclaimer(lang: Language) -> &'static str {
    DISCLAIMER.get(lang)
}

pub fn advise(grid: &LoShuGrid, life_path: ReducedNumber, lang: Language) -> Advice {
    Advice {
        lo_shu_summary: lo_shu_summary(grid, lang),
        career: career_advice(&grid.missing, life_path, lang),
        money: money_advice(&grid.missing, lang),
        relationships: relationship_advice(&grid.missing, lang),
    }
}

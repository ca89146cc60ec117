use crate::domain::model::{join_digits, Certificate, Language, LoShuGrid, NumberReading, Report, TextPair};
use crate::domain::ports::{OutputFormat, ReportRenderer};
use crate::utils::error::Result;
use std::fmt::Write as _;

const HEADING_PROFILE: TextPair = TextPair::new("आपका न्यूमेरोलॉजी प्रोफाइल", "Your Numerology Profile");
const LABEL_NAME: TextPair = TextPair::new("नाम", "Name");
const LABEL_DOB: TextPair = TextPair::new("जन्म तिथि", "Date of Birth");
const HEADING_LIFE_PATH: TextPair = TextPair::new(
    "1. लाइफ पाथ नंबर (जीवन का मिशन)",
    "1. Life Path Number (Life Mission)",
);
const HEADING_SOUL_URGE: TextPair = TextPair::new(
    "2. सोल अर्ज नंबर (हृदय की इच्छा)",
    "2. Soul Urge Number (Heart’s Desire)",
);
const HEADING_EXPRESSION: TextPair = TextPair::new(
    "3. एक्सप्रेशन नंबर (व्यक्तित्व)",
    "3. Expression Number (Personality)",
);
const HEADING_KARMIC: TextPair = TextPair::new("4. कर्मिक लेसन्स", "4. Karmic Lessons");
const HEADING_COMPATIBILITY: TextPair = TextPair::new("5. संगतता विश्लेषण", "5. Compatibility Analysis");
const HEADING_LO_SHU: TextPair = TextPair::new("लो शु ग्रिड विश्लेषण", "Lo Shu Grid Analysis");
const LABEL_PRESENT: TextPair = TextPair::new(
    "आपके जन्म तिथि में मौजूद अंक:",
    "Numbers present in your DOB:",
);
const HEADING_CAREER: TextPair = TextPair::new("करियर", "Career");
const HEADING_MONEY: TextPair = TextPair::new("धन", "Money");
const HEADING_RELATIONSHIPS: TextPair = TextPair::new("संबंध", "Relationships");
const HEADING_TRUTH: TextPair = TextPair::new("सबसे ज़रूरी सच्चाई", "Most Important Truth");
const LABEL_PARTNER: TextPair = TextPair::new("साथी", "Partner");
const LABEL_LIFE_PATH: TextPair = TextPair::new("लाइफ पाथ", "Life Path");
const LABEL_SCORE: TextPair = TextPair::new("स्कोर:", "Score:");

const HEADING_CERTIFICATE: TextPair = TextPair::new("न्यूमेरोलॉजी प्रमाणपत्र", "Numerology Certificate");
const LABEL_SERIAL: TextPair = TextPair::new("प्रमाणपत्र संख्या", "Certificate No");
const LABEL_SOUL_URGE: TextPair = TextPair::new("सोल अर्ज", "Soul Urge");
const LABEL_EXPRESSION: TextPair = TextPair::new("एक्सप्रेशन", "Expression");
const LABEL_KARMIC: TextPair = TextPair::new("कर्मिक लेसन्स", "Karmic Lessons");
const LABEL_ISSUED: TextPair = TextPair::new("जारी करने की तिथि", "Issued on");

/// Plain-text report with the same sections as the web page.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

/// Pretty-printed JSON of the report types.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

pub fn renderer_for(format: OutputFormat) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

fn section(out: &mut String, heading: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(heading);
    out.push('\n');
}

fn write_reading(out: &mut String, prefix: &str, reading: &NumberReading) {
    // String 寫入不會失敗
    let _ = writeln!(out, "{}{} – {}", prefix, reading.number, reading.title);
    let _ = writeln!(out, "{}", reading.description);
}

/// Three rows of the square; digits in the date are shown, the rest as `·`.
pub fn render_grid(grid: &LoShuGrid) -> String {
    let border = "+---+---+---+";
    let mut out = String::new();
    out.push_str(border);
    out.push('\n');
    for row in grid.rows() {
        for (digit, present) in row {
            if present {
                let _ = write!(out, "| {} ", digit);
            } else {
                out.push_str("| · ");
            }
        }
        out.push_str("|\n");
        out.push_str(border);
        out.push('\n');
    }
    out
}

impl ReportRenderer for TextRenderer {
    fn render_report(&self, report: &Report) -> Result<String> {
        let lang = report.language;
        let t = |pair: TextPair| pair.get(lang);
        let mut out = String::new();

        section(&mut out, t(HEADING_PROFILE));
        let _ = writeln!(out, "{}: {}", t(LABEL_NAME), report.name);
        let _ = writeln!(out, "{}: {}", t(LABEL_DOB), report.date_of_birth);

        section(&mut out, t(HEADING_LIFE_PATH));
        let prefix = format!("{} → ", report.date_digit_sum);
        write_reading(&mut out, &prefix, &report.life_path);

        section(&mut out, t(HEADING_SOUL_URGE));
        write_reading(&mut out, "", &report.soul_urge);

        section(&mut out, t(HEADING_EXPRESSION));
        write_reading(&mut out, "", &report.expression);

        section(&mut out, t(HEADING_KARMIC));
        let _ = writeln!(out, "{}", report.karmic_lessons_text);

        if let Some(compat) = &report.compatibility {
            section(&mut out, t(HEADING_COMPATIBILITY));
            let _ = writeln!(
                out,
                "{}: {} ({} {})",
                t(LABEL_PARTNER),
                compat.partner_name,
                t(LABEL_LIFE_PATH),
                compat.partner_life_path
            );
            let _ = writeln!(out, "{} {}", t(LABEL_SCORE), compat.result.category);
            let _ = writeln!(out, "{}", compat.result.description);
        }

        section(&mut out, t(HEADING_LO_SHU));
        let present = if report.lo_shu.present.is_empty() {
            "-".to_string()
        } else {
            join_digits(&report.lo_shu.present)
        };
        let _ = writeln!(out, "{} {}", t(LABEL_PRESENT), present);
        out.push_str(&render_grid(&report.lo_shu));
        let _ = writeln!(out, "{}", report.advice.lo_shu_summary);

        section(&mut out, t(HEADING_CAREER));
        let _ = writeln!(out, "{}", report.advice.career);

        section(&mut out, t(HEADING_MONEY));
        let _ = writeln!(out, "{}", report.advice.money);

        section(&mut out, t(HEADING_RELATIONSHIPS));
        let _ = writeln!(out, "{}", report.advice.relationships);

        section(&mut out, t(HEADING_TRUTH));
        let _ = writeln!(out, "{}", report.disclaimer);

        Ok(out)
    }

    fn render_certificate(&self, certificate: &Certificate, lang: Language) -> Result<String> {
        let t = |pair: TextPair| pair.get(lang);
        let mut out = String::new();
        section(&mut out, t(HEADING_CERTIFICATE));
        let rows = [
            (t(LABEL_SERIAL), certificate.serial.clone()),
            (t(LABEL_NAME), certificate.name.clone()),
            (t(LABEL_LIFE_PATH), certificate.life_path.to_string()),
            (t(LABEL_SOUL_URGE), certificate.soul_urge.to_string()),
            (t(LABEL_EXPRESSION), certificate.expression.to_string()),
            (t(LABEL_KARMIC), certificate.karmic_lessons.clone()),
            (t(LABEL_ISSUED), certificate.issued_on.format("%Y-%m-%d").to_string()),
        ];
        for (label, value) in rows {
            let _ = writeln!(out, "{}: {}", label, value);
        }
        Ok(out)
    }
}

impl ReportRenderer for JsonRenderer {
    fn render_report(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn render_certificate(&self, certificate: &Certificate, _lang: Language) -> Result<String> {
        Ok(serde_json::to_string_pretty(certificate)?)
    }
}

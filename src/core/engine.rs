use crate::core::{advice, calculators, compatibility, interpretation};
use crate::domain::model::{
    CompatibilityReport, Language, NumberReading, RawInput, ReducedNumber, Report,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_input;

fn reading(number: ReducedNumber, lang: Language) -> NumberReading {
    NumberReading::new(number, interpretation::lookup(number, lang))
}

/// Builds the full report for one person, plus compatibility when both
/// partner fields are filled in.
///
/// Blank name or date of birth is rejected before anything is computed.
pub fn generate_report(input: &RawInput, lang: Language) -> Result<Report> {
    validate_required_input("name", &input.name)?;
    validate_required_input("date_of_birth", &input.date_of_birth)?;

    let name = input.name.trim();
    let dob = input.date_of_birth.trim();

    let life_path = calculators::life_path(dob)?;
    let soul_urge = calculators::soul_urge(name);
    let expression = calculators::expression(name);
    let karmic_lessons = calculators::karmic_lessons(name);
    let lo_shu = calculators::lo_shu(dob);

    tracing::debug!(
        life_path = life_path.value(),
        soul_urge = soul_urge.value(),
        expression = expression.value(),
        missing = ?lo_shu.missing,
        "Derived numbers computed"
    );

    let compatibility = match input.partner() {
        Some((partner_name, partner_dob)) => {
            let partner_life_path = calculators::life_path(partner_dob)?;
            let result = compatibility::compatibility(life_path, partner_life_path, lang);
            tracing::debug!(
                partner_life_path = partner_life_path.value(),
                category = %result.category,
                "Compatibility computed"
            );
            Some(CompatibilityReport {
                partner_name: partner_name.to_string(),
                partner_life_path,
                result,
            })
        }
        None => {
            if input.partner_name.is_some() || input.partner_dob.is_some() {
                tracing::warn!("Partner name and date of birth are both needed, skipping compatibility");
            }
            None
        }
    };

    let advice = advice::advise(&lo_shu, life_path, lang);

    Ok(Report {
        name: name.to_string(),
        date_of_birth: dob.to_string(),
        language: lang,
        date_digit_sum: calculators::date_digit_sum(dob),
        life_path: reading(life_path, lang),
        soul_urge: reading(soul_urge, lang),
        expression: reading(expression, lang),
        karmic_lessons_text: karmic_lessons.describe(lang),
        karmic_lessons,
        lo_shu,
        advice,
        disclaimer: advice::disclaimer(lang).to_string(),
        compatibility,
    })
}

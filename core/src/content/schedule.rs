//! Day-to-topic mapping for the 45-day exam schedule.

use serde::Serialize;

use crate::types::Day;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayTopic {
    pub day:      Day,
    pub topic:    String,
    pub subtopic: Option<String>,
}

/// (topic, subtopic) for days 1..=45, in order.
static SCHEDULE: [(&str, &str); 45] = [
    ("Adrenergic Agonist", "General Pharmacology"),
    ("Adrenergic Agonist", "General Pharmacology"),
    ("Adrenergic Antagonist", "Antidote & Pregnancy Choices"),
    ("Adrenergic Antagonist", "Antidote & Pregnancy Choices"),
    ("Cholinergic Agonist", "Sources of Drug Information, Hypolipidemic Agents"),
    ("Cholinergic Agonist", "Sources of Drug Information, Hypolipidemic Agents"),
    ("Cholinergic Antagonist", "Inventory Control"),
    ("Asthma & NSAIDs", "Cough"),
    ("CVS Introduction", "Histamines & Antihistamines"),
    ("Diuretics & CHF Intro", "Peptic Ulcer"),
    ("Congestive Heart Failure", "Institutional Review Board"),
    ("Angina", "Hypolipidemic Agents, Regulations"),
    ("Arrhythmia", "Statistics 1"),
    ("Blood Drugs", "Pharmacoepidemiology, Hypertension"),
    ("Blood Drugs", "Emetics & Antiemetics"),
    ("Q&A Discussion", "Suspension vs. Emulsion"),
    ("Dose Calculation", "Percentage Type"),
    ("Molarity & Molality", "Milli-equivalence, Osmolar Concentration"),
    ("Parts Per Million", "Pharmacokinetics-1"),
    ("Pharmacokinetics-2", "Dilution & Mixing"),
    ("Bioavailability", "Infusion Rate, Drop Rate, Insulin Dose Calc"),
    ("Q&A Discussion", "Androgens"),
    ("Pituitary & Adrenal Hormones", "ADR Classification"),
    ("Thyroid Hormones", "Immunosuppressants"),
    ("Estrogens & OCP", "Medication Error"),
    ("Study Designs & Clinical Trial", "Constipation & Diarrhea Drugs"),
    ("Insulin & OHA", "Insulin Dosing, Pharmacogenomics"),
    ("Insulin & OHA", "Insulin Dosing, Pharmacogenomics"),
    ("Sedatives & Antidepressants", "Efficacy, Potency, Communication Skills"),
    ("GA & LA", "Child Pugh & CHA₂DS₂VASc Score"),
    ("Opioids", "Herbal Drugs, RF Value, Chromatography"),
    ("Antipsychotics & Antimanic", "Pharmacoeconomics"),
    ("Neurodegenerative Disorders", "Alcohol"),
    ("Epilepsy", "Vitamins"),
    ("RA, Osteoporosis & Gout", "Corrected Phenytoin Level"),
    ("Microbiology Introduction", "Cell Wall Synthesis Inhibitors, Immunology"),
    ("Microbiology", "Cell Wall Synthesis Inhibitors, Immunology"),
    ("Protein Synthesis Inhibitors", "Transcription, Translation, DNA vs RNA"),
    ("Fluoroquinolones & Anti-TB", "Antiprotozoal Agents"),
    ("Antileprotic & Antifungal", "Sulfonamides, Bioequivalence"),
    ("Antiviral & Anticancer", "Hydroxyl Group of Quinine"),
    ("Vaccines", "SAR of Drugs"),
    ("Ethics & Clinical Trial", "Off-Label Drug Use"),
    ("Q&A Discussion", "Amino Acids"),
    ("Final Review", "Comprehensive Revision"),
];

pub fn schedule_len() -> Day {
    SCHEDULE.len() as Day
}

/// Topic for `day`. Days outside the schedule get a placeholder
/// "Day N" topic instead of an error.
pub fn topic_for_day(day: Day) -> DayTopic {
    let entry = (day as usize)
        .checked_sub(1)
        .and_then(|index| SCHEDULE.get(index));
    match entry {
        Some((topic, subtopic)) => DayTopic {
            day,
            topic:    (*topic).to_string(),
            subtopic: Some((*subtopic).to_string()),
        },
        None => DayTopic {
            day,
            topic:    format!("Day {day}"),
            subtopic: None,
        },
    }
}

/// The full schedule, for roadmap rendering.
pub fn all_topics() -> Vec<DayTopic> {
    (1..=schedule_len()).map(topic_for_day).collect()
}

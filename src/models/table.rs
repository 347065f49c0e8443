use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Table {
    pub id: String,
    pub number: String,
    pub section: String,
    pub capacity: u8,
    pub available: bool,
    pub nfc_id: String,
    pub ambience: String,
}

fn table(
    id: &str,
    number: &str,
    section: &str,
    capacity: u8,
    available: bool,
    nfc_id: &str,
    ambience: &str,
) -> Table {
    Table {
        id: id.to_string(),
        number: number.to_string(),
        section: section.to_string(),
        capacity,
        available,
        nfc_id: nfc_id.to_string(),
        ambience: ambience.to_string(),
    }
}

pub fn lounge_tables() -> Vec<Table> {
    vec![
        table("t1", "A1", "Reading Sanctuary", 2, true, "NFC001", "Quiet & Cozy"),
        table("t2", "A2", "Reading Sanctuary", 4, false, "NFC002", "Quiet & Cozy"),
        table("t3", "B1", "Rhythm Lounge", 2, true, "NFC003", "Upbeat & Energetic"),
        table("t4", "B2", "Rhythm Lounge", 6, true, "NFC004", "Upbeat & Energetic"),
        table("t5", "C1", "Nature Nook", 2, false, "NFC005", "Fresh & Natural"),
        table("t6", "C2", "Nature Nook", 4, true, "NFC006", "Fresh & Natural"),
        table("t7", "D1", "Innovation Lab", 1, true, "NFC007", "Focus & Productivity"),
        table("t8", "D2", "Innovation Lab", 2, true, "NFC008", "Focus & Productivity"),
    ]
}

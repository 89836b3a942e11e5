use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::normalizer::{id_from_email, parse_joined_date, split_skills};
use crate::workflows::assignment::intake::RawWorkerDocument;

/// Parse roster rows into loose worker documents, keeping the CSV line
/// number so skipped rows can be reported precisely.
pub(crate) fn parse_rows<R: Read>(
    reader: R,
) -> Result<Vec<(usize, RawWorkerDocument)>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row = record?;
        // Header occupies line 1, the first data row line 2.
        rows.push((index + 2, row.into_document()));
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Worker ID", default, deserialize_with = "empty_string_as_none")]
    worker_id: Option<String>,
    #[serde(rename = "Full Name", default, deserialize_with = "empty_string_as_none")]
    full_name: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(rename = "Skills", default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
    #[serde(
        rename = "Account Status",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    account_status: Option<String>,
    #[serde(rename = "Joined At", default, deserialize_with = "empty_string_as_none")]
    joined_at: Option<String>,
}

impl RosterRow {
    fn into_document(self) -> RawWorkerDocument {
        let id = self
            .worker_id
            .or_else(|| self.email.as_deref().map(id_from_email));

        RawWorkerDocument {
            id,
            full_name: self.full_name,
            email: self.email,
            skills: self.skills.as_deref().map(split_skills),
            account_status: self
                .account_status
                .as_deref()
                .map(super::mapping::canonical_status),
            joined_on: self.joined_at.as_deref().and_then(parse_joined_date),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

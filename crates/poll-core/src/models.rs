use serde::{Deserialize, Serialize};

/// A single poll parsed from one row of the source CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollRecord {
    /// Month label exactly as written in the source, e.g. "October".
    pub month: String,
    /// Day of month the poll was taken.
    pub date: i32,
    /// Number of respondents surveyed.
    pub sample_size: u32,
    /// Population code qualifying the sample ("LV", "RV", ...), or `None`
    /// when the sample field carries no code.
    pub sample_type: Option<String>,
    /// Harris result on the 0-100 percentage scale.
    pub harris_result: f64,
    /// Trump result on the 0-100 percentage scale.
    pub trump_result: f64,
}

/// Column-oriented store of accepted polling records.
///
/// Every column holds one entry per record, so all six vectors always share
/// the same length; [`push`](Self::push) is the only mutation point and
/// appends a whole record at once. Records keep source order: index 0 is the
/// top row of the file, which in the reference dataset is the most recent
/// poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollDataset {
    /// Month labels, one per record.
    pub month: Vec<String>,
    /// Days of month, one per record.
    pub date: Vec<i32>,
    /// Sample sizes, one per record.
    pub sample_size: Vec<u32>,
    /// Sample-type codes, `None` where the source row had a bare size.
    pub sample_type: Vec<Option<String>>,
    /// Harris results, one per record, 0-100 scale.
    pub harris_result: Vec<f64>,
    /// Trump results, one per record, 0-100 scale.
    pub trump_result: Vec<f64>,
}

impl PollDataset {
    /// Append one fully-parsed record to every column.
    pub fn push(&mut self, record: PollRecord) {
        self.month.push(record.month);
        self.date.push(record.date);
        self.sample_size.push(record.sample_size);
        self.sample_type.push(record.sample_type);
        self.harris_result.push(record.harris_result);
        self.trump_result.push(record.trump_result);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.harris_result.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.harris_result.is_empty()
    }
}

/// Whether a sample-type code marks a likely-voter poll.
///
/// The check is case-insensitive and matches anywhere in the code, so
/// compound codes such as `"RLV"` qualify alongside plain `"LV"`.
///
/// # Examples
///
/// ```
/// use poll_core::models::is_likely_voter;
///
/// assert!(is_likely_voter(Some("LV")));
/// assert!(is_likely_voter(Some("lv")));
/// assert!(is_likely_voter(Some("RLV")));
/// assert!(!is_likely_voter(Some("RV")));
/// assert!(!is_likely_voter(None));
/// ```
pub fn is_likely_voter(sample_type: Option<&str>) -> bool {
    sample_type
        .map(|code| code.to_uppercase().contains("LV"))
        .unwrap_or(false)
}

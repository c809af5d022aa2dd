use super::CalculationRecord;

/// Append-only, in-memory history of one calculator session.
/// Insertion order is chronological order; nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<CalculationRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    /// The full history, oldest first.
    pub fn snapshot(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&CalculationRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a CalculationRecord;
    type IntoIter = std::slice::Iter<'a, CalculationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

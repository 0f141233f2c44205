/// Outcome of one input file as shown in the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub input_name: String,
    pub output_name: Option<String>,
    pub tu_count: usize,
    pub failure: Option<String>,
}

impl FileRecord {
    pub fn converted(
        input_name: impl Into<String>,
        output_name: Option<String>,
        tu_count: usize,
    ) -> Self {
        Self {
            input_name: input_name.into(),
            output_name,
            tu_count,
            failure: None,
        }
    }

    pub fn failed(input_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input_name: input_name.into(),
            output_name: None,
            tu_count: 0,
            failure: Some(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Per-file records in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    records: Vec<FileRecord>,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: FileRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.success_count() == self.len()
    }

    /// Sum of unit counts over successful records.
    pub fn total_tus(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.is_success())
            .map(|r| r.tu_count)
            .sum()
    }

    /// Percentage of the total contributed by `record`; 0 when the total is 0.
    pub fn share_of(&self, record: &FileRecord) -> f64 {
        let total = self.total_tus();
        if total == 0 || !record.is_success() {
            return 0.0;
        }
        record.tu_count as f64 / total as f64 * 100.0
    }

    pub fn shares(&self) -> Vec<f64> {
        self.records.iter().map(|r| self.share_of(r)).collect()
    }
}

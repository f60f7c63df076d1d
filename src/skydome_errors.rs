use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkydomeError {
    #[error("Unsupported body for this computation: {0}")]
    UnsupportedBody(String),

    #[error("Invalid observer latitude: {0}° (expected a finite value in [-90, 90])")]
    InvalidLatitude(f64),

    #[error("Invalid observer longitude: {0}° (expected a finite value in [-180, 180])")]
    InvalidLongitude(f64),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unable to read star catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("CSV error while reading star catalog: {0}")]
    CatalogCsv(#[from] csv::Error),

    #[error("Malformed star record at line {line}: {reason}")]
    MalformedStarRecord { line: usize, reason: String },

    #[error("System clock unavailable: {0}")]
    ClockUnavailable(String),
}

impl PartialEq for SkydomeError {
    fn eq(&self, other: &Self) -> bool {
        use SkydomeError::*;
        match (self, other) {
            (UnsupportedBody(a), UnsupportedBody(b)) => a == b,
            (InvalidLatitude(a), InvalidLatitude(b)) => a.to_bits() == b.to_bits(),
            (InvalidLongitude(a), InvalidLongitude(b)) => a.to_bits() == b.to_bits(),
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (ClockUnavailable(a), ClockUnavailable(b)) => a == b,
            (
                MalformedStarRecord {
                    line: l1,
                    reason: r1,
                },
                MalformedStarRecord {
                    line: l2,
                    reason: r2,
                },
            ) => l1 == l2 && r1 == r2,

            // Wrapped errors are not comparable: equal if same variant
            (CatalogIo(_), CatalogIo(_)) => true,
            (CatalogCsv(_), CatalogCsv(_)) => true,

            _ => false,
        }
    }
}

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind}: {value}")]
pub struct ValueError {
    pub kind: ValueErrorKind,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueErrorKind {
    #[error("negative value is not allowed")]
    Negative,
    #[error("value is too large to store")]
    TooLarge,
}

/// Converts a signed value into a set element, rejecting anything that
/// cannot name a bit. Whether the set can grow to hold the element is checked
/// separately by the inserting operation.
pub fn to_index(value: i64) -> Result<usize, ValueError> {
    if value < 0 {
        return Err(ValueError {
            kind: ValueErrorKind::Negative,
            value,
        });
    }

    usize::try_from(value).map_err(|_| ValueError {
        kind: ValueErrorKind::TooLarge,
        value,
    })
}

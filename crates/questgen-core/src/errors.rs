use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using QgError
pub type Result<T> = std::result::Result<T, QgError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure of a quest run maps to exactly one kind. Each kind has a
/// stable code that tests and log consumers can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QgErrorKind {
    // Invocation
    /// Wrong argument count or unparsable day/amount/seed
    Usage,
    /// Account database could not be resolved or opened
    Connection,

    // Validation
    UnknownRealm,
    PastOrPresentDate,
    AmountExceedsSupply,
    InvalidSeed,

    // Generation
    /// Target amount is positive but no treasure kind carries positive value
    EmptyTreasureSupply,
    /// Reference rows that the generator cannot work with (e.g. negative values)
    InvalidReferenceData,

    // Integration/IO
    Persistence,
    Io,

    // Internal
    Internal,
}

impl QgErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            QgErrorKind::Usage => "ERR_USAGE",
            QgErrorKind::Connection => "ERR_CONNECTION",
            QgErrorKind::UnknownRealm => "ERR_UNKNOWN_REALM",
            QgErrorKind::PastOrPresentDate => "ERR_PAST_OR_PRESENT_DATE",
            QgErrorKind::AmountExceedsSupply => "ERR_AMOUNT_EXCEEDS_SUPPLY",
            QgErrorKind::InvalidSeed => "ERR_INVALID_SEED",
            QgErrorKind::EmptyTreasureSupply => "ERR_EMPTY_TREASURE_SUPPLY",
            QgErrorKind::InvalidReferenceData => "ERR_INVALID_REFERENCE_DATA",
            QgErrorKind::Persistence => "ERR_PERSISTENCE",
            QgErrorKind::Io => "ERR_IO",
            QgErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind is one of the four request validation failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QgErrorKind::UnknownRealm
                | QgErrorKind::PastOrPresentDate
                | QgErrorKind::AmountExceedsSupply
                | QgErrorKind::InvalidSeed
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus enough context (operation, offending
/// entity, message) to print a single diagnostic line before the run halts.
#[derive(Debug, Clone)]
pub struct QgError {
    kind: QgErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl QgError {
    /// Create a new error with the specified kind
    pub fn new(kind: QgErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (realm name, treasure name, database path, ...)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> QgErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for QgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for QgError {}

// ========== End Error Facility ==========

/// Domain failures raised while validating a request or generating loot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuestError {
    /// Realm name has no row in the reference table
    #[error("Realm {realm} does not exist.")]
    UnknownRealm { realm: String },

    /// Requested day is today or earlier
    #[error("Day {day} is not in the future.")]
    PastOrPresentDate { day: NaiveDate, today: NaiveDate },

    /// Requested amount is larger than the combined value of all treasure kinds
    #[error("Amount {amount} exceeds what is possible ({total} available).")]
    AmountExceedsSupply { amount: i64, total: i64 },

    /// Seed outside [-1.0, 1.0]
    #[error("Seed value {seed} is improper.")]
    InvalidSeed { seed: f64 },

    /// No treasure kind can move the running total towards the target
    #[error("No treasure kind has a positive value; cannot reach amount {target}.")]
    EmptyTreasureSupply { target: i64 },

    /// Treasure kind with a negative value
    #[error("Treasure {treasure} has negative value {value}.")]
    NegativeTreasureValue { treasure: String, value: i64 },
}

impl From<QuestError> for QgError {
    fn from(err: QuestError) -> Self {
        let message = err.to_string();
        match err {
            QuestError::UnknownRealm { realm } => QgError::new(QgErrorKind::UnknownRealm)
                .with_op("validate")
                .with_entity_id(realm)
                .with_message(message),

            QuestError::PastOrPresentDate { day, .. } => {
                QgError::new(QgErrorKind::PastOrPresentDate)
                    .with_op("validate")
                    .with_entity_id(day.to_string())
                    .with_message(message)
            }

            QuestError::AmountExceedsSupply { .. } => {
                QgError::new(QgErrorKind::AmountExceedsSupply)
                    .with_op("validate")
                    .with_message(message)
            }

            QuestError::InvalidSeed { .. } => QgError::new(QgErrorKind::InvalidSeed)
                .with_op("validate")
                .with_message(message),

            QuestError::EmptyTreasureSupply { .. } => {
                QgError::new(QgErrorKind::EmptyTreasureSupply)
                    .with_op("generate_loot")
                    .with_message(message)
            }

            QuestError::NegativeTreasureValue { treasure, .. } => {
                QgError::new(QgErrorKind::InvalidReferenceData)
                    .with_op("generate_loot")
                    .with_entity_id(treasure)
                    .with_message(message)
            }
        }
    }
}

//! Error codes for the Broadside backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Broadside backend API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing x-auth-token header
    UnauthorizedMissingToken,
    /// Malformed auth token
    UnauthorizedInvalidToken,
    /// Access denied
    Forbidden,
    /// Token did not resolve to an existing user
    ForbiddenUserNotFound,
    /// Caller is not a player in the game
    NotAParticipant,

    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Ship layout or board grid is structurally invalid
    InvalidLayout,
    /// Attack coordinates outside the 10x10 grid
    OutOfRange,
    /// Target player is not a participant of the game
    InvalidTarget,
    /// Username/password pair did not match
    InvalidCredentials,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Move legality / game state
    /// Not the caller's turn
    OutOfTurn,
    /// Cell was already attacked
    AlreadyAttacked,
    /// Game is not open for joining
    GameNotOpen,
    /// Game is not active
    GameNotActive,
    /// Game already has a winner
    GameAlreadyDecided,
    /// Game already has two players
    GameFull,
    /// Cannot join one's own game
    SelfJoin,
    /// No opponent to concede to
    NoOpponent,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// User not found
    UserNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Username already registered
    UserExists,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingToken => "UNAUTHORIZED_MISSING_TOKEN",
            Self::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",
            Self::Forbidden => "FORBIDDEN",
            Self::ForbiddenUserNotFound => "FORBIDDEN_USER_NOT_FOUND",
            Self::NotAParticipant => "NOT_A_PARTICIPANT",

            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidLayout => "INVALID_LAYOUT",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::InvalidTarget => "INVALID_TARGET",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::OutOfTurn => "OUT_OF_TURN",
            Self::AlreadyAttacked => "ALREADY_ATTACKED",
            Self::GameNotOpen => "GAME_NOT_OPEN",
            Self::GameNotActive => "GAME_NOT_ACTIVE",
            Self::GameAlreadyDecided => "GAME_ALREADY_DECIDED",
            Self::GameFull => "GAME_FULL",
            Self::SelfJoin => "SELF_JOIN",
            Self::NoOpponent => "NO_OPPONENT",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UserExists => "USER_EXISTS",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

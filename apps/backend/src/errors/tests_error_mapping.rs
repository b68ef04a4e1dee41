// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::error::AppError;
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

#[test]
fn maps_validation_to_400() {
    let cases = [
        (ValidationKind::OutOfRange, ErrorCode::OutOfRange),
        (ValidationKind::AlreadyAttacked, ErrorCode::AlreadyAttacked),
        (ValidationKind::OutOfTurn, ErrorCode::OutOfTurn),
        (ValidationKind::InvalidTarget, ErrorCode::InvalidTarget),
        (ValidationKind::GameNotOpen, ErrorCode::GameNotOpen),
        (ValidationKind::GameNotActive, ErrorCode::GameNotActive),
        (ValidationKind::GameAlreadyDecided, ErrorCode::GameAlreadyDecided),
        (ValidationKind::GameFull, ErrorCode::GameFull),
        (ValidationKind::SelfJoin, ErrorCode::SelfJoin),
        (ValidationKind::NoOpponent, ErrorCode::NoOpponent),
        (ValidationKind::InvalidLayout, ErrorCode::InvalidLayout),
        (ValidationKind::InvalidCredentials, ErrorCode::InvalidCredentials),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "detail").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status().as_u16(), 400);
    }

    let app: AppError = DomainError::validation_other("bad field").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_forbidden_to_403() {
    let app: AppError =
        DomainError::forbidden(ForbiddenKind::NotAParticipant, "not a player").into();
    assert_eq!(app.code(), ErrorCode::NotAParticipant);
    assert_eq!(app.status().as_u16(), 403);
}

#[test]
fn maps_conflicts_to_409() {
    let app: AppError = DomainError::conflict(ConflictKind::UserExists, "user exists").into();
    assert_eq!(app.code(), ErrorCode::UserExists);
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::conflict(ConflictKind::OptimisticLock, "modified concurrently").into();
    assert_eq!(app.code(), ErrorCode::OptimisticLock);
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("Unique".into()), "generic conflict").into();
    assert_eq!(app.code(), ErrorCode::Conflict);
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found_to_404() {
    let app: AppError = DomainError::not_found(NotFoundKind::User, "no user").into();
    assert_eq!(app.code(), ErrorCode::UserNotFound);
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code(), ErrorCode::GameNotFound);
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code(), ErrorCode::DbTimeout);
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code(), ErrorCode::DbUnavailable);
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError =
        DomainError::infra(InfraErrorKind::DataCorruption, "bad stored json").into();
    assert_eq!(app.code(), ErrorCode::Internal);
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "db").into();
    assert_eq!(app.code(), ErrorCode::DbError);
    assert_eq!(app.status().as_u16(), 500);
}

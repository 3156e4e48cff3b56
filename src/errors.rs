use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DepotError {
    #[error("Database error: {0}")]
    #[diagnostic(code(depot::db))]
    Db(#[from] sea_orm::DbErr),

    #[error("Device not found")]
    #[diagnostic(code(depot::not_found))]
    NotFound,

    #[error("{0}")]
    #[diagnostic(code(depot::other))]
    Other(String),
}

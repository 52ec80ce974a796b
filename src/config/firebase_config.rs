//! Firebase configuration parsing from environment variables.
//!
//! Firebase backs the risk-parameter store; this module only describes
//! how to reach it. Credential handling itself is owned by the
//! persistence collaborator.

use super::parse;
use serde::Serialize;
use std::path::PathBuf;

/// Firebase access configuration
#[derive(Debug, Clone, Serialize)]
pub struct FirebaseConfig {
    pub credential_path: PathBuf,
    pub project_id: String,
    /// May be empty; an empty URL means the default database of the project.
    pub database_url: String,
    pub collection_name: String,
}

impl FirebaseConfig {
    pub fn from_env() -> Self {
        Self {
            credential_path: PathBuf::from(parse::string_or(
                "FIREBASE_CREDENTIAL_PATH",
                "./credentials/firebase-service-account.json",
            )),
            project_id: parse::string_or("FIREBASE_PROJECT_ID", "sentiment-risk-management"),
            database_url: parse::string_or("FIREBASE_DATABASE_URL", ""),
            collection_name: parse::string_or("FIREBASE_COLLECTION", "risk_parameters"),
        }
    }
}

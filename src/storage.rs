//! JSON file persistence. Four independent records live under the data
//! directory; each one falls back to its default on corruption without
//! touching the others.

use crate::errors::AppError;
use crate::models::{Chore, ChoreCompletion, HouseholdMember, User};
use crate::seed;
use chrono::Local;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::{error, warn};

pub const CHORES_FILE: &str = "chores.json";
pub const MEMBERS_FILE: &str = "members.json";
pub const COMPLETIONS_FILE: &str = "completions.json";
pub const SESSION_FILE: &str = "session.json";

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("CHORE_TRACKER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

/// A loaded record, keeping track of whether it came off disk or was
/// substituted with defaults (missing or corrupted file).
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Parsed(T),
    Seeded(T),
}

impl<T> Loaded<T> {
    pub fn into_inner(self) -> T {
        match self {
            Loaded::Parsed(value) | Loaded::Seeded(value) => value,
        }
    }

    pub fn was_seeded(&self) -> bool {
        matches!(self, Loaded::Seeded(_))
    }
}

pub async fn load_chores(dir: &Path) -> Loaded<Vec<Chore>> {
    match read_record(&dir.join(CHORES_FILE)).await {
        Some(chores) => Loaded::Parsed(chores),
        None => Loaded::Seeded(seed::default_chores(Local::now())),
    }
}

pub async fn load_members(dir: &Path) -> Loaded<Vec<HouseholdMember>> {
    match read_record(&dir.join(MEMBERS_FILE)).await {
        Some(members) => Loaded::Parsed(members),
        None => Loaded::Seeded(seed::default_members()),
    }
}

pub async fn load_completions(dir: &Path) -> Loaded<Vec<ChoreCompletion>> {
    match read_record(&dir.join(COMPLETIONS_FILE)).await {
        Some(completions) => Loaded::Parsed(completions),
        None => Loaded::Seeded(Vec::new()),
    }
}

/// Restore the stored session, discarding records missing any identifying
/// field.
pub async fn load_session(dir: &Path) -> Option<User> {
    let user: User = read_record(&dir.join(SESSION_FILE)).await?;
    if user.is_valid_session() {
        Some(user)
    } else {
        warn!("discarding stored session with missing identity fields");
        None
    }
}

pub async fn persist_chores(dir: &Path, chores: &[Chore]) -> Result<(), AppError> {
    persist_record(&dir.join(CHORES_FILE), &chores).await
}

pub async fn persist_members(dir: &Path, members: &[HouseholdMember]) -> Result<(), AppError> {
    persist_record(&dir.join(MEMBERS_FILE), &members).await
}

pub async fn persist_completions(
    dir: &Path,
    completions: &[ChoreCompletion],
) -> Result<(), AppError> {
    persist_record(&dir.join(COMPLETIONS_FILE), &completions).await
}

pub async fn persist_session(dir: &Path, user: Option<&User>) -> Result<(), AppError> {
    match user {
        Some(user) => persist_record(&dir.join(SESSION_FILE), user).await,
        None => remove_record(&dir.join(SESSION_FILE)).await,
    }
}

/// Delete every persisted record. The next load reseeds defaults.
pub async fn clear_all(dir: &Path) -> Result<(), AppError> {
    for file in [CHORES_FILE, MEMBERS_FILE, COMPLETIONS_FILE, SESSION_FILE] {
        remove_record(&dir.join(file)).await?;
    }
    Ok(())
}

async fn read_record<T: DeserializeOwned>(path: &Path) -> Option<T> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                None
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            None
        }
    }
}

async fn persist_record<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

async fn remove_record(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::internal(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "chore_tracker_{tag}_{}_{nanos}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn corrupted_chores_record_falls_back_to_seed() {
        let dir = temp_dir("corrupt");
        std::fs::write(dir.join(CHORES_FILE), b"{ not json ]").unwrap();

        let loaded = load_chores(&dir).await;
        assert!(loaded.was_seeded());
        assert_eq!(
            loaded.into_inner().len(),
            seed::default_chores(Local::now()).len()
        );
    }

    #[tokio::test]
    async fn corruption_in_one_record_leaves_the_others_alone() {
        let dir = temp_dir("isolated");
        let members = seed::default_members();
        persist_members(&dir, &members).await.unwrap();
        std::fs::write(dir.join(COMPLETIONS_FILE), b"42").unwrap();

        assert!(!load_members(&dir).await.was_seeded());
        let completions = load_completions(&dir).await;
        assert!(completions.was_seeded());
        assert!(completions.into_inner().is_empty());
    }

    #[tokio::test]
    async fn chores_survive_a_save_load_cycle() {
        let dir = temp_dir("cycle");
        let chores = seed::default_chores(Local::now());
        persist_chores(&dir, &chores).await.unwrap();

        let loaded = load_chores(&dir).await;
        assert_eq!(loaded, Loaded::Parsed(chores));
    }

    #[tokio::test]
    async fn session_with_empty_identity_is_discarded() {
        let dir = temp_dir("session");
        let mut user = seed::admin_user(Local::now());
        user.username = String::new();
        persist_session(&dir, Some(&user)).await.unwrap();
        assert!(load_session(&dir).await.is_none());

        user.username = seed::ADMIN_USERNAME.into();
        persist_session(&dir, Some(&user)).await.unwrap();
        assert_eq!(load_session(&dir).await, Some(user));

        persist_session(&dir, None).await.unwrap();
        assert!(load_session(&dir).await.is_none());
    }
}

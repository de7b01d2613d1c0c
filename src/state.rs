use crate::models::{Chore, ChoreCompletion, HouseholdMember, User};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// The full in-memory dataset: three independent collections plus the
/// current session. Mirrored to disk after every mutation.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub chores: Vec<Chore>,
    pub members: Vec<HouseholdMember>,
    pub completions: Vec<ChoreCompletion>,
    pub current_user: Option<User>,
}

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, data: AppData) -> Self {
        Self {
            data_dir,
            data: Arc::new(Mutex::new(data)),
        }
    }
}

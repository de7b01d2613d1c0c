use crate::errors::AppError;
use crate::models::{
    Chore, ChoreCompletion, ChoreRequest, ChoreView, CompleteChoreRequest, HouseholdMember,
    LoginRequest, MEMBER_COLORS, MemberRequest, Frequency, SessionResponse, Statistics, User,
};
use crate::recurrence;
use crate::seed;
use crate::state::{AppData, AppState};
use crate::stats::generate_statistics;
use crate::storage;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use tracing::info;
use uuid::Uuid;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>, AppError> {
    if payload.username != seed::ADMIN_USERNAME || payload.password != seed::ADMIN_PASSWORD {
        return Err(AppError::unauthorized("invalid username or password"));
    }

    let now = Local::now();
    let mut user = seed::admin_user(now);
    user.last_login = Some(now);

    let mut data = state.data.lock().await;
    data.current_user = Some(user.clone());
    storage::persist_session(&state.data_dir, Some(&user)).await?;
    info!("user {} logged in", user.username);

    Ok(Json(user))
}

pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    data.current_user = None;
    storage::persist_session(&state.data_dir, None).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn session(State(state): State<AppState>) -> Json<SessionResponse> {
    let data = state.data.lock().await;
    Json(SessionResponse {
        user: data.current_user.clone(),
    })
}

pub async fn list_chores(State(state): State<AppState>) -> Result<Json<Vec<ChoreView>>, AppError> {
    let data = state.data.lock().await;
    require_session(&data)?;

    let now = Local::now();
    let views = data.chores.iter().map(|c| chore_view(c, now)).collect();
    Ok(Json(views))
}

pub async fn create_chore(
    State(state): State<AppState>,
    Json(payload): Json<ChoreRequest>,
) -> Result<(StatusCode, Json<ChoreView>), AppError> {
    let mut data = state.data.lock().await;
    require_session(&data)?;
    validate_chore(&payload, &data.members)?;

    let now = Local::now();
    let chore = Chore {
        id: Uuid::new_v4().to_string(),
        name: payload.name.trim().to_string(),
        description: payload.description.trim().to_string(),
        category: payload.category,
        frequency: payload.frequency,
        completions_per_day: normalized_count(&payload),
        estimated_time: payload.estimated_time,
        assignee: payload.assignee,
        is_active: payload.is_active,
        created_at: now,
        // Placeholder until the first completion reschedules it.
        next_due_date: now,
        last_completed: None,
        completed_today: 0,
    };

    data.chores.push(chore.clone());
    storage::persist_chores(&state.data_dir, &data.chores).await?;

    Ok((StatusCode::CREATED, Json(chore_view(&chore, now))))
}

pub async fn update_chore(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ChoreRequest>,
) -> Result<Json<ChoreView>, AppError> {
    let mut data = state.data.lock().await;
    require_session(&data)?;
    validate_chore(&payload, &data.members)?;

    let count = normalized_count(&payload);
    let chore = data
        .chores
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::not_found("no such chore"))?;

    chore.name = payload.name.trim().to_string();
    chore.description = payload.description.trim().to_string();
    chore.category = payload.category;
    chore.frequency = payload.frequency;
    chore.completions_per_day = count;
    chore.estimated_time = payload.estimated_time;
    chore.assignee = payload.assignee;
    chore.is_active = payload.is_active;

    let view = chore_view(chore, Local::now());
    storage::persist_chores(&state.data_dir, &data.chores).await?;
    Ok(Json(view))
}

pub async fn delete_chore(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    require_session(&data)?;

    let before = data.chores.len();
    data.chores.retain(|c| c.id != id);
    if data.chores.len() == before {
        return Err(AppError::not_found("no such chore"));
    }

    // Completion events referencing the chore go with it.
    data.completions.retain(|c| c.chore_id != id);
    storage::persist_chores(&state.data_dir, &data.chores).await?;
    storage::persist_completions(&state.data_dir, &data.completions).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_chore(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChoreView>, AppError> {
    let mut data = state.data.lock().await;
    require_session(&data)?;

    let chore = data
        .chores
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::not_found("no such chore"))?;
    chore.is_active = !chore.is_active;

    let view = chore_view(chore, Local::now());
    storage::persist_chores(&state.data_dir, &data.chores).await?;
    Ok(Json(view))
}

pub async fn complete_chore(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CompleteChoreRequest>,
) -> Result<Json<ChoreView>, AppError> {
    let mut data = state.data.lock().await;
    require_session(&data)?;

    let mut errors = BTreeMap::new();
    if !data.members.iter().any(|m| m.id == payload.completed_by) {
        errors.insert("completedBy".into(), "Unknown household member".into());
    }
    if let Some(rating) = payload.rating {
        if !(1..=5).contains(&rating) {
            errors.insert("rating".into(), "Rating must be between 1 and 5".into());
        }
    }
    if !errors.is_empty() {
        return Err(AppError::validation(errors));
    }

    let now = Local::now();
    let chore = data
        .chores
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::not_found("no such chore"))?;
    if !chore.is_active {
        return Err(AppError::bad_request("inactive chores cannot be completed"));
    }

    recurrence::record_completion(chore, now).apply_to(chore);
    let view = chore_view(chore, now);

    data.completions.push(ChoreCompletion {
        id: Uuid::new_v4().to_string(),
        chore_id: id,
        completed_by: payload.completed_by,
        completed_at: now,
        rating: payload.rating,
        notes: payload.notes.filter(|n| !n.trim().is_empty()),
        time_spent: payload.time_spent,
    });

    storage::persist_chores(&state.data_dir, &data.chores).await?;
    storage::persist_completions(&state.data_dir, &data.completions).await?;
    Ok(Json(view))
}

pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<HouseholdMember>>, AppError> {
    let data = state.data.lock().await;
    require_session(&data)?;
    Ok(Json(data.members.clone()))
}

pub async fn create_member(
    State(state): State<AppState>,
    Json(payload): Json<MemberRequest>,
) -> Result<(StatusCode, Json<HouseholdMember>), AppError> {
    let mut data = state.data.lock().await;
    require_session(&data)?;

    let name = payload.name.trim();
    let mut errors = BTreeMap::new();
    if name.is_empty() {
        errors.insert("name".into(), "Member name is required".into());
    } else if data
        .members
        .iter()
        .any(|m| m.name.eq_ignore_ascii_case(name))
    {
        errors.insert("name".into(), "A member with this name already exists".into());
    }
    if !errors.is_empty() {
        return Err(AppError::validation(errors));
    }

    let member = HouseholdMember {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        color: MEMBER_COLORS[data.members.len() % MEMBER_COLORS.len()].to_string(),
        is_active: true,
    };

    data.members.push(member.clone());
    storage::persist_members(&state.data_dir, &data.members).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    require_session(&data)?;

    let before = data.members.len();
    data.members.retain(|m| m.id != id);
    if data.members.len() == before {
        return Err(AppError::not_found("no such member"));
    }

    // Chores keep existing but lose the assignment; the member's completion
    // history is deleted outright.
    for chore in data
        .chores
        .iter_mut()
        .filter(|c| c.assignee.as_deref() == Some(id.as_str()))
    {
        chore.assignee = None;
    }
    data.completions.retain(|c| c.completed_by != id);

    storage::persist_members(&state.data_dir, &data.members).await?;
    storage::persist_chores(&state.data_dir, &data.chores).await?;
    storage::persist_completions(&state.data_dir, &data.completions).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Statistics>, AppError> {
    let data = state.data.lock().await;
    require_session(&data)?;
    Ok(Json(generate_statistics(
        &data.chores,
        &data.completions,
        &data.members,
    )))
}

/// Clear every persisted record and reseed the in-memory defaults. The
/// session goes too, sending the client back to the login screen.
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    require_session(&data)?;

    storage::clear_all(&state.data_dir).await?;
    let now = Local::now();
    data.chores = seed::default_chores(now);
    data.members = seed::default_members();
    data.completions = Vec::new();
    data.current_user = None;
    info!("all records cleared and reseeded");
    Ok(StatusCode::NO_CONTENT)
}

fn require_session(data: &AppData) -> Result<(), AppError> {
    match &data.current_user {
        Some(user) if user.is_valid_session() => Ok(()),
        _ => Err(AppError::unauthorized("login required")),
    }
}

fn chore_view(chore: &Chore, now: DateTime<Local>) -> ChoreView {
    ChoreView {
        status: recurrence::status(chore, now),
        progress: recurrence::completion_progress(chore),
        category_icon: chore.category.icon(),
        chore: chore.clone(),
    }
}

fn normalized_count(payload: &ChoreRequest) -> Option<u32> {
    if payload.frequency == Frequency::MultipleDaily {
        payload.completions_per_day
    } else {
        None
    }
}

fn validate_chore(payload: &ChoreRequest, members: &[HouseholdMember]) -> Result<(), AppError> {
    let mut errors = BTreeMap::new();

    if payload.name.trim().is_empty() {
        errors.insert("name".into(), "Chore name is required".into());
    }
    if payload.description.trim().is_empty() {
        errors.insert("description".into(), "Description is required".into());
    }
    if payload.estimated_time == 0 {
        errors.insert(
            "estimatedTime".into(),
            "Estimated time must be greater than 0".into(),
        );
    }
    if payload.frequency == Frequency::MultipleDaily
        && payload.completions_per_day.is_none_or(|n| n < 2)
    {
        errors.insert(
            "completionsPerDay".into(),
            "Multiple Daily chores must be done at least 2 times per day".into(),
        );
    }
    if let Some(assignee) = &payload.assignee {
        if !members.iter().any(|m| &m.id == assignee) {
            errors.insert("assignee".into(), "Unknown household member".into());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(errors))
    }
}

use crate::errors::AppError;
use crate::models::{
    AppData, Challenge, ChallengeResponse, CompleteRequest, CompleteResponse, DayRequest,
    ExerciseView, HistoryResponse, LevelRequest, Session, WorkoutExercise, WorkoutResponse,
};
use crate::pause::{self, PauseState};
use crate::program::{CHALLENGE_DAYS, ProgramCatalog};
use crate::progress::{self, TodayStatus};
use crate::selector;
use crate::state::AppState;
use crate::stats::build_history;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    Json, async_trait,
    extract::{FromRequestParts, State},
    http::request::Parts,
    response::Html,
};
use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;
use tracing::info;

/// Explicit per-request identity. The UI supplies it on every API call;
/// there is no ambient session.
pub struct UserId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .unwrap_or("");
        if value.is_empty() {
            return Err(AppError::bad_request("missing x-user-id header"));
        }
        Ok(UserId(value.to_string()))
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(
        CHALLENGE_DAYS,
        state.catalog.training_day_count(),
    ))
}

pub async fn get_challenge(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<ChallengeResponse>, AppError> {
    let data = state.data.lock().await;
    let Some(challenge) = data.challenges.get(&user_id) else {
        return Ok(Json(ChallengeResponse::none()));
    };
    Ok(Json(challenge_response(
        challenge,
        &data,
        &state.catalog,
        today(),
    )))
}

pub async fn start_challenge(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<ChallengeResponse>, AppError> {
    let mut data = state.data.lock().await;
    if data.challenges.contains_key(&user_id) {
        return Err(AppError::conflict("challenge already started"));
    }

    let today = today();
    let challenge = Challenge {
        user_id: user_id.clone(),
        current_day: 1,
        level: 1,
        paused_until: None,
        started_at: today,
    };
    data.challenges.insert(user_id.clone(), challenge);
    persist_data(&state.data_path, &data).await?;
    info!("challenge started for user {user_id}");

    let challenge = fetch_challenge(&data, &user_id)?;
    Ok(Json(challenge_response(
        challenge,
        &data,
        &state.catalog,
        today,
    )))
}

pub async fn set_day(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(payload): Json<DayRequest>,
) -> Result<Json<ChallengeResponse>, AppError> {
    if payload.day < 1 || payload.day > CHALLENGE_DAYS {
        return Err(AppError::bad_request(format!(
            "day must be between 1 and {CHALLENGE_DAYS}"
        )));
    }

    let mut data = state.data.lock().await;
    let challenge = fetch_challenge_mut(&mut data, &user_id)?;
    challenge.current_day = payload.day;
    persist_data(&state.data_path, &data).await?;

    let challenge = fetch_challenge(&data, &user_id)?;
    Ok(Json(challenge_response(
        challenge,
        &data,
        &state.catalog,
        today(),
    )))
}

pub async fn set_level(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(payload): Json<LevelRequest>,
) -> Result<Json<ChallengeResponse>, AppError> {
    if payload.level < 1 {
        return Err(AppError::bad_request("level must be at least 1"));
    }

    let mut data = state.data.lock().await;
    let challenge = fetch_challenge_mut(&mut data, &user_id)?;
    challenge.level = payload.level;
    persist_data(&state.data_path, &data).await?;

    let challenge = fetch_challenge(&data, &user_id)?;
    Ok(Json(challenge_response(
        challenge,
        &data,
        &state.catalog,
        today(),
    )))
}

pub async fn pause_challenge(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<ChallengeResponse>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    let challenge = fetch_challenge_mut(&mut data, &user_id)?;

    if !pause::can_pause(pause::evaluate(challenge.paused_until, today)) {
        return Err(AppError::bad_request("challenge is already paused"));
    }
    challenge.paused_until = Some(pause::pause_window(today));
    persist_data(&state.data_path, &data).await?;

    let challenge = fetch_challenge(&data, &user_id)?;
    Ok(Json(challenge_response(
        challenge,
        &data,
        &state.catalog,
        today,
    )))
}

pub async fn resume_challenge(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<ChallengeResponse>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    let challenge = fetch_challenge_mut(&mut data, &user_id)?;

    if !pause::can_resume(pause::evaluate(challenge.paused_until, today)) {
        return Err(AppError::bad_request("challenge is not paused"));
    }
    challenge.paused_until = None;
    persist_data(&state.data_path, &data).await?;

    let challenge = fetch_challenge(&data, &user_id)?;
    Ok(Json(challenge_response(
        challenge,
        &data,
        &state.catalog,
        today,
    )))
}

pub async fn abort_challenge(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<ChallengeResponse>, AppError> {
    let mut data = state.data.lock().await;
    if data.challenges.remove(&user_id).is_none() {
        return Err(AppError::not_found("no active challenge"));
    }
    persist_data(&state.data_path, &data).await?;
    info!("challenge aborted for user {user_id}");

    Ok(Json(ChallengeResponse::none()))
}

pub async fn get_workout(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<WorkoutResponse>, AppError> {
    let data = state.data.lock().await;
    let challenge = fetch_challenge(&data, &user_id)?;

    let program_days = state.catalog.day_numbers();
    let summary = progress::resolve(
        challenge,
        &program_days,
        &session_days(&data, &user_id),
        today(),
    );

    let day = challenge.current_day;
    let program_day = state.catalog.day(day);
    let exercises = match summary.today_status {
        TodayStatus::RestingPaused | TodayStatus::RestDay => Vec::new(),
        TodayStatus::Done | TodayStatus::Pending => selector::select(
            state.catalog.exercises_for_day(day),
            challenge.level,
            state.catalog.display_order(),
        )
        .into_iter()
        .map(|row| WorkoutExercise {
            name: state
                .catalog
                .exercise_name(&row.exercise_id)
                .unwrap_or(&row.exercise_id)
                .to_string(),
            exercise_id: row.exercise_id,
            level: row.level,
            sets: row.sets,
            reps: row.reps,
            rounds: row.rounds,
            duration_minutes: row.duration_minutes,
            metric: row.metric,
        })
        .collect(),
    };

    Ok(Json(WorkoutResponse {
        day,
        today_status: summary.today_status,
        workout: program_day.map(|p| p.workout.clone()),
        warm_up: program_day.and_then(|p| p.warm_up.clone()),
        cool_down: program_day.and_then(|p| p.cool_down.clone()),
        exercises,
    }))
}

pub async fn complete_workout(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(payload): Json<CompleteRequest>,
) -> Result<Json<CompleteResponse>, AppError> {
    if payload.results.is_empty() {
        return Err(AppError::bad_request("no results to record"));
    }
    for result in &payload.results {
        if !state.catalog.has_exercise(&result.exercise_id) {
            return Err(AppError::bad_request(format!(
                "unknown exercise '{}'",
                result.exercise_id
            )));
        }
    }

    let today = today();
    let mut data = state.data.lock().await;
    let challenge = fetch_challenge(&data, &user_id)?;
    let day = challenge.current_day;

    if matches!(
        pause::evaluate(challenge.paused_until, today),
        PauseState::Paused { .. }
    ) {
        return Err(AppError::bad_request("challenge is paused"));
    }
    if state.catalog.day(day).is_none() {
        return Err(AppError::bad_request(format!(
            "no workout scheduled for day {day}"
        )));
    }

    let recorded = payload.results.len();
    for result in payload.results {
        data.sessions.push(Session {
            user_id: user_id.clone(),
            day,
            exercise_id: result.exercise_id,
            reps: result.reps,
            recorded_on: today,
        });
    }
    let next_day = day + 1;
    let challenge = fetch_challenge_mut(&mut data, &user_id)?;
    challenge.current_day = next_day;
    persist_data(&state.data_path, &data).await?;
    info!("recorded {recorded} results on day {day} for user {user_id}");

    Ok(Json(CompleteResponse { recorded, next_day }))
}

pub async fn get_exercises(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExerciseView>>, AppError> {
    let views = state
        .catalog
        .exercises()
        .iter()
        .map(|exercise| {
            let detail = state
                .catalog
                .details()
                .iter()
                .find(|d| d.exercise_id == exercise.id);
            ExerciseView {
                id: exercise.id.clone(),
                name: exercise.name.clone(),
                level: detail.map(|d| d.level).unwrap_or(1),
                description: detail
                    .map(|d| d.description.clone())
                    .unwrap_or_else(|| "No description available.".to_string()),
                focus: detail.map(|d| d.focus.clone()).unwrap_or_default(),
            }
        })
        .collect();
    Ok(Json(views))
}

pub async fn get_history(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<HistoryResponse>, AppError> {
    let data = state.data.lock().await;
    let sessions: Vec<Session> = data.sessions_for(&user_id).cloned().collect();
    Ok(Json(build_history(&sessions)))
}

fn challenge_response(
    challenge: &Challenge,
    data: &AppData,
    catalog: &ProgramCatalog,
    today: NaiveDate,
) -> ChallengeResponse {
    let pause_state = pause::evaluate(challenge.paused_until, today);
    let summary = progress::resolve(
        challenge,
        &catalog.day_numbers(),
        &session_days(data, &challenge.user_id),
        today,
    );

    let (state, pause_days_left) = match pause_state {
        PauseState::Active => ("active", None),
        PauseState::Paused { remaining_days } => ("paused", Some(remaining_days)),
        PauseState::Expired => ("expired", None),
    };

    ChallengeResponse {
        state: state.to_string(),
        current_day: Some(challenge.current_day),
        level: Some(challenge.level),
        started_at: Some(challenge.started_at.to_string()),
        paused_until: challenge.paused_until.map(|d| d.to_string()),
        pause_days_left,
        completed_days: Some(summary.completed_count),
        remaining_days: Some(summary.remaining_count),
        today_status: Some(summary.today_status),
        challenge_complete: Some(summary.challenge_complete),
    }
}

fn session_days(data: &AppData, user_id: &str) -> BTreeSet<u32> {
    data.sessions_for(user_id).map(|s| s.day).collect()
}

fn fetch_challenge<'a>(data: &'a AppData, user_id: &str) -> Result<&'a Challenge, AppError> {
    data.challenges
        .get(user_id)
        .ok_or_else(|| AppError::not_found("no active challenge"))
}

fn fetch_challenge_mut<'a>(
    data: &'a mut AppData,
    user_id: &str,
) -> Result<&'a mut Challenge, AppError> {
    data.challenges
        .get_mut(user_id)
        .ok_or_else(|| AppError::not_found("no active challenge"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

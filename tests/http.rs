use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct ChallengeResponse {
    state: String,
    current_day: Option<u32>,
    level: Option<u32>,
    paused_until: Option<String>,
    pause_days_left: Option<i64>,
    completed_days: Option<usize>,
    remaining_days: Option<usize>,
    today_status: Option<String>,
    challenge_complete: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct WorkoutExercise {
    exercise_id: String,
    level: u32,
}

#[derive(Debug, Deserialize)]
struct WorkoutResponse {
    day: u32,
    today_status: String,
    workout: Option<String>,
    exercises: Vec<WorkoutExercise>,
}

#[derive(Debug, Deserialize)]
struct CompleteResponse {
    recorded: usize,
    next_day: u32,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    days: Vec<HistoryPoint>,
    total_reps: u64,
    active_days: usize,
}

#[derive(Debug, Deserialize)]
struct HistoryPoint {
    #[allow(dead_code)]
    date: String,
    reps: u64,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("challenge90_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

fn unique_user() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("user-{nanos}")
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/exercises")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_challenge90"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_challenge(client: &Client, base_url: &str, user: &str) -> ChallengeResponse {
    client
        .get(format!("{base_url}/api/challenge"))
        .header("x-user-id", user)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn post(client: &Client, base_url: &str, user: &str, path: &str) -> reqwest::Response {
    client
        .post(format!("{base_url}{path}"))
        .header("x-user-id", user)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_challenge_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let user = unique_user();

    let before = get_challenge(&client, &server.base_url, &user).await;
    assert_eq!(before.state, "none");
    assert!(before.current_day.is_none());

    let started = post(&client, &server.base_url, &user, "/api/challenge/start").await;
    assert!(started.status().is_success());
    let challenge: ChallengeResponse = started.json().await.unwrap();
    assert_eq!(challenge.state, "active");
    assert_eq!(challenge.current_day, Some(1));
    assert_eq!(challenge.level, Some(1));
    assert_eq!(challenge.completed_days, Some(0));
    assert_eq!(challenge.today_status.as_deref(), Some("pending"));
    assert_eq!(challenge.challenge_complete, Some(false));

    let again = post(&client, &server.base_url, &user, "/api/challenge/start").await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let set = client
        .post(format!("{}/api/challenge/day", server.base_url))
        .header("x-user-id", &user)
        .json(&serde_json::json!({ "day": 10 }))
        .send()
        .await
        .unwrap();
    assert!(set.status().is_success());
    let challenge: ChallengeResponse = set.json().await.unwrap();
    assert_eq!(challenge.current_day, Some(10));

    let paused = post(&client, &server.base_url, &user, "/api/challenge/pause").await;
    assert!(paused.status().is_success());
    let challenge: ChallengeResponse = paused.json().await.unwrap();
    assert_eq!(challenge.state, "paused");
    assert_eq!(challenge.pause_days_left, Some(7));
    assert!(challenge.paused_until.is_some());
    assert_eq!(challenge.today_status.as_deref(), Some("resting_paused"));

    let double_pause = post(&client, &server.base_url, &user, "/api/challenge/pause").await;
    assert_eq!(double_pause.status(), StatusCode::BAD_REQUEST);

    let resumed = post(&client, &server.base_url, &user, "/api/challenge/resume").await;
    assert!(resumed.status().is_success());
    let challenge: ChallengeResponse = resumed.json().await.unwrap();
    assert_eq!(challenge.state, "active");
    assert!(challenge.paused_until.is_none());

    let double_resume = post(&client, &server.base_url, &user, "/api/challenge/resume").await;
    assert_eq!(double_resume.status(), StatusCode::BAD_REQUEST);

    let aborted = post(&client, &server.base_url, &user, "/api/challenge/abort").await;
    assert!(aborted.status().is_success());
    let after = get_challenge(&client, &server.base_url, &user).await;
    assert_eq!(after.state, "none");
}

#[tokio::test]
async fn http_workout_complete_advances_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let user = unique_user();

    post(&client, &server.base_url, &user, "/api/challenge/start").await;

    let workout: WorkoutResponse = client
        .get(format!("{}/api/workout", server.base_url))
        .header("x-user-id", &user)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(workout.day, 1);
    assert_eq!(workout.today_status, "pending");
    assert!(workout.workout.is_some());
    assert_eq!(workout.exercises.len(), 4);
    assert!(workout.exercises.iter().all(|e| e.level == 1));

    let results: Vec<serde_json::Value> = workout
        .exercises
        .iter()
        .map(|e| serde_json::json!({ "exercise_id": e.exercise_id, "reps": 10 }))
        .collect();
    let completed = client
        .post(format!("{}/api/workout/complete", server.base_url))
        .header("x-user-id", &user)
        .json(&serde_json::json!({ "results": results }))
        .send()
        .await
        .unwrap();
    assert!(completed.status().is_success());
    let response: CompleteResponse = completed.json().await.unwrap();
    assert_eq!(response.recorded, 4);
    assert_eq!(response.next_day, 2);

    let challenge = get_challenge(&client, &server.base_url, &user).await;
    assert_eq!(challenge.current_day, Some(2));
    assert_eq!(challenge.completed_days, Some(1));
    assert_eq!(challenge.remaining_days, Some(77));
    assert_eq!(challenge.today_status.as_deref(), Some("pending"));

    let history: HistoryResponse = client
        .get(format!("{}/api/history", server.base_url))
        .header("x-user-id", &user)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.total_reps, 40);
    assert_eq!(history.active_days, 1);
    assert!(history.days.iter().any(|p| p.reps == 40));
}

#[tokio::test]
async fn http_level_changes_workout_variants() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let user = unique_user();

    post(&client, &server.base_url, &user, "/api/challenge/start").await;

    let set = client
        .post(format!("{}/api/challenge/level", server.base_url))
        .header("x-user-id", &user)
        .json(&serde_json::json!({ "level": 3 }))
        .send()
        .await
        .unwrap();
    assert!(set.status().is_success());

    let workout: WorkoutResponse = client
        .get(format!("{}/api/workout", server.base_url))
        .header("x-user-id", &user)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(workout.exercises.iter().all(|e| e.level == 3));
}

#[tokio::test]
async fn http_rejects_invalid_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let user = unique_user();

    // no identity header
    let missing = client
        .get(format!("{}/api/challenge", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    post(&client, &server.base_url, &user, "/api/challenge/start").await;

    for day in [0u32, 91] {
        let set = client
            .post(format!("{}/api/challenge/day", server.base_url))
            .header("x-user-id", &user)
            .json(&serde_json::json!({ "day": day }))
            .send()
            .await
            .unwrap();
        assert_eq!(set.status(), StatusCode::BAD_REQUEST, "day {day}");
    }

    let level = client
        .post(format!("{}/api/challenge/level", server.base_url))
        .header("x-user-id", &user)
        .json(&serde_json::json!({ "level": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(level.status(), StatusCode::BAD_REQUEST);

    let bogus = client
        .post(format!("{}/api/workout/complete", server.base_url))
        .header("x-user-id", &user)
        .json(&serde_json::json!({ "results": [{ "exercise_id": "burpee", "reps": 5 }] }))
        .send()
        .await
        .unwrap();
    assert_eq!(bogus.status(), StatusCode::BAD_REQUEST);

    // operations without a challenge report not found
    let other = unique_user();
    let pause = post(&client, &server.base_url, &other, "/api/challenge/pause").await;
    assert_eq!(pause.status(), StatusCode::NOT_FOUND);
}

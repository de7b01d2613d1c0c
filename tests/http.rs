use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChoreView {
    id: String,
    name: String,
    frequency: String,
    status: String,
    completed_today: u32,
    #[serde(default)]
    assignee: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Member {
    id: String,
    name: String,
    color: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Stats {
    total_chores: usize,
    completed_today: usize,
    member_performance: std::collections::BTreeMap<String, Performance>,
}

#[derive(Debug, Deserialize)]
struct Performance {
    completed: usize,
    total: usize,
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

fn unique_data_dir() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("chore_tracker_http_{}_{}", std::process::id(), nanos));
    std::fs::create_dir_all(&path).unwrap();
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/session")).send().await {
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
    let data_dir = unique_data_dir();
    let child = Command::new(env!("CARGO_BIN_EXE_chore_tracker"))
        .env("PORT", port.to_string())
        .env("CHORE_TRACKER_DATA_DIR", data_dir)
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

async fn login(client: &Client, base_url: &str) {
    let response = client
        .post(format!("{base_url}/api/login"))
        .json(&serde_json::json!({ "username": "admin", "password": "admin123" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn http_api_requires_login() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // Fresh session state regardless of test order.
    let _ = client
        .post(format!("{}/api/logout", server.base_url))
        .send()
        .await;

    let response = client
        .get(format!("{}/api/chores", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    let bad_login = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({ "username": "admin", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_login.status(), 401);

    login(&client, &server.base_url).await;
    let response = client
        .get(format!("{}/api/chores", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn http_complete_chore_updates_stats() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    login(&client, &server.base_url).await;

    let members: Vec<Member> = client
        .get(format!("{}/api/members", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!members.is_empty());
    assert!(members[0].color.starts_with('#'));

    let chore: ChoreView = client
        .post(format!("{}/api/chores", server.base_url))
        .json(&serde_json::json!({
            "name": "Sweep the porch",
            "description": "Front steps too",
            "category": "Outdoor",
            "frequency": "Daily",
            "estimatedTime": 10
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(chore.frequency, "Daily");
    // Fresh chores carry a placeholder due date of "now", which lands in the
    // due-soon window until the first completion reschedules them.
    assert_eq!(chore.status, "due-soon");

    let before: Stats = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let completed: ChoreView = client
        .post(format!(
            "{}/api/chores/{}/complete",
            server.base_url, chore.id
        ))
        .json(&serde_json::json!({ "completedBy": members[0].id }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(completed.completed_today, 1);

    let after: Stats = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after.completed_today, before.completed_today + 1);
    assert_eq!(after.total_chores, before.total_chores);

    let by_member = &after.member_performance[&members[0].name];
    assert!(by_member.completed >= 1);
}

#[tokio::test]
async fn http_invalid_chore_reports_field_errors() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    login(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/chores", server.base_url))
        .json(&serde_json::json!({
            "name": "  ",
            "description": "twice a day",
            "category": "Kitchen",
            "frequency": "Multiple Daily",
            "completionsPerDay": 1,
            "estimatedTime": 0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);

    let body: serde_json::Value = response.json().await.unwrap();
    let errors = body["errors"].as_object().unwrap();
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("estimatedTime"));
    assert!(errors.contains_key("completionsPerDay"));
}

#[tokio::test]
async fn http_removing_member_unassigns_chores_and_drops_history() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    login(&client, &server.base_url).await;

    let member: Member = client
        .post(format!("{}/api/members", server.base_url))
        .json(&serde_json::json!({ "name": "Temp Helper" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let chore: ChoreView = client
        .post(format!("{}/api/chores", server.base_url))
        .json(&serde_json::json!({
            "name": "Water the plants",
            "description": "Only the indoor ones",
            "category": "General Cleaning",
            "frequency": "Weekly",
            "estimatedTime": 5,
            "assignee": member.id
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(chore.assignee.as_deref(), Some(member.id.as_str()));

    let response = client
        .post(format!(
            "{}/api/chores/{}/complete",
            server.base_url, chore.id
        ))
        .json(&serde_json::json!({ "completedBy": member.id }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let stats: Stats = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let helper = &stats.member_performance["Temp Helper"];
    assert_eq!(helper.completed, 1);
    assert_eq!(helper.total, 1);

    let response = client
        .delete(format!("{}/api/members/{}", server.base_url, member.id))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let chores: Vec<ChoreView> = client
        .get(format!("{}/api/chores", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let orphaned = chores
        .iter()
        .find(|c| c.id == chore.id)
        .expect("chore survives member removal");
    assert!(orphaned.assignee.is_none());
    assert_eq!(orphaned.name, "Water the plants");

    let stats: Stats = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!stats.member_performance.contains_key("Temp Helper"));

    let duplicate = client
        .post(format!("{}/api/members", server.base_url))
        .json(&serde_json::json!({ "name": members_first_name(&client, &server.base_url).await }))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), 422);
}

async fn members_first_name(client: &Client, base_url: &str) -> String {
    let members: Vec<Member> = client
        .get(format!("{base_url}/api/members"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    members[0].name.to_uppercase()
}

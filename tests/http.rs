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
struct CalculateResponse {
    total_consumed: f64,
    remaining_calories: f64,
    exceeded: bool,
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

static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

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

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/health")).send().await {
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
    let child = Command::new(env!("CARGO_BIN_EXE_calorie_tracker"))
        .env("PORT", port.to_string())
        .env("BIND_ADDR", "127.0.0.1")
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

#[tokio::test]
async fn http_index_renders_empty_form() {
    let server = shared_server().await;
    let body = Client::new()
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Calorie Tracker"));
    assert!(body.contains(r#"name="daily_goal" value="""#));
    assert!(body.contains(r#"<div class="alert" id="error" role="alert" hidden></div>"#));
}

#[tokio::test]
async fn http_api_within_goal() {
    let server = shared_server().await;
    let response = Client::new()
        .post(format!("{}/api/calculate", server.base_url))
        .json(&serde_json::json!({
            "name": "Ana",
            "daily_goal": "2000",
            "breakfast": "300",
            "lunch": "600",
            "dinner": "700",
            "snacks": "100"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let result: CalculateResponse = response.json().await.unwrap();
    assert_eq!(result.total_consumed, 1700.0);
    assert_eq!(result.remaining_calories, 300.0);
    assert!(!result.exceeded);
}

#[tokio::test]
async fn http_api_exceeded() {
    let server = shared_server().await;
    let result: CalculateResponse = Client::new()
        .post(format!("{}/api/calculate", server.base_url))
        .json(&serde_json::json!({
            "name": "Ana",
            "daily_goal": "1500",
            "breakfast": "500",
            "lunch": "600",
            "dinner": "700",
            "snacks": "0"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(result.total_consumed, 1800.0);
    assert_eq!(result.remaining_calories, -300.0);
    assert!(result.exceeded);
}

#[tokio::test]
async fn http_api_rejects_missing_name() {
    let server = shared_server().await;
    let response = Client::new()
        .post(format!("{}/api/calculate", server.base_url))
        .json(&serde_json::json!({ "name": "", "daily_goal": "2000" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.text().await.unwrap(),
        "Please enter your Name and a positive Daily Calorie Goal."
    );
}

#[tokio::test]
async fn http_form_rejects_negative_meal() {
    let server = shared_server().await;
    let response = Client::new()
        .post(format!("{}/calculate", server.base_url))
        .form(&[("name", "Bo"), ("daily_goal", "2000"), ("lunch", "-50")])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body = response.text().await.unwrap();
    assert!(body.contains(
        r#"<div class="alert" id="error" role="alert">Calorie inputs cannot be negative.</div>"#
    ));
    assert!(body.contains(r#"name="name" value="Bo""#));
    assert!(body.contains(r#"data-state="" hidden>"#));
}

#[tokio::test]
async fn http_form_renders_result() {
    let server = shared_server().await;
    let body = Client::new()
        .post(format!("{}/calculate", server.base_url))
        .form(&[
            ("name", "Ana"),
            ("daily_goal", "2000"),
            ("breakfast", "300"),
            ("lunch", "600"),
            ("dinner", "700"),
            ("snacks", "100"),
        ])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains(r#"<span class="badge" id="total">1700 kcal</span>"#));
    assert!(body.contains(r#"<span class="badge" id="remaining">300 kcal</span>"#));
    assert!(body.contains(r#"<p id="verdict">You are within your daily goal!</p>"#));
}

#[tokio::test]
async fn http_api_rejects_malformed_body_with_bad_request() {
    let server = shared_server().await;
    let response = Client::new()
        .post(format!("{}/api/calculate", server.base_url))
        .json(&serde_json::json!({ "name": "Ana", "daily_goal": 2000 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_api_reports_overflowed_total_as_text() {
    let server = shared_server().await;
    let body: serde_json::Value = Client::new()
        .post(format!("{}/api/calculate", server.base_url))
        .json(&serde_json::json!({
            "name": "Ana",
            "daily_goal": "2000",
            "breakfast": "1e308",
            "lunch": "1e308"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body,
        serde_json::json!({
            "total_consumed": "Infinity",
            "remaining_calories": "-Infinity",
            "exceeded": true
        })
    );
}

use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const FIXTURE: &str = "\
tool_name,category,visits_jan,visits_feb,visits_mar,visits_apr,visits_may,visits_jun,half_year_delta,half_year_growth,introduction,tags
ChatMate,AI Chatbot,100,110,120,130,140,150,50,50.0%,Chat assistant,chat
LateBloom,AI Coding,0,0,0,0,0,100,100,N/A,Launched in June,video
PairBot,AI Coding,50,50,50,50,50,50,0,0.0%,Pair programmer,code
";

#[derive(Debug, Deserialize)]
struct TrackRow {
    category: String,
    tool_count: usize,
    latest_month_total: f64,
    half_year_delta_total: f64,
    avg_growth: Option<f64>,
    total_visits: f64,
}

#[derive(Debug, Deserialize)]
struct HeatmapRow {
    category: String,
    mom_growth: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct Heatmap {
    months: Vec<String>,
    rows: Vec<HeatmapRow>,
}

#[derive(Debug, Deserialize)]
struct OverviewResponse {
    tool_count: usize,
    latest_month_total: f64,
    half_year_delta_total: f64,
    avg_growth: Option<f64>,
    months: Vec<String>,
    tracks: Vec<TrackRow>,
    heatmap: Heatmap,
}

#[derive(Debug, Deserialize)]
struct TopToolRow {
    name: String,
    latest_month: f64,
    half_year_growth: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TrendSeries {
    name: String,
    visits: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct TrackDetailResponse {
    category: String,
    tool_count: usize,
    monthly_totals: Vec<f64>,
    avg_growth: Option<f64>,
    mom_growth: Vec<f64>,
    top_tools: Vec<TopToolRow>,
    trend: Vec<TrendSeries>,
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
    path.push(format!("traffic_http_{}_{}.csv", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/overview")).send().await {
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
    std::fs::write(&data_path, FIXTURE).expect("write fixture table");

    let child = Command::new(env!("CARGO_BIN_EXE_traffic_dashboard"))
        .env("PORT", port.to_string())
        .env("DASHBOARD_DATA_PATH", data_path)
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
async fn http_overview_reflects_the_loaded_table() {
    let server = shared_server().await;
    let client = Client::new();

    let overview: OverviewResponse = client
        .get(format!("{}/api/overview", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(overview.tool_count, 3);
    assert_eq!(overview.latest_month_total, 300.0);
    assert_eq!(overview.half_year_delta_total, 150.0);
    assert_eq!(overview.avg_growth, Some(25.0));
    assert_eq!(overview.months.len(), 6);
    assert_eq!(overview.months[5], "Jun 2025");

    let order: Vec<&str> = overview.tracks.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(order, ["AI Chatbot", "AI Coding"]);

    let coding = &overview.tracks[1];
    assert_eq!(coding.tool_count, 2);
    assert_eq!(coding.latest_month_total, 150.0);
    assert_eq!(coding.half_year_delta_total, 100.0);
    assert_eq!(coding.avg_growth, Some(0.0));
    assert_eq!(coding.total_visits, 400.0);
}

#[tokio::test]
async fn http_overview_heatmap_is_ascending_with_five_columns() {
    let server = shared_server().await;
    let client = Client::new();

    let overview: OverviewResponse = client
        .get(format!("{}/api/overview", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let order: Vec<&str> = overview
        .heatmap
        .rows
        .iter()
        .map(|r| r.category.as_str())
        .collect();
    assert_eq!(order, ["AI Coding", "AI Chatbot"]);
    assert_eq!(overview.heatmap.months.len(), 5);

    let coding = &overview.heatmap.rows[0];
    assert_eq!(coding.mom_growth, [0.0, 0.0, 0.0, 0.0, 200.0]);
}

#[tokio::test]
async fn http_track_detail_ranks_and_aggregates_members() {
    let server = shared_server().await;
    let client = Client::new();

    let detail: TrackDetailResponse = client
        .get(format!("{}/api/tracks/AI%20Coding", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(detail.category, "AI Coding");
    assert_eq!(detail.tool_count, 2);
    assert_eq!(detail.monthly_totals, [50.0, 50.0, 50.0, 50.0, 50.0, 150.0]);
    assert_eq!(detail.avg_growth, Some(0.0));
    assert_eq!(detail.mom_growth, [0.0, 0.0, 0.0, 0.0, 200.0]);

    assert_eq!(detail.top_tools.len(), 2);
    assert_eq!(detail.top_tools[0].name, "LateBloom");
    assert_eq!(detail.top_tools[0].latest_month, 100.0);
    assert_eq!(detail.top_tools[0].half_year_growth, None);
    assert_eq!(detail.top_tools[1].name, "PairBot");

    assert_eq!(detail.trend.len(), 2);
    assert_eq!(detail.trend[0].visits.len(), 6);
    assert_eq!(detail.trend[0].name, "LateBloom");
}

#[tokio::test]
async fn http_unknown_track_is_not_found() {
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/tracks/AI%20Legal", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_index_page_reports_the_dataset() {
    let server = shared_server().await;
    let client = Client::new();

    let body = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("AI Tool Traffic Dashboard"));
    assert!(body.contains("Jun 2025"));
    assert!(!body.contains("{{TOOL_COUNT}}"));
}

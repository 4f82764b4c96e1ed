//! Server harness and shared world for HTTP behaviour tests.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The `WorldFixture` ensures the server
//! is stopped even if a test panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::Method;
use actix_web::{App, HttpResponse, HttpServer, web};
use awc::Client;
use mockable::{Clock, DefaultClock};
use serde_json::Value;
use shelter::domain::TRACE_ID_HEADER;
use shelter::inbound::http::configure;
use shelter::inbound::http::health::HealthState;
use shelter::inbound::http::state::HttpState;
use shelter::outbound::memory::{InMemoryAnimalRepository, InMemoryMemberRepository};
use shelter::{Timeout, Trace};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

/// Deadline applied to every request the harness server handles.
pub const HARNESS_TIMEOUT: Duration = Duration::from_millis(150);
/// Path of a route that always outlives [`HARNESS_TIMEOUT`].
pub const SLOW_PATH: &str = "/__slow";

pub struct ShelterWorld {
    pub runtime: Runtime,
    pub local: LocalSet,
    pub base_url: String,
    pub server: ServerHandle,
    pub last_status: Option<u16>,
    pub last_body: Option<Value>,
    pub last_trace_id: Option<String>,
    pub last_created_id: Option<i64>,
}

pub type SharedWorld = Rc<RefCell<ShelterWorld>>;

pub struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(&self.world);
    }
}

fn shutdown(world: &SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it, so we hold the
    // borrow while calling `block_on`. The future must not touch the world.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

pub fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

async fn slow_handler() -> HttpResponse {
    actix_web::rt::time::sleep(HARNESS_TIMEOUT * 4).await;
    HttpResponse::Ok().finish()
}

fn in_memory_state() -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    HttpState::new(
        Arc::new(InMemoryAnimalRepository::new(clock.clone())),
        Arc::new(InMemoryMemberRepository::new(clock.clone())),
        clock,
    )
}

async fn spawn_shelter_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let http_data = web::Data::new(in_memory_state());
    let health_data = web::Data::new(HealthState::new());
    health_data.mark_ready();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .app_data(health_data.clone())
            .wrap(Timeout::new(HARNESS_TIMEOUT))
            .wrap(Trace)
            .route(SLOW_PATH, web::get().to(slow_handler))
            .configure(configure)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

/// Start a server over empty in-memory stores.
pub fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();
    let (base_url, server) = local
        .block_on(&runtime, spawn_shelter_server())
        .expect("start shelter server");

    WorldFixture {
        world: Rc::new(RefCell::new(ShelterWorld {
            runtime,
            local,
            base_url,
            server,
            last_status: None,
            last_body: None,
            last_trace_id: None,
            last_created_id: None,
        })),
    }
}

struct CapturedResponse {
    status: u16,
    trace_id: Option<String>,
    body: Option<Value>,
}

/// Send `payload` (if any) to `path` and record the response in the world.
pub fn perform_request(world: &SharedWorld, method: Method, path: &str, payload: Option<Value>) {
    let path = path.to_owned();
    let captured = with_world_async(world, |base_url| async move {
        let request = Client::default().request(method, format!("{base_url}{path}"));
        let mut response = match payload {
            Some(payload) => request.send_json(&payload).await,
            None => request.send().await,
        }
        .expect("request succeeds");

        let status = response.status().as_u16();
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let bytes = response.body().await.expect("read body");
        let body = (!bytes.is_empty())
            .then(|| serde_json::from_slice(&bytes).expect("json body"));
        CapturedResponse {
            status,
            trace_id,
            body,
        }
    });

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(captured.status);
    ctx.last_trace_id = captured.trace_id;
    if captured.status == 201 {
        ctx.last_created_id = captured
            .body
            .as_ref()
            .and_then(|body| body.pointer("/data/id"))
            .and_then(Value::as_i64);
    }
    ctx.last_body = captured.body;
}

/// Identifier of the most recently created record.
pub fn last_created_id(world: &SharedWorld) -> i64 {
    world.borrow().last_created_id.expect("a record was created")
}

/// Borrow the last response body.
pub fn last_body(world: &SharedWorld) -> Value {
    world.borrow().last_body.clone().expect("response body")
}

use std::path::PathBuf;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info};
use serde::Deserialize;

use rs_namegen_core::{random_seed, GenerateError, NameGenerator, Seed};

/// Upper bound on names returned by one `/v1/generate` call.
const MAX_COUNT: usize = 1000;

/// Command line configuration.
#[derive(Parser, Debug)]
#[command(version, about = "HTTP service for pattern-based name generation")]
struct Config {
	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to listen on
	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Directory holding the `.json` token sets
	#[arg(long, default_value = "./data")]
	data_dir: PathBuf,

	/// Comma separated token sets loaded at startup (built-in lists when omitted)
	#[arg(long, value_delimiter = ',')]
	token_sets: Vec<String>,
}

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	pattern: String,
	seed: Option<Seed>,
	count: Option<usize>,
}

#[derive(Deserialize)]
struct TokenSetQuery {
	names: Option<String>,
}

struct SharedData {
	generator: NameGenerator,
	data_dir: PathBuf,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` names (default 1) from `pattern`, one per line.
/// Without `seed`, a random one is used. Pattern errors answer 400.
///
/// Every count goes through the same batch derivation, so the names for a
/// given seed are a prefix of those of any larger count.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(1);
	if count == 0 || count > MAX_COUNT {
		return HttpResponse::BadRequest().body(format!("count must be between 1 and {MAX_COUNT}"));
	}
	let mut seed = query.seed.unwrap_or_else(random_seed);

	// Clone the snapshot so generation does not hold the lock.
	let generator = match data.lock() {
		Ok(shared_data) => shared_data.generator.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	match generator.generate_batch(&query.pattern, &mut seed, count) {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(e @ GenerateError::EmptyToken { .. }) => {
			error!("token table is inconsistent: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
		Err(e) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

#[get("/v1/token_sets")]
async fn get_token_sets(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let data_dir = match data.lock() {
		Ok(shared_data) => shared_data.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	match NameGenerator::list_token_sets(&data_dir) {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(e) => {
			error!("failed to list token sets: {e}");
			HttpResponse::InternalServerError().body("Failed to list token sets")
		}
	}
}

#[get("/v1/loaded_token_sets")]
async fn get_loaded_token_sets(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	HttpResponse::Ok().body(shared_data.generator.get_token_set_names().join("\n"))
}

#[get("/v1/tokens")]
async fn get_tokens(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let table = match data.lock() {
		Ok(shared_data) => shared_data.generator.table(),
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	match table.to_json_string() {
		Ok(json) => HttpResponse::Ok().content_type("application/json").body(json),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

#[put("/v1/load_token_sets")]
async fn put_token_sets(data: web::Data<Mutex<SharedData>>, query: web::Query<TokenSetQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty token set name"),
	};

	let names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	let data_dir = shared_data.data_dir.clone();
	match shared_data.generator.load_token_sets(&data_dir, &names) {
		Ok(()) => {
			info!("token sets {names:?} loaded");
			HttpResponse::Ok().body("Token sets loaded successfully")
		}
		Err(e) => HttpResponse::InternalServerError().body(format!("Failed to load token sets: {e}")),
	}
}

/// Main entry point for the server.
///
/// Builds the generator from the configured token sets, wraps it in a
/// `Mutex`, and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let config = Config::parse();

	let mut generator = NameGenerator::new();
	if !config.token_sets.is_empty() {
		generator
			.load_token_sets(&config.data_dir, &config.token_sets)
			.map_err(std::io::Error::other)?;
	}
	info!(
		"serving token sets {:?} on {}:{}",
		generator.get_token_set_names(),
		config.host,
		config.port
	);

	let shared_data = SharedData {
		generator,
		data_dir: config.data_dir,
	};
	let shared_generator = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET", "PUT"]))
			.app_data(shared_generator.clone())
			.service(get_generated)
			.service(get_token_sets)
			.service(get_loaded_token_sets)
			.service(get_tokens)
			.service(put_token_sets)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::{body::to_bytes, http::StatusCode, test};

	fn shared_data() -> web::Data<Mutex<SharedData>> {
		web::Data::new(Mutex::new(SharedData {
			generator: NameGenerator::new(),
			data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../data")),
		}))
	}

	#[actix_web::test]
	async fn generate_is_reproducible() {
		let app = test::init_service(App::new().app_data(shared_data()).service(get_generated)).await;

		let mut bodies = Vec::new();
		for _ in 0..2 {
			let req = test::TestRequest::get().uri("/v1/generate?pattern=!sV(dim)&seed=42&count=3").to_request();
			let resp = test::call_service(&app, req).await;
			assert_eq!(resp.status(), StatusCode::OK);
			bodies.push(to_bytes(resp.into_body()).await.unwrap());
		}
		assert_eq!(bodies[0], bodies[1]);

		let text = String::from_utf8(bodies[0].to_vec()).unwrap();
		assert_eq!(text.lines().count(), 3);
		assert!(text.lines().all(|name| name.ends_with("dim")));
	}

	#[actix_web::test]
	async fn single_name_starts_larger_batch() {
		let app = test::init_service(App::new().app_data(shared_data()).service(get_generated)).await;

		let req = test::TestRequest::get().uri("/v1/generate?pattern=!sVs&seed=42&count=1").to_request();
		let single = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
		let req = test::TestRequest::get().uri("/v1/generate?pattern=!sVs&seed=42&count=2").to_request();
		let pair = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();

		assert_eq!(pair.lines().count(), 2);
		assert_eq!(pair.lines().next(), Some(single.as_str()));
	}

	#[actix_web::test]
	async fn bad_pattern_is_rejected() {
		let app = test::init_service(App::new().app_data(shared_data()).service(get_generated)).await;

		let req = test::TestRequest::get().uri("/v1/generate?pattern=(foo").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

		let req = test::TestRequest::get().uri("/v1/generate?pattern=s&count=0").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn load_token_sets_swaps_table() {
		let data = shared_data();
		let app = test::init_service(
			App::new()
				.app_data(data.clone())
				.service(put_token_sets)
				.service(get_loaded_token_sets)
				.service(get_token_sets),
		)
		.await;

		let req = test::TestRequest::get().uri("/v1/token_sets").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let listed = String::from_utf8(body.to_vec()).unwrap();
		assert!(listed.lines().any(|name| name == "titles"));

		let req = test::TestRequest::put().uri("/v1/load_token_sets?names=builtin,titles").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let req = test::TestRequest::get().uri("/v1/loaded_token_sets").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, "builtin\ntitles");

		let req = test::TestRequest::put().uri("/v1/load_token_sets?names=missing").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
		let names = data.lock().unwrap().generator.get_token_set_names().to_vec();
		assert_eq!(names, ["builtin", "titles"]);
	}
}

//! Router fixture for HTTP tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
	Router,
	body::Body,
	http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use flaggate::{AppBuilder, Policy, routes};
use flaggate_record_adapter_sqlite::RecordAdapterSqlite;

pub struct TestServer {
	pub router: Router,
	_temp: TempDir,
}

pub async fn create_test_server(policy: Policy) -> TestServer {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let adapter = RecordAdapterSqlite::new(temp.path()).await.expect("Failed to create adapter");

	let mut builder = AppBuilder::new();
	builder.policy(policy).record_adapter(Arc::new(adapter));
	let app = builder.build().expect("Failed to build app");

	TestServer { router: routes::init(app), _temp: temp }
}

impl TestServer {
	pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
		let req = Request::builder().method(method).uri(uri);
		let req = match body {
			Some(body) => req
				.header(header::CONTENT_TYPE, "application/json")
				.body(Body::from(body.to_string())),
			None => req.body(Body::empty()),
		}
		.expect("Failed to build request");

		let res = self.router.clone().oneshot(req).await.expect("Request failed");
		let status = res.status();
		let bytes = res.into_body().collect().await.expect("Failed to read body").to_bytes();
		let json = if bytes.is_empty() {
			Value::Null
		} else {
			serde_json::from_slice(&bytes).expect("Response is not JSON")
		};
		(status, json)
	}

	pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
		self.send(Method::POST, uri, Some(body)).await
	}

	pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
		self.send(Method::GET, uri, None).await
	}

	/// Creates a user and returns its id
	pub async fn create_user(&self, name: &str, region: &str, active: bool) -> i64 {
		let (status, body) = self
			.post(
				"/create-user/",
				serde_json::json!({ "name": name, "region": region, "subscription_active": active }),
			)
			.await;
		assert_eq!(status, StatusCode::CREATED, "{}", body);
		body["id"].as_i64().expect("user id")
	}

	pub async fn create_feature(&self, name: &str, default_state: bool) {
		let (status, body) = self
			.post("/create-feature/", serde_json::json!({ "name": name, "default_state": default_state }))
			.await;
		assert_eq!(status, StatusCode::OK, "{}", body);
	}
}

// vim: ts=4

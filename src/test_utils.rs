// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request as seen by the mock API server
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    /// Decoded value of a query parameter
    pub fn query_param(&self, key: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

type Route = (String, String);

/// A mock HTTP service that returns predefined responses based on request paths
/// and records every request it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<Route, VecDeque<(u16, String)>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response for requests with the given method and path.
    /// Responses for the same route are served in order and the last one repeats.
    pub fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
        self
    }

    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// All requests received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests received with the given method
    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut responses = self.responses.lock().unwrap();

        // Try exact match first, then prefix match for paths like /api/v1/namespaces/foo
        let exact = (method.to_string(), path.to_string());
        let route = if responses.contains_key(&exact) {
            exact
        } else {
            responses
                .keys()
                .find(|(m, p)| m == method && path.starts_with(p.as_str()))?
                .clone()
        };

        let queue = responses.get_mut(&route)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let query = req.uri().query().map(str::to_string);

        let response = self.find_response(&method, &path);
        let requests = self.requests.clone();

        Box::pin(respond(req, method, path, query, response, requests))
    }
}

async fn respond(
    req: Request<Body>,
    method: String,
    path: String,
    query: Option<String>,
    response: Option<(u16, String)>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
) -> Result<Response<Body>, tower::BoxError> {
    let bytes = req
        .into_body()
        .collect()
        .await
        .map_err(tower::BoxError::from)?
        .to_bytes();
    let body = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes)?)
    };
    requests.lock().unwrap().push(RecordedRequest {
        method,
        path,
        query,
        body,
    });

    // Default 404 for unmatched requests
    let (status, body) =
        response.unwrap_or_else(|| (404, not_found_json("resource", "unmatched")));
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.into_bytes()))?)
}

/// Create a mock Kuadrant JSON response
pub fn kuadrant_json(name: &str, namespace: &str, spec: Value) -> String {
    kuadrant_value(name, namespace, spec, None).to_string()
}

/// Create a mock Kuadrant JSON response with a Ready condition
pub fn ready_kuadrant_json(name: &str, namespace: &str, spec: Value, ready: bool) -> String {
    let status = json!({
        "observedGeneration": 1,
        "conditions": [{
            "type": "Ready",
            "status": if ready { "True" } else { "False" },
            "reason": if ready { "Ready" } else { "Reconciling" }
        }]
    });
    kuadrant_value(name, namespace, spec, Some(status)).to_string()
}

fn kuadrant_value(name: &str, namespace: &str, spec: Value, status: Option<Value>) -> Value {
    let mut value = json!({
        "apiVersion": "kuadrant.io/v1beta1",
        "kind": "Kuadrant",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid",
            "resourceVersion": "1",
            "generation": 1
        },
        "spec": spec
    });
    if let Some(status) = status {
        value["status"] = status;
    }
    value
}

/// Create a mock Deployment JSON response
pub fn deployment_json(name: &str, namespace: &str, replicas: i32, ready_replicas: i32) -> String {
    json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "generation": 1,
            "labels": {"app": name}
        },
        "spec": {
            "replicas": replicas,
            "selector": {"matchLabels": {"app": name}},
            "template": {
                "metadata": {"labels": {"app": name}},
                "spec": {"containers": [{"name": name, "image": format!("quay.io/kuadrant/{}:latest", name)}]}
            }
        },
        "status": {
            "observedGeneration": 1,
            "replicas": replicas,
            "readyReplicas": ready_replicas
        }
    })
    .to_string()
}

/// Create a mock Pod JSON response
pub fn pod_json(name: &str, namespace: &str, app: &str) -> String {
    json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "labels": {"app": app}
        },
        "spec": {
            "containers": [{"name": app, "image": format!("quay.io/kuadrant/{}:latest", app)}]
        }
    })
    .to_string()
}

/// Create a mock Service JSON response
pub fn service_json(name: &str, namespace: &str, port: i32) -> String {
    json!({
        "apiVersion": "v1",
        "kind": "Service",
        "metadata": {
            "name": name,
            "namespace": namespace
        },
        "spec": {
            "ports": [{"name": "http", "port": port}]
        }
    })
    .to_string()
}

/// Wrap item JSON documents into a list response
pub fn list_json(kind: &str, api_version: &str, items: Vec<String>) -> String {
    let items: Vec<Value> = items
        .iter()
        .map(|item| serde_json::from_str(item).unwrap())
        .collect();
    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {"resourceVersion": "1"},
        "items": items
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Create a 409 conflict response
pub fn conflict_json(resource: &str, name: &str) -> String {
    status_json(
        409,
        "Conflict",
        &format!(
            "Operation cannot be fulfilled on {} \"{}\": the object has been modified",
            resource, name
        ),
    )
}

fn status_json(code: u16, reason: &str, message: &str) -> String {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_decodes_label_selector() {
        let request = RecordedRequest {
            method: "GET".to_string(),
            path: "/api/v1/namespaces/default/pods".to_string(),
            query: Some("labelSelector=app%3Dlimitador%2Ctier%3Ddata&limit=5".to_string()),
            body: None,
        };

        assert_eq!(
            request.query_param("labelSelector").as_deref(),
            Some("app=limitador,tier=data")
        );
        assert_eq!(request.query_param("limit").as_deref(), Some("5"));
        assert_eq!(request.query_param("fieldSelector"), None);
    }

    #[test]
    fn test_query_param_keeps_malformed_escapes() {
        let request = RecordedRequest {
            method: "GET".to_string(),
            path: "/api/v1/namespaces/default/pods".to_string(),
            query: Some("labelSelector=app%ZZx&limit=%".to_string()),
            body: None,
        };

        assert_eq!(
            request.query_param("labelSelector").as_deref(),
            Some("app%ZZx")
        );
        assert_eq!(request.query_param("limit").as_deref(), Some("%"));
    }

    #[test]
    fn test_queued_responses_served_in_order_and_last_repeats() {
        let mock = MockService::new()
            .on_get("/api/v1/namespaces/default/pods/web", 404, &not_found_json("pods", "web"))
            .on_get(
                "/api/v1/namespaces/default/pods/web",
                200,
                &pod_json("web", "default", "web"),
            );

        assert_eq!(
            mock.find_response("GET", "/api/v1/namespaces/default/pods/web")
                .map(|(status, _)| status),
            Some(404)
        );
        for _ in 0..2 {
            assert_eq!(
                mock.find_response("GET", "/api/v1/namespaces/default/pods/web")
                    .map(|(status, _)| status),
                Some(200)
            );
        }
        assert_eq!(mock.find_response("PUT", "/api/v1/namespaces/default/pods/web"), None);
    }
}

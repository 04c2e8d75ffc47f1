// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: an in-memory cluster store and a mock Kubernetes API server.

use crate::error::{PublisherError, Result as StoreResult};
use crate::kubernetes::{ClusterStore, CreateOutcome};
use crate::types::{ContainerRef, PodIdentity};
use http::{Request, Response};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::client::Body;
use kube::{Client, ResourceExt};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("POST".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "https://kubernetes.default.svc")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();

        // Try exact match first
        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Try prefix match for paths like /api/v1/namespaces/foo
        for ((m, p), resp) in responses.iter() {
            if m == method && path.starts_with(p) {
                return Some(resp.clone());
            }
        }

        None
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

        let response = self.find_response(&method, &path);

        Box::pin(async move {
            match response {
                Some((status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                None => {
                    // Default 404 for unmatched requests
                    let body = r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#;
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(body.as_bytes().to_vec()))
                        .unwrap())
                }
            }
        })
    }
}

/// Build a Pod JSON response with the given (name, image) containers
pub fn pod_json(namespace: &str, name: &str, containers: &[(&str, &str)]) -> String {
    let containers: Vec<_> = containers
        .iter()
        .map(|(name, image)| serde_json::json!({ "name": name, "image": image }))
        .collect();

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "spec": { "containers": containers }
    })
    .to_string()
}

/// Build a ConfigMap JSON response holding `config.json`
pub fn config_map_json(namespace: &str, name: &str, content: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "ConfigMap",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "data": { "config.json": content }
    })
    .to_string()
}

/// Build a ConfigMapList JSON response with empty ConfigMaps of the given names
pub fn config_map_list_json(names: &[&str]) -> String {
    let items: Vec<_> = names
        .iter()
        .map(|name| serde_json::json!({ "metadata": { "name": name } }))
        .collect();

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "ConfigMapList",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Create a 409 conflict response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" already exists", resource, name),
        "reason": "AlreadyExists",
        "code": 409
    })
    .to_string()
}

/// In-memory `ClusterStore` holding ConfigMaps per namespace
#[derive(Clone, Default)]
pub struct FakeStore {
    pod: Option<PodIdentity>,
    config_maps: Arc<Mutex<BTreeMap<(String, String), ConfigMap>>>,
    create_calls: Arc<Mutex<usize>>,
    fail_list: bool,
    /// Report a conflict on create as if another run won the race
    conflict_on_create: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a pod with the given (name, image) containers
    pub fn with_pod(mut self, namespace: &str, name: &str, containers: &[(&str, &str)]) -> Self {
        self.pod = Some(PodIdentity {
            namespace: namespace.to_string(),
            name: name.to_string(),
            containers: containers
                .iter()
                .map(|(name, image)| ContainerRef {
                    name: name.to_string(),
                    image: image.to_string(),
                })
                .collect(),
        });
        self
    }

    /// Seed an existing ConfigMap
    pub fn with_config_map(self, namespace: &str, name: &str) -> Self {
        let cm = ConfigMap {
            metadata: kube::api::ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        self.config_maps
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()), cm);
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn conflicting_create(mut self) -> Self {
        self.conflict_on_create = true;
        self
    }

    pub fn create_calls(&self) -> usize {
        *self.create_calls.lock().unwrap()
    }

    pub fn config_map(&self, namespace: &str, name: &str) -> Option<ConfigMap> {
        self.config_maps
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }
}

fn api_error(code: u16, reason: &str) -> kube::Error {
    kube::Error::Api(kube::error::ErrorResponse {
        status: "Failure".to_string(),
        message: reason.to_string(),
        reason: reason.to_string(),
        code,
    })
}

impl ClusterStore for FakeStore {
    async fn get_pod(&self, namespace: &str, name: &str) -> StoreResult<PodIdentity> {
        match &self.pod {
            Some(pod) if pod.namespace == namespace && pod.name == name => Ok(pod.clone()),
            _ => Err(PublisherError::IdentityUnavailable {
                namespace: namespace.to_string(),
                name: name.to_string(),
                source: api_error(404, "NotFound"),
            }),
        }
    }

    async fn list_config_maps(&self, namespace: &str) -> StoreResult<Vec<String>> {
        if self.fail_list {
            return Err(PublisherError::StoreUnavailable(api_error(503, "ServiceUnavailable")));
        }
        Ok(self
            .config_maps
            .lock()
            .unwrap()
            .keys()
            .filter(|(ns, _)| ns == namespace)
            .map(|(_, name)| name.clone())
            .collect())
    }

    async fn create_config_map(
        &self,
        namespace: &str,
        config_map: &ConfigMap,
    ) -> StoreResult<CreateOutcome> {
        *self.create_calls.lock().unwrap() += 1;

        let key = (namespace.to_string(), config_map.name_any());
        let mut config_maps = self.config_maps.lock().unwrap();
        if self.conflict_on_create || config_maps.contains_key(&key) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        config_maps.insert(key, config_map.clone());
        Ok(CreateOutcome::Created(config_map.clone()))
    }
}

use crate::mode::Mode;
use crate::search::{self, EntityKind};
use crate::sign::RequestSigner;
use crate::Credential;
use bytes::Bytes;
use log::debug;
use ptvsign_core::time::{format_iso8601, DateTime};
use ptvsign_core::{Context, Error, ProvideCredential, Result, SigningCredential};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Client is the main entry point for calling the timetable service.
///
/// It loads a credential once through the configured provider, signs every
/// call, performs the GET through the [`Context`], and hands the decoded
/// JSON back untouched. Responses are schema-agnostic: the service owns the
/// shape, this client only owns the authentication contract.
#[derive(Clone, Debug)]
pub struct Client {
    ctx: Context,
    signer: RequestSigner,
    provider: Arc<dyn ProvideCredential<Credential = Credential>>,
    credential: Arc<Mutex<Option<Credential>>>,
}

impl Client {
    /// Create a new client.
    pub fn new(ctx: Context, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        Self {
            ctx,
            signer: RequestSigner::new(),
            provider: Arc::new(provider),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the request signer, e.g. to point at a different host.
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    async fn credential(&self) -> Result<Credential> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        if let Some(cred) = cached {
            return Ok(cred);
        }

        let loaded = self.provider.provide_credential(&self.ctx).await?;
        let Some(cred) = loaded.filter(SigningCredential::is_valid) else {
            return Err(Error::credential_invalid(
                "no usable PTV credential available; supply dev id and api key before calling",
            ));
        };

        *self.credential.lock().expect("lock poisoned") = Some(cred.clone());
        Ok(cred)
    }

    /// Make a signed call to `path` with the given query parameters and
    /// return the decoded JSON response.
    ///
    /// `path` is the bare route (no leading slash, no query string);
    /// `params` keep their order on the wire and in the signed bytes.
    /// Failures are never retried here.
    pub async fn call(&self, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        let cred = self.credential().await?;
        let url = self.signer.signed_url(&cred, path, params)?;

        // Observability hook: the full URL (signature included, key never)
        // is logged before the request leaves.
        debug!("GET {url}");

        let req = http::Request::get(url.as_str()).body(Bytes::new())?;
        let (parts, body) = self.ctx.http_send(req).await?.into_parts();

        if !parts.status.is_success() {
            return Err(Error::transport_failed(format!(
                "GET {} returned {}: {}",
                path,
                parts.status,
                String::from_utf8_lossy(&body)
            )));
        }

        serde_json::from_slice(&body)
            .map_err(|e| Error::decode_failed(format!("response for {path} is not valid JSON")).with_source(e))
    }

    /// "Route Types returns all route types (i.e. identifiers of transport
    /// modes) and their names."
    pub async fn route_types(&self) -> Result<Value> {
        self.call("route_types", &[]).await
    }

    /// "Stops Nearby returns up to 30 stops nearest to a specified
    /// coordinate." Coordinates are whole degrees, as the service route
    /// expects them.
    pub async fn stops_by_location(&self, latitude: i64, longitude: i64) -> Result<Value> {
        self.call(&format!("stops/location/{latitude},{longitude}"), &[])
            .await
    }

    /// Stop details for a stop on a given transport mode.
    pub async fn stop_details(&self, stop_id: i64, route_type: impl Into<Mode>) -> Result<Value> {
        let rt = route_type.into().resolve()?;
        self.call(&format!("stops/{stop_id}/route_type/{rt}"), &[])
            .await
    }

    /// Next departures for all routes through a stop, in both directions.
    pub async fn departures(&self, route_type: impl Into<Mode>, stop_id: i64) -> Result<Value> {
        let rt = route_type.into().resolve()?;
        self.call(&format!("departures/route_type/{rt}/stop/{stop_id}"), &[])
            .await
    }

    /// "Specific Next Departures returns the times for the next departures
    /// at a prescribed stop for a specific mode, line and direction."
    pub async fn specific_next_departures(
        &self,
        route_type: impl Into<Mode>,
        stop_id: i64,
        route_id: i64,
    ) -> Result<Value> {
        let rt = route_type.into().resolve()?;
        self.call(
            &format!("departures/route_type/{rt}/stop/{stop_id}/route/{route_id}"),
            &[],
        )
        .await
    }

    /// "The Stopping Pattern API returns the stopping pattern for a specific
    /// run from a prescribed stop at a prescribed time", ordered by stopping
    /// order. `for_utc` narrows the pattern to a point in time.
    pub async fn stopping_pattern(
        &self,
        run_id: i64,
        route_type: impl Into<Mode>,
        for_utc: Option<DateTime>,
    ) -> Result<Value> {
        let rt = route_type.into().resolve()?;
        let path = format!("pattern/run/{run_id}/route_type/{rt}");
        match for_utc {
            Some(t) => {
                let stamp = format_iso8601(t);
                self.call(&path, &[("for_utc", stamp.as_str())]).await
            }
            None => self.call(&path, &[]).await,
        }
    }

    /// "The Stops on a Line API returns a list of all the stops for a
    /// requested line, ordered by location name."
    pub async fn stops_on_route(&self, route_id: i64, route_type: impl Into<Mode>) -> Result<Value> {
        let rt = route_type.into().resolve()?;
        self.call(&format!("stops/route/{route_id}/route_type/{rt}"), &[])
            .await
    }

    /// All current disruptions across the network.
    pub async fn disruptions(&self) -> Result<Value> {
        self.call("disruptions", &[]).await
    }

    /// "The Search API returns all stops and lines that match the input
    /// search text." The query is percent-encoded as a path segment.
    pub async fn search(&self, query: &str) -> Result<Value> {
        self.call(&search::search_path(query), &[]).await
    }

    /// Search for `name` and keep only entries of the given kind, optionally
    /// narrowed to one transport type (e.g. `"train"`). Yields each entry's
    /// `result` record with its `distance` field stripped, in service order.
    pub async fn find_entities(
        &self,
        name: &str,
        kind: EntityKind,
        transport_type: Option<&str>,
    ) -> Result<Vec<Value>> {
        let response = self.search(name).await?;
        search::filter_results(response, kind, transport_type)
    }

    /// Search for stops matching `name`.
    pub async fn find_stops(&self, name: &str, transport_type: Option<&str>) -> Result<Vec<Value>> {
        self.find_entities(name, EntityKind::Stop, transport_type)
            .await
    }

    /// Search for lines matching `name`.
    pub async fn find_lines(&self, name: &str, transport_type: Option<&str>) -> Result<Vec<Value>> {
        self.find_entities(name, EntityKind::Line, transport_type)
            .await
    }
}

//! Record-set fetching.
//!
//! Each [`Dataset`] is one GET returning a JSON array. Requests are aborted
//! after `FETCH_TIMEOUT_MS`, and the session cache is consulted first.

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response, Window};

use crate::config::{FETCH_TIMEOUT_MS, SiteConfig};
use crate::error::FetchError;
use crate::utils::cache;

/// A record set the store can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    Networks,
    FoodResources,
}

impl Dataset {
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Networks => "networks",
            Dataset::FoodResources => "food_resources",
        }
    }

    /// sessionStorage key.
    pub fn cache_key(self) -> &'static str {
        match self {
            Dataset::Networks => "aidmap.networks",
            Dataset::FoodResources => "aidmap.food_resources",
        }
    }

    pub fn url(self, config: &SiteConfig) -> &str {
        match self {
            Dataset::Networks => &config.networks_url,
            Dataset::FoodResources => &config.food_resources_url,
        }
    }
}

/// Records for `dataset`, from the session cache or the network.
///
/// Cache writes are best-effort.
pub async fn fetch_records<T>(dataset: Dataset, config: &SiteConfig) -> Result<Vec<T>, FetchError>
where
    T: DeserializeOwned + Serialize,
{
    let key = dataset.cache_key();
    if let Some(records) = cache::load::<T>(key) {
        tracing::debug!(dataset = dataset.name(), "served from session cache");
        return Ok(records);
    }

    let body = get_text(dataset.url(config)).await?;
    let records = parse_records::<T>(&body)?;

    if let Err(err) = cache::store(key, &records) {
        tracing::debug!(dataset = dataset.name(), error = %err, "session cache write skipped");
    }
    Ok(records)
}

/// Parse a response body holding a JSON array of records.
pub fn parse_records<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// GET `url` as text, failing with [`FetchError::Timeout`] once the
/// request has been aborted by the timer.
async fn get_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let controller = AbortController::new().map_err(|_| FetchError::RequestCreationFailed)?;
    let signal = controller.signal();

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_signal(Some(&signal));
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let abort = Closure::<dyn FnMut()>::once(move || controller.abort());
    let timer = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            abort.as_ref().unchecked_ref(),
            FETCH_TIMEOUT_MS,
        )
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = read_body(&window, &request).await;
    window.clear_timeout_with_handle(timer);
    drop(abort);

    match result {
        Err(_) if signal.aborted() => Err(FetchError::Timeout),
        other => other,
    }
}

async fn read_body(window: &Window, request: &Request) -> Result<String, FetchError> {
    let response: Response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| FetchError::NetworkError(format!("{e:?}")))?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    text.as_string().ok_or(FetchError::InvalidContent)
}

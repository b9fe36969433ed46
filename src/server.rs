// SPDX-License-Identifier: GPL-3.0-or-later
use http::StatusCode;
use serde::Deserialize;
use tracing::{error, info};
use warp::{Filter, Rejection, Reply};

use std::convert::Infallible;
use std::time::Duration;

use crate::pipeline;
use crate::settings::FetchSettings;
use crate::source::ImageSource;

const USAGE: &str = "Error: Invalid number of arguments. Please input the file address as an \
    argument as so: /count?imagePath=path-or-url-to-image";

/// State shared by all requests: a single reused download client and the
/// fetch limits.
#[derive(Clone, Debug)]
pub(crate) struct Context {
    client: reqwest::Client,
    fetch: FetchSettings,
}

impl Context {
    pub(crate) fn new(settings: &FetchSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from(settings.timeout))
            .build()?;
        Ok(Self {
            client,
            fetch: *settings,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CountQuery {
    // The key is camelCase on the wire.
    #[serde(rename = "imagePath")]
    image_path: Option<String>,
}

/// The single route answering line count requests, for any request method.
pub(crate) fn routes(
    context: Context,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path("count")
        .and(warp::path::end())
        .and(warp::query::<CountQuery>())
        .and(warp::any().map(move || context.clone()))
        .and_then(count_lines)
}

async fn count_lines(query: CountQuery, context: Context) -> Result<impl Reply, Infallible> {
    info!("Line count request received");
    let raw_path = match query.image_path {
        Some(path) if !path.is_empty() => path,
        _ => {
            return Ok(warp::reply::with_status(
                USAGE.to_string(),
                StatusCode::BAD_REQUEST,
            ))
        }
    };
    info!(path = %raw_path, "Image path received");
    Ok(match count_for_path(&raw_path, &context).await {
        Ok(count) => warp::reply::with_status(
            format!("The number of columns are {}", count),
            StatusCode::OK,
        ),
        Err(err) => {
            error!("An error occurred: {:#}", err);
            warp::reply::with_status(String::new(), StatusCode::INTERNAL_SERVER_ERROR)
        }
    })
}

async fn count_for_path(raw_path: &str, context: &Context) -> anyhow::Result<u32> {
    let source = ImageSource::from(raw_path);
    let image_data = source.fetch(&context.client, &context.fetch).await?;
    pipeline::count_from_bytes(image_data).await
}

//! WIPO IPC classification client
//!
//! Sends idea text to the IPC categorization service and parses the XML
//! prediction list. Raw codes come back zero-padded
//! (e.g. `A01B0001020000`) and are reformatted to the canonical
//! `A01B1/02` shape.

use serde::Serialize;
use tracing::debug;

use patscout_core::config::SearchConfig;

use crate::{Error, Result};

/// One IPC classification prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpcPrediction {
    /// 1-based rank of the prediction
    pub rank: u32,
    /// Formatted IPC code, e.g. `A01B1/02`
    pub category: String,
    /// Service confidence score
    pub score: i64,
}

/// Format a raw zero-padded IPC code into the canonical form
///
/// Layout of the raw code: section (1 char), class (2), subclass (1),
/// main group (4, left-padded), subgroup (the rest, right-padded).
pub fn format_ipc_code(raw: &str) -> Result<String> {
    if !raw.is_ascii() || raw.len() < 10 {
        return Err(Error::Parse(format!("malformed IPC code: {raw:?}")));
    }

    let section = &raw[0..1];
    let class = &raw[1..3];
    let subclass = &raw[3..4];
    let main_group = raw[4..8].trim_start_matches('0');
    let subgroup = format!("{}{}", &raw[8..10], raw[10..].trim_end_matches('0'));

    Ok(format!("{section}{class}{subclass}{main_group}/{subgroup}"))
}

/// Parse the XML prediction list returned by the classification service
pub fn parse_predictions(xml: &str) -> Result<Vec<IpcPrediction>> {
    let doc = roxmltree::Document::parse(xml)?;
    let mut predictions = Vec::new();

    for node in doc.descendants().filter(|n| n.has_tag_name("prediction")) {
        let text_of = |tag: &str| {
            node.children()
                .find(|c| c.has_tag_name(tag))
                .and_then(|c| c.text())
                .map(str::trim)
                .ok_or_else(|| Error::Parse(format!("prediction missing <{tag}>")))
        };

        let rank = text_of("rank")?
            .parse::<u32>()
            .map_err(|e| Error::Parse(format!("bad prediction rank: {e}")))?;
        let score = text_of("score")?
            .parse::<i64>()
            .map_err(|e| Error::Parse(format!("bad prediction score: {e}")))?;
        let category = format_ipc_code(text_of("category")?)?;

        predictions.push(IpcPrediction {
            rank,
            category,
            score,
        });
    }

    Ok(predictions)
}

/// Client for the WIPO IPC classification endpoint
#[derive(Debug, Clone)]
pub struct IpcClient {
    client: reqwest::Client,
    url: String,
    predictions: u32,
    level: String,
}

impl IpcClient {
    /// Create a client from the search configuration
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            url: config.ipc_url.clone(),
            predictions: config.ipc_predictions,
            level: config.ipc_level.clone(),
        })
    }

    /// Classify a query text into ranked IPC predictions
    pub async fn classify(&self, query: &str) -> Result<Vec<IpcPrediction>> {
        let body = self.request_xml(query);

        debug!(url = %self.url, "Sending IPC classification request");
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/xml")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let xml = response.text().await?;
        parse_predictions(&xml)
    }

    fn request_xml(&self, query: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <request>\n\
               <lang>en</lang>\n\
               <text>{}</text>\n\
               <numberofpredictions>{}</numberofpredictions>\n\
               <hierarchiclevel>{}</hierarchiclevel>\n\
             </request>",
            escape_xml(query),
            self.predictions,
            self.level
        )
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

//! Payload normalization: the one place where loosely-shaped service bodies
//! become the strict display entities.
//!
//! Everything here is total: where a safe default exists (job lists, tip
//! lists, individual fields) a shape mismatch produces the default instead
//! of an error. The only escalation is the chat reply, where fabricating a
//! bot message would be worse than failing the turn.

use log::warn;
use serde_json::Value;

use crate::market_tips::MarketTip;
use crate::recommendations::JobListing;

/// Sentinel stored when a job arrives without a usable description.
pub const MISSING_DESCRIPTION: &str = "No description provided.";

const UNTITLED_POSITION: &str = "Untitled Position";
const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Extracts job listings from a recommendations body. A missing or
/// non-array `recommendations` field yields an empty list, never an error.
pub fn job_listings(body: &Value) -> Vec<JobListing> {
    body.get("recommendations")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(job_listing).collect())
        .unwrap_or_default()
}

fn job_listing(item: &Value) -> JobListing {
    JobListing {
        title: string_or(item, "title", UNTITLED_POSITION),
        company: string_or(item, "company", UNKNOWN_COMPANY),
        short_description: string_or(item, "short_description", MISSING_DESCRIPTION),
        relevance_notes: optional_string(item, "relevance_notes"),
        skills: string_list(item, "skills"),
        url: optional_string(item, "url"),
        logo_url: optional_string(item, "logo"),
    }
}

/// Extracts tips from a market-trends body. The service occasionally wraps
/// the array one level deeper under the same field name; that case is
/// unwrapped. Anything else non-array normalizes to empty with a warning.
pub fn market_tips(body: &Value) -> Vec<MarketTip> {
    let items = match body.get("market_trends") {
        Some(Value::Array(items)) => items.as_slice(),
        Some(Value::Object(wrapper)) => match wrapper.get("market_trends") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => {
                warn!("market_trends wrapper does not hold an array; treating as empty");
                return Vec::new();
            }
        },
        _ => {
            warn!("market_trends field missing or not an array; treating as empty");
            return Vec::new();
        }
    };
    items.iter().map(market_tip).collect()
}

fn market_tip(item: &Value) -> MarketTip {
    MarketTip {
        title: string_or(item, "title", ""),
        description: string_or(item, "description", ""),
    }
}

/// Extracts the single reply string of a chat body. There is no safe
/// default here: an absent or non-string reply fails the turn.
pub fn chat_reply(body: &Value) -> Result<String, String> {
    body.get("response")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| "reply missing or not text in server response".to_string())
}

fn string_or(item: &Value, key: &str, default: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn optional_string(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(ToOwned::to_owned)
}

fn string_list(item: &Value, key: &str) -> Vec<String> {
    item.get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

// src/domain/media/urls.rs
use chrono::{DateTime, Datelike, Utc};
use serde_json::{Map, Value};

/// Builds public URLs for uploaded files, laid out as
/// `{base}/uploads/{YYYY}/{MM}/{file}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrlBuilder {
    base_url: String,
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

impl MediaUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn folder_for(uploaded_at: DateTime<Utc>) -> String {
        format!(
            "uploads/{}/{:02}",
            uploaded_at.year(),
            uploaded_at.month()
        )
    }

    /// Point `url` and every stored size variant at the media host.
    ///
    /// Only `url` and `sizes.*.url` are ever written; every other key, explicit
    /// `null`s included, is left as it came in. Documents without a non-empty
    /// `filename` are not touched at all. The upload date comes from
    /// `createdAt`, falling back to `now` when it is missing or unparseable.
    /// Size variants are addressed as `{size}-{filename}` using the parent
    /// document's filename, and only when the variant has a filename of its
    /// own.
    pub fn rewrite(&self, doc: &mut Map<String, Value>, now: DateTime<Utc>) {
        let Some(filename) = non_empty_str(doc.get("filename")).map(str::to_owned) else {
            return;
        };

        let uploaded_at = non_empty_str(doc.get("createdAt"))
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map_or(now, |parsed| parsed.with_timezone(&Utc));
        let folder = format!("{}/{}", self.base_url, Self::folder_for(uploaded_at));

        doc.insert("url".into(), Value::String(format!("{folder}/{filename}")));

        if let Some(Value::Object(sizes)) = doc.get_mut("sizes") {
            for (name, variant) in sizes.iter_mut() {
                let Value::Object(variant) = variant else {
                    continue;
                };
                if non_empty_str(variant.get("filename")).is_some() {
                    variant.insert(
                        "url".into(),
                        Value::String(format!("{folder}/{name}-{filename}")),
                    );
                }
            }
        }
    }
}

// src/application/hooks/media.rs
use super::AfterReadHook;
use crate::application::{ApplicationResult, error::ApplicationError, ports::time::Clock};
use crate::domain::media::MediaUrlBuilder;
use serde_json::Value;
use std::sync::Arc;

/// `afterRead` hook that points media URLs at the public media host.
pub struct MediaUrlHook {
    urls: MediaUrlBuilder,
    clock: Arc<dyn Clock>,
}

impl MediaUrlHook {
    pub fn new(urls: MediaUrlBuilder, clock: Arc<dyn Clock>) -> Self {
        Self { urls, clock }
    }
}

impl AfterReadHook for MediaUrlHook {
    fn after_read(&self, doc: Value) -> ApplicationResult<Value> {
        let Value::Object(mut doc) = doc else {
            return Err(ApplicationError::validation(
                "media document must be a JSON object",
            ));
        };

        self.urls.rewrite(&mut doc, self.clock.now());
        Ok(Value::Object(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
        }
    }

    fn hook() -> MediaUrlHook {
        MediaUrlHook::new(
            MediaUrlBuilder::new("https://media.example.test"),
            Arc::new(FixedClock),
        )
    }

    #[test]
    fn unknown_fields_round_trip() {
        let doc = json!({
            "id": "66a1",
            "alt": "Chennai skyline",
            "filename": "skyline.jpg",
            "mimeType": "image/jpeg",
            "focalX": null,
            "sizes": {
                "small": { "filename": "skyline-600x400.jpg", "width": 600, "height": 400 },
                "square": { "url": null, "filename": null, "width": null }
            }
        });

        let out = hook().after_read(doc).unwrap();

        assert_eq!(out["id"], "66a1");
        assert_eq!(out["mimeType"], "image/jpeg");
        assert_eq!(out["focalX"], Value::Null);
        assert_eq!(out["url"], "https://media.example.test/uploads/2024/07/skyline.jpg");
        assert_eq!(out["sizes"]["small"]["width"], 600);
        assert_eq!(
            out["sizes"]["small"]["url"],
            "https://media.example.test/uploads/2024/07/small-skyline.jpg"
        );
        assert_eq!(
            out["sizes"]["square"],
            json!({ "url": null, "filename": null, "width": null })
        );
    }

    #[test]
    fn null_bearing_document_without_file_is_byte_identical() {
        let raw = r#"{"alt":"x","createdAt":null,"filename":null,"sizes":{"og":{"filename":null,"url":null,"width":null}},"url":null}"#;
        let doc: Value = serde_json::from_str(raw).unwrap();

        let out = hook().after_read(doc).unwrap();

        assert_eq!(serde_json::to_string(&out).unwrap(), raw);
    }

    #[test]
    fn non_object_documents_are_rejected() {
        let err = hook().after_read(json!("nope")).unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }
}

//! Helpers for naming and configuring throwaway test resources.

use serde_json::{Value, json};
use uuid::Uuid;

use crate::api::TaskRequest;

/// Block id of the `nasa-modis` data block.
pub const NASA_MODIS_BLOCK: &str = "ef6faaf5-8182-4986-bce4-4f811d2745e5";
/// Block id of the `sharpening` processing block.
pub const SHARPENING_BLOCK: &str = "e374ea64-dc3b-4500-bb4b-974260fb203e";

/// Random alphanumeric sequence of the given length, for naming workflows
/// and descriptions that must not collide between runs. Covers the long-name
/// boundary case (255 chars) as well as short labels.
pub fn random_alphanumeric(length: usize) -> String {
    let mut out = String::with_capacity(length + 32);
    while out.len() < length {
        out.push_str(Uuid::new_v4().simple().to_string().as_str());
    }
    out.truncate(length);
    out
}

/// The canonical two-step task chain: MODIS imagery feeding the sharpening
/// block. Order matters; the child references the root by name.
pub fn modis_sharpening_tasks() -> Vec<TaskRequest> {
    vec![
        TaskRequest::root("nasa-modis:1", NASA_MODIS_BLOCK),
        TaskRequest::child("sharpening:1", "nasa-modis:1", SHARPENING_BLOCK),
    ]
}

/// Job configuration matching [`modis_sharpening_tasks`]. The schema is
/// owned by the service; keyed by task name.
pub fn modis_sharpening_job_config() -> Value {
    json!({
        "nasa-modis:1": {
            "bbox": [13.33, 52.49, 13.41, 52.52],
            "imagery_layers": ["MODIS_Terra_CorrectedReflectance_TrueColor"],
            "time": "2020-01-01T00:00:00+00:00/2020-01-02T23:59:59+00:00",
            "zoom_level": 9
        },
        "sharpening:1": {
            "strength": "medium"
        }
    })
}

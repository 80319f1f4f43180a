use serde::Serialize;

use htnorm_manifest::{CheckError, CheckReport};

#[derive(Debug, Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub code: i32,
    pub message: String,
}

pub fn success(report: CheckReport) -> JsonOut<CheckReport> {
    JsonOut {
        ok: true,
        data: Some(report),
        error: None,
    }
}

pub fn failure(err: &CheckError) -> JsonOut<CheckReport> {
    let kind = err.kind();
    JsonOut {
        ok: false,
        data: None,
        error: Some(ErrorBody {
            kind: kind.as_str(),
            code: kind.code(),
            message: err.to_string(),
        }),
    }
}

pub fn human(report: &CheckReport) -> String {
    format!("ok: {} {} = {}", report.manifest.display(), report.key_path, report.found)
}

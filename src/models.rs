use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current UTC time rendered as naive ISO-8601 with microsecond precision
/// (no timezone suffix).
pub fn utc_now_iso() -> String {
    Utc::now()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Inbound submission from a device.
///
/// `source` and `ts` are optional; defaults are filled by
/// [`SensorPayload::into_reading`], not scattered through handler logic.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorPayload {
    pub device_id: String,
    pub temp: f64,
    pub hum: f64,
    pub source: Option<String>,
    pub ts: Option<String>,
}

impl SensorPayload {
    /// Fill server-assigned defaults and produce the reading to store.
    pub fn into_reading(self) -> SensorReading {
        SensorReading {
            device_id: self.device_id,
            temperature: self.temp,
            humidity: self.hum,
            source: self.source.unwrap_or_else(|| "unknown".to_string()),
            timestamp: self.ts.unwrap_or_else(utc_now_iso),
        }
    }
}

/// One stored sensor reading. Wire keys use the abbreviated device
/// vocabulary (`temp`/`hum`/`ts`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub device_id: String,
    #[serde(rename = "temp")]
    pub temperature: f64,
    #[serde(rename = "hum")]
    pub humidity: f64,
    pub source: String,
    #[serde(rename = "ts")]
    pub timestamp: String,
}

/// Acknowledgement for an accepted submission, echoing the stored reading.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub message: String,
    pub latest: SensorReading,
}

/// Static service summary served at the root.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Liveness report.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub has_data: bool,
}

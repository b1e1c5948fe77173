//! KMA short-term forecast HTTP adapter.
//!
//! The dashboard reads upcoming rainfall from the Korea Meteorological
//! Administration's village forecast service before each regeneration
//! cycle. Failures degrade to `None`; the caller falls back to its own
//! defaults rather than blocking the refresh loop.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub base_url: String,
    /// API service key issued by data.go.kr.
    pub service_key: String,
    /// KMA forecast grid X. 61 covers the Gangnam district.
    pub grid_x: u32,
    /// KMA forecast grid Y.
    pub grid_y: u32,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "http://apis.data.go.kr/1360000/VilageFcstInfoService_2.0".to_string(),
            service_key: String::new(),
            grid_x: 61,
            grid_y: 125,
            timeout_secs: 10,
        }
    }
}

/// Bucketed rainfall intensity for the forecast display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RainIntensity {
    Light,
    Moderate,
    Heavy,
}

impl RainIntensity {
    fn for_rainfall(mm: f64) -> Self {
        if mm > 10.0 {
            Self::Heavy
        } else if mm > 3.0 {
            Self::Moderate
        } else {
            Self::Light
        }
    }
}

/// One hourly forecast slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast slot time, `HH:MM`.
    pub time: String,
    /// Expected rainfall in mm.
    pub rainfall: f64,
    pub intensity: RainIntensity,
}

/// Current conditions plus a six-hour forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub wind_speed: f64,
    pub forecast: Vec<ForecastEntry>,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    config: WeatherConfig,
    client: reqwest::blocking::Client,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Fetches the forecast issued at `base_date`/`base_time` (KMA issues
    /// at 02, 05, 08, 11, 14, 17, 20 and 23 o'clock).
    ///
    /// Returns `None` on any transport, status or payload failure.
    pub fn fetch(&self, base_date: &str, base_time: &str) -> Option<WeatherReport> {
        let url = format!("{}/getVilageFcst", self.config.base_url);
        let nx = self.config.grid_x.to_string();
        let ny = self.config.grid_y.to_string();

        let response = self
            .client
            .get(url)
            .query(&[
                ("serviceKey", self.config.service_key.as_str()),
                ("pageNo", "1"),
                ("numOfRows", "1000"),
                ("dataType", "JSON"),
                ("base_date", base_date),
                ("base_time", base_time),
                ("nx", nx.as_str()),
                ("ny", ny.as_str()),
            ])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<ForecastResponse>());

        match response {
            Ok(body) => parse_report(body),
            Err(err) => {
                warn!(error = %err, "weather fetch failed");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    response: ResponseEnvelope,
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    header: ResponseHeader,
    body: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
struct ResponseHeader {
    #[serde(rename = "resultCode")]
    result_code: String,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    items: ForecastItems,
}

#[derive(Debug, Deserialize)]
struct ForecastItems {
    item: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    category: String,
    #[serde(rename = "fcstDate")]
    fcst_date: String,
    #[serde(rename = "fcstTime")]
    fcst_time: String,
    #[serde(rename = "fcstValue")]
    fcst_value: String,
}

#[derive(Debug, Default, Clone)]
struct Slot {
    temperature: Option<f64>,
    humidity: Option<f64>,
    rainfall: Option<f64>,
    wind_speed: Option<f64>,
}

fn parse_report(body: ForecastResponse) -> Option<WeatherReport> {
    if body.response.header.result_code != "00" {
        warn!(code = %body.response.header.result_code, "weather service error");
        return None;
    }

    let items = body.response.body?.items.item;
    if items.is_empty() {
        return None;
    }

    // Group by forecast slot; BTreeMap keeps slots chronological.
    let mut slots: BTreeMap<(String, String), Slot> = BTreeMap::new();
    for item in &items {
        let slot = slots
            .entry((item.fcst_date.clone(), item.fcst_time.clone()))
            .or_default();
        match item.category.as_str() {
            "TMP" => slot.temperature = item.fcst_value.parse().ok(),
            "REH" => slot.humidity = item.fcst_value.parse().ok(),
            "PCP" => slot.rainfall = parse_rainfall(&item.fcst_value),
            "WSD" => slot.wind_speed = item.fcst_value.parse().ok(),
            _ => {}
        }
    }

    let mut entries = slots.into_iter();
    let (_, current) = entries.next()?;

    let forecast = entries
        .take(6)
        .map(|((_, time), slot)| {
            let rainfall = slot.rainfall.unwrap_or(0.0);
            ForecastEntry {
                time: format_slot_time(&time),
                rainfall,
                intensity: RainIntensity::for_rainfall(rainfall),
            }
        })
        .collect();

    Some(WeatherReport {
        temperature: current.temperature.unwrap_or(20.0),
        humidity: current.humidity.unwrap_or(60.0),
        rainfall: current.rainfall.unwrap_or(0.0),
        wind_speed: current.wind_speed.unwrap_or(3.0),
        forecast,
    })
}

/// The PCP category reports "강수없음" (no precipitation) instead of zero,
/// and may suffix amounts with "mm".
fn parse_rainfall(value: &str) -> Option<f64> {
    if value == "강수없음" {
        return Some(0.0);
    }
    value.trim_end_matches("mm").parse().ok()
}

/// `"1400"` → `"14:00"`.
fn format_slot_time(fcst_time: &str) -> String {
    if fcst_time.len() == 4 {
        format!("{}:{}", &fcst_time[..2], &fcst_time[2..])
    } else {
        fcst_time.to_string()
    }
}

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::Deserialize;
use tokio::time::Duration;

use crate::external::price_provider::{PriceProvider, PriceProviderError};
use crate::models::PricePoint;

/// A hung fetch fails fast instead of stalling a batch pass.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct YahooProvider {
    client: reqwest::Client,
}

impl YahooProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_chart(&self, url: String) -> Result<Vec<PricePoint>, PriceProviderError> {
        let resp = self
            .client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| PriceProviderError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PriceProviderError::RateLimited);
        }

        let body = resp
            .json::<YahooChartResponse>()
            .await
            .map_err(|e| PriceProviderError::Parse(e.to_string()))?;

        let result = body
            .chart
            .result
            .and_then(|mut r| r.pop())
            .ok_or_else(|| PriceProviderError::BadResponse("missing result".into()))?;

        // timestamp aligns with the close list by index
        let closes = result
            .indicators
            .quote
            .first()
            .ok_or_else(|| PriceProviderError::BadResponse("missing quote".into()))?
            .close
            .clone();

        let mut out = Vec::new();

        for (i, ts) in result.timestamp.iter().enumerate() {
            // skip missing or non-positive closes
            let Some(close) = closes.get(i).and_then(|v| *v) else {
                continue;
            };
            if close <= 0.0 {
                continue;
            }

            let dt = DateTime::from_timestamp(*ts, 0)
                .ok_or_else(|| PriceProviderError::Parse("bad timestamp".into()))?;

            out.push(PricePoint {
                date: dt.date_naive(),
                close,
            });
        }

        // Normalize: ascending by date, one point per trading day.
        out.sort_by_key(|p| p.date);
        out.dedup_by_key(|p| p.date);

        Ok(out)
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

// Minimal response structs (only what we need)
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    timestamp: Vec<i64>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooQuote {
    close: Vec<Option<f64>>,
}

fn unix_seconds(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

#[async_trait]
impl PriceProvider for YahooProvider {
    async fn fetch_range(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, PriceProviderError> {
        // period2 is exclusive; push it one day past `end` so the last
        // trading day is included.
        let period1 = unix_seconds(start);
        let period2 = unix_seconds(end + chrono::Duration::days(1));

        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{symbol}?period1={period1}&period2={period2}&interval=1d"
        );

        self.fetch_chart(url).await
    }

    async fn fetch_recent(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, PriceProviderError> {
        // Yahoo supports named ranges like "6mo", "1y". Map days roughly.
        let range = if days <= 30 {
            "1mo"
        } else if days <= 180 {
            "6mo"
        } else if days <= 366 {
            "1y"
        } else {
            "5y"
        };

        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{symbol}?range={range}&interval=1d"
        );

        self.fetch_chart(url).await
    }
}

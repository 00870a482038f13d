use sqlx::PgPool;

use crate::models::ScoreRecord;

// Runtime-bound queries throughout: the store is optional at deploy time,
// so nothing here may require a database at compile time.

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stock_scores (
            symbol TEXT PRIMARY KEY,
            current_price DOUBLE PRECISION NOT NULL,
            weighted_avg DOUBLE PRECISION NOT NULL,
            value_score DOUBLE PRECISION NOT NULL,
            value_ratio DOUBLE PRECISION NOT NULL,
            timing_score DOUBLE PRECISION NOT NULL,
            momentum_oscillator DOUBLE PRECISION NOT NULL,
            final_score DOUBLE PRECISION NOT NULL,
            signal TEXT NOT NULL,
            margin DOUBLE PRECISION NOT NULL,
            computed_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Overwrite the stored record for this symbol. No history is retained.
pub async fn upsert_score(pool: &PgPool, record: &ScoreRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO stock_scores (
            symbol, current_price, weighted_avg, value_score, value_ratio,
            timing_score, momentum_oscillator, final_score, signal, margin,
            computed_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ON CONFLICT (symbol) DO UPDATE SET
            current_price = EXCLUDED.current_price,
            weighted_avg = EXCLUDED.weighted_avg,
            value_score = EXCLUDED.value_score,
            value_ratio = EXCLUDED.value_ratio,
            timing_score = EXCLUDED.timing_score,
            momentum_oscillator = EXCLUDED.momentum_oscillator,
            final_score = EXCLUDED.final_score,
            signal = EXCLUDED.signal,
            margin = EXCLUDED.margin,
            computed_at = EXCLUDED.computed_at
        "#,
    )
    .bind(&record.symbol)
    .bind(record.current_price)
    .bind(record.weighted_avg)
    .bind(record.value_score)
    .bind(record.value_ratio)
    .bind(record.timing_score)
    .bind(record.momentum_oscillator)
    .bind(record.final_score)
    .bind(record.signal)
    .bind(record.margin)
    .bind(record.computed_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// All stored records, best first. The store does the ordering so cached
/// responses can be returned verbatim.
pub async fn fetch_all_ordered(pool: &PgPool) -> Result<Vec<ScoreRecord>, sqlx::Error> {
    sqlx::query_as::<_, ScoreRecord>(
        r#"
        SELECT symbol, current_price, weighted_avg, value_score, value_ratio,
               timing_score, momentum_oscillator, final_score, signal, margin,
               computed_at
        FROM stock_scores
        ORDER BY final_score DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

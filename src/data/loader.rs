use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, Date32Array, Int32Array, Int64Array, StringArray, UInt64Array};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use chrono::{Duration, NaiveDate};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{TrendingDataset, VideoRecord};

/// Directory probed for a dataset at session start.
pub const DEFAULT_DATA_DIR: &str = "data_input";

const DEFAULT_STEM: &str = "trending";
const SUPPORTED_EXTENSIONS: [&str; 4] = ["parquet", "pq", "json", "csv"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Look for `data_input/trending.{parquet,pq,json,csv}`, first hit wins.
pub fn find_default_file() -> Option<PathBuf> {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| Path::new(DEFAULT_DATA_DIR).join(format!("{DEFAULT_STEM}.{ext}")))
        .find(|p| p.is_file())
}

/// Load a trending dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – flat columns, one row per trending appearance (recommended)
/// * `.json`    – `[{ "trending_date": "2021-01-04", "title": ..., ... }, ...]`
/// * `.csv`     – header row with the column names
///
/// Expected columns: `trending_date` (ISO date), `title`, `channel_name`,
/// `category`, `view`, `like`, `dislike`, `comment` (non-negative integers);
/// `tags` and `description` are optional.
pub fn load_file(path: &Path) -> Result<TrendingDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Shared row schema (JSON + CSV)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    trending_date: NaiveDate,
    title: String,
    channel_name: String,
    category: String,
    view: u64,
    like: u64,
    dislike: u64,
    comment: u64,
    #[serde(default)]
    tags: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<RawRecord> for VideoRecord {
    fn from(raw: RawRecord) -> Self {
        VideoRecord {
            trending_date: raw.trending_date,
            title: raw.title,
            channel_name: raw.channel_name,
            category: raw.category,
            view: raw.view,
            like: raw.like,
            dislike: raw.dislike,
            comment: raw.comment,
            tags: raw.tags,
            description: raw.description,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<TrendingDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<TrendingDataset> {
    let records: Vec<RawRecord> =
        serde_json::from_str(text).context("parsing JSON records")?;
    Ok(TrendingDataset::from_records(
        records.into_iter().map(Into::into).collect(),
    ))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<TrendingDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

fn read_csv(rdr: impl Read) -> Result<TrendingDataset> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into());
    }

    Ok(TrendingDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat row per trending appearance.
///
/// `trending_date` may be a native `Date32` column (Pandas / Polars default)
/// or an ISO-8601 `Utf8` column; the counters may be any of `Int32`, `Int64`
/// or `UInt64`.
fn load_parquet(path: &Path) -> Result<TrendingDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let dates = required_column(&batch, "trending_date")?;
        let titles = required_column(&batch, "title")?;
        let channels = required_column(&batch, "channel_name")?;
        let categories = required_column(&batch, "category")?;
        let views = required_column(&batch, "view")?;
        let likes = required_column(&batch, "like")?;
        let dislikes = required_column(&batch, "dislike")?;
        let comments = required_column(&batch, "comment")?;
        let tags = optional_column(&batch, "tags");
        let descriptions = optional_column(&batch, "description");

        for row in 0..batch.num_rows() {
            records.push(VideoRecord {
                trending_date: date_at(dates, row)
                    .with_context(|| format!("row {row}: 'trending_date'"))?,
                title: string_at(titles, row)
                    .with_context(|| format!("row {row}: 'title'"))?,
                channel_name: string_at(channels, row)
                    .with_context(|| format!("row {row}: 'channel_name'"))?,
                category: string_at(categories, row)
                    .with_context(|| format!("row {row}: 'category'"))?,
                view: count_at(views, row).with_context(|| format!("row {row}: 'view'"))?,
                like: count_at(likes, row).with_context(|| format!("row {row}: 'like'"))?,
                dislike: count_at(dislikes, row)
                    .with_context(|| format!("row {row}: 'dislike'"))?,
                comment: count_at(comments, row)
                    .with_context(|| format!("row {row}: 'comment'"))?,
                tags: tags.and_then(|col| optional_string_at(col, row)),
                description: descriptions.and_then(|col| optional_string_at(col, row)),
            });
        }
    }

    Ok(TrendingDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

fn required_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn optional_column<'a>(batch: &'a RecordBatch, name: &str) -> Option<&'a Arc<dyn Array>> {
    batch.schema().index_of(name).ok().map(|idx| batch.column(idx))
}

/// Read a date cell from a `Date32` or ISO-8601 `Utf8` column.
fn date_at(col: &Arc<dyn Array>, row: usize) -> Result<NaiveDate> {
    if col.is_null(row) {
        bail!("null date value");
    }
    match col.data_type() {
        DataType::Date32 => {
            let arr = col.as_any().downcast_ref::<Date32Array>().unwrap();
            let days = arr.value(row);
            NaiveDate::default()
                .checked_add_signed(Duration::days(i64::from(days)))
                .context("date out of range")
        }
        DataType::Utf8 => {
            let arr = col.as_any().downcast_ref::<StringArray>().unwrap();
            let s = arr.value(row);
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("'{s}' is not an ISO-8601 date"))
        }
        other => bail!("Expected Date32 or Utf8 date column, got {other:?}"),
    }
}

fn string_at(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null string value");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col.as_any().downcast_ref::<StringArray>().unwrap();
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            use arrow::array::AsArray;
            Ok(col.as_string::<i64>().value(row).to_string())
        }
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn optional_string_at(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    string_at(col, row).ok()
}

/// Read a non-negative counter from an integer column.
fn count_at(col: &Arc<dyn Array>, row: usize) -> Result<u64> {
    if col.is_null(row) {
        bail!("null count value");
    }
    let value = match col.data_type() {
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            i64::from(arr.value(row))
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            arr.value(row)
        }
        DataType::UInt64 => {
            let arr = col.as_any().downcast_ref::<UInt64Array>().unwrap();
            return Ok(arr.value(row));
        }
        other => bail!("Expected integer column, got {other:?}"),
    };
    u64::try_from(value).with_context(|| format!("negative count {value}"))
}

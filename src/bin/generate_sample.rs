use std::sync::Arc;

use arrow::array::{Date32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{Duration, NaiveDate};
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (channel, category) pairs loosely modelled on the Indonesian trending list.
    let channels: [(&str, &str); 14] = [
        ("Ria Ricis Official", "Entertainment"),
        ("Rans Entertainment", "Entertainment"),
        ("Deddy Corbuzier", "People & Blogs"),
        ("Baim Paula", "People & Blogs"),
        ("Musica Studios", "Music"),
        ("GenHalilintar", "Entertainment"),
        ("Trans7 Official", "Entertainment"),
        ("NET. Official", "Entertainment"),
        ("MiawAug", "Gaming"),
        ("Jess No Limit", "Gaming"),
        ("BUDI01 GAMING", "Gaming"),
        ("Kompas TV", "News & Politics"),
        ("CNN Indonesia", "News & Politics"),
        ("Nihongo Mantappu", "Education"),
    ];

    let title_stems = [
        "Full Episode",
        "Official Music Video",
        "Highlights",
        "Behind The Scenes",
        "Q&A Spesial",
        "Eps. Terbaru",
        "Challenge 24 Jam",
    ];

    let first_day = NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date");
    let days: i64 = 60;
    let slots_per_day = 8;

    let mut all_dates: Vec<i32> = Vec::new();
    let mut all_titles: Vec<String> = Vec::new();
    let mut all_channels: Vec<String> = Vec::new();
    let mut all_categories: Vec<String> = Vec::new();
    let mut all_views: Vec<i64> = Vec::new();
    let mut all_likes: Vec<i64> = Vec::new();
    let mut all_dislikes: Vec<i64> = Vec::new();
    let mut all_comments: Vec<i64> = Vec::new();
    let mut all_tags: Vec<String> = Vec::new();

    let mut row_id = 0u64;
    for day in 0..days {
        let date = first_day + Duration::days(day);
        let epoch_days = date
            .signed_duration_since(NaiveDate::default())
            .num_days() as i32;

        for _ in 0..slots_per_day {
            let &(channel, category) = rng.pick(&channels);
            let stem = rng.pick(&title_stems);

            let view = (50_000.0 + rng.next_f64() * 4_950_000.0) as i64;
            let like = (view as f64 * (0.01 + rng.next_f64() * 0.07)) as i64;
            let dislike = (like as f64 * (0.02 + rng.next_f64() * 0.08)) as i64;
            let comment = (like as f64 * (0.05 + rng.next_f64() * 0.25)) as i64;

            all_dates.push(epoch_days);
            all_titles.push(format!("{channel}: {stem} #{row_id}"));
            all_channels.push(channel.to_string());
            all_categories.push(category.to_string());
            all_views.push(view);
            all_likes.push(like);
            all_dislikes.push(dislike);
            all_comments.push(comment);
            all_tags.push(format!("{}|trending", category.to_ascii_lowercase()));
            row_id += 1;
        }
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("trending_date", DataType::Date32, false),
        Field::new("title", DataType::Utf8, false),
        Field::new("channel_name", DataType::Utf8, false),
        Field::new("category", DataType::Utf8, false),
        Field::new("view", DataType::Int64, false),
        Field::new("like", DataType::Int64, false),
        Field::new("dislike", DataType::Int64, false),
        Field::new("comment", DataType::Int64, false),
        Field::new("tags", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Date32Array::from(all_dates)),
            Arc::new(StringArray::from(all_titles)),
            Arc::new(StringArray::from(all_channels)),
            Arc::new(StringArray::from(all_categories)),
            Arc::new(Int64Array::from(all_views)),
            Arc::new(Int64Array::from(all_likes)),
            Arc::new(Int64Array::from(all_dislikes)),
            Arc::new(Int64Array::from(all_comments)),
            Arc::new(StringArray::from(all_tags)),
        ],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet to the location the app probes at startup.
    std::fs::create_dir_all("data_input").expect("Failed to create data_input directory");
    let output_path = "data_input/trending.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {row_id} trending rows over {days} days to {output_path}");
}

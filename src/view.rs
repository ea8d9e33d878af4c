//! HTML pages served by the handlers.

use crate::chart::BarChart;
use ammonia::clean_text;

fn embed(video_id: &str, width: u32, height: u32) -> String {
    format!(
        r#"<iframe width="{width}" height="{height}" src="https://www.youtube.com/embed/{id}" frameborder="0" allowfullscreen></iframe>"#,
        id = clean_text(video_id)
    )
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn landing(video_id: &str) -> String {
    document(
        "Video Prediction Demo",
        &format!(
            "<h1>Video Prediction Demo</h1>\n{}\n<p><a href=\"/random/\">Predict a random video</a></p>",
            embed(video_id, 560, 315)
        ),
    )
}

pub fn video(video_id: &str) -> String {
    let id = clean_text(video_id);
    document(
        "Video",
        &format!(
            "<h2>\n  YouTube video link:\n  <a href=\"https://www.youtube.com/watch?v={id}\">\n    {id}\n  </a>\n</h2>\n{}",
            embed(video_id, 853, 480)
        ),
    )
}

/// Random prediction result: chart of the top classes plus the video itself.
pub fn prediction(chart: &BarChart, bars_count: usize, video_id: &str) -> String {
    document(
        &clean_text(&chart.title),
        &format!(
            "<h2>{title}</h2>\n<p>The model returned {bars_count} scored classes; the top {shown} are shown.</p>\n<div class=\"chart\">{svg}</div>\n{video}\n<p><a href=\"/random/\">Another one</a></p>",
            title = clean_text(&chart.title),
            shown = chart.bars.len(),
            svg = chart.to_svg(),
            video = embed(video_id, 853, 480)
        ),
    )
}

pub fn internal_error(detail: &str) -> String {
    format!(
        "\n    An internal error occurred: <pre>{}</pre>\n    See logs for full stacktrace.\n    ",
        clean_text(detail)
    )
}
